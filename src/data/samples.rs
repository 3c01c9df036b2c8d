//! Static Sample Datasets
//! Fixed monthly metric tables and the regional intensity table, built once
//! at startup. All values are inline literals; there is no ingestion path.

use polars::prelude::*;

/// Month labels for one render year, in chronological order.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024", "Jun 2024", "Jul 2024",
    "Aug 2024", "Sep 2024", "Oct 2024", "Nov 2024", "Dec 2024",
];

const RATINGS: [f64; 12] = [
    3.8, 4.0, 4.2, 4.1, 4.3, 4.4, 4.5, 4.6, 4.4, 4.3, 4.2, 4.4,
];

const ARTICLES: [i64; 12] = [28, 34, 30, 27, 40, 45, 42, 50, 48, 44, 39, 36];

const POSITIVE_PCT: [i64; 12] = [55, 57, 60, 58, 62, 64, 66, 68, 65, 63, 61, 64];

const REGIONS: [&str; 8] = [
    "Delhi",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Telangana",
    "West Bengal",
    "Gujarat",
    "Uttar Pradesh",
];

const LATITUDES: [f64; 8] = [
    28.6139, 19.7515, 15.3173, 11.1271, 17.3850, 22.9868, 22.2587, 26.8467,
];

const LONGITUDES: [f64; 8] = [
    77.2090, 75.7139, 75.7139, 78.6569, 78.4867, 87.8550, 71.1924, 80.9462,
];

const INTENSITY: [i64; 8] = [85, 70, 50, 40, 60, 30, 35, 45];

fn months() -> Vec<String> {
    MONTH_LABELS.iter().map(|m| m.to_string()).collect()
}

/// Monthly site rating (1..5 scale), columns ["month", "rating"].
pub fn monthly_ratings() -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("month".into(), months()),
        Column::new("rating".into(), RATINGS.to_vec()),
    ])
}

/// Articles published per month, columns ["month", "articles"].
pub fn articles_per_month() -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("month".into(), months()),
        Column::new("articles".into(), ARTICLES.to_vec()),
    ])
}

/// Percent-positive sentiment per month, columns ["month", "positive_pct"].
pub fn sentiment_trend() -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("month".into(), months()),
        Column::new("positive_pct".into(), POSITIVE_PCT.to_vec()),
    ])
}

/// Report intensity per region (0-100), columns ["region", "lat", "lon", "value"].
/// Coordinates are fixed reference points.
pub fn region_intensity() -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new(
            "region".into(),
            REGIONS.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
        ),
        Column::new("lat".into(), LATITUDES.to_vec()),
        Column::new("lon".into(), LONGITUDES.to_vec()),
        Column::new("value".into(), INTENSITY.to_vec()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_series_tables_have_one_row_per_month() {
        for df in [
            monthly_ratings().unwrap(),
            articles_per_month().unwrap(),
            sentiment_trend().unwrap(),
        ] {
            assert_eq!(df.height(), MONTH_LABELS.len());
        }
    }

    #[test]
    fn month_column_is_chronological() {
        let df = monthly_ratings().unwrap();
        let months = df.column("month").unwrap();
        for (i, expected) in MONTH_LABELS.iter().enumerate() {
            let label = months.get(i).unwrap().to_string();
            assert_eq!(label.trim_matches('"'), *expected);
        }
    }

    #[test]
    fn region_table_has_all_channels() {
        let df = region_intensity().unwrap();
        assert_eq!(df.height(), 8);
        for col in ["region", "lat", "lon", "value"] {
            assert!(df.column(col).is_ok());
        }
    }

    #[test]
    fn intensity_values_stay_in_band() {
        let df = region_intensity().unwrap();
        let values = df.column("value").unwrap().i64().unwrap();
        assert!(values.into_iter().flatten().all(|v| (0..=100).contains(&v)));
    }
}
