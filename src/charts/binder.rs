//! Chart Binder Module
//! Maps a named dataset to a renderer-agnostic chart description: chart kind,
//! encoded x/y (or lon/lat) channels, hover text, and marker scaling for the
//! map view. Binding is a pure function of its inputs.

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindError {
    #[error("dataset '{dataset}' is empty")]
    EmptyDataset { dataset: String },
    #[error("column '{column}' is not numeric (found {dtype})")]
    NonNumeric { column: String, dtype: String },
    #[error("column '{column}' has no value at row {row}")]
    MissingValue { column: String, row: usize },
    #[error("table error: {0}")]
    Table(#[from] PolarsError),
}

/// Declared chart kind for a bound dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Line,
    Bar,
    GeoScatter,
}

/// Marker styling derived linearly from the intensity channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub size: f32,
    pub intensity: f64,
}

/// One encoded data point. For series charts `x` is the ordinal position of
/// the period and `label` the period name; for the map view `x`/`y` carry
/// lon/lat and `label` the region name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub hover: String,
    pub marker: Option<MarkerSpec>,
}

/// Renderer-agnostic chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<BoundPoint>,
}

impl ChartSpec {
    /// Point labels in bound order, for axis formatting.
    pub fn point_labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }
}

/// Marker size floor in plot units.
const MARKER_BASE: f32 = 8.0;
/// Intensity units per additional marker unit.
const MARKER_SCALE: f32 = 3.0;

/// Builds chart descriptions from dataframes. Stateless.
pub struct ChartBinder;

impl ChartBinder {
    /// Bind an ordered (period, value) table to a line or bar description.
    pub fn bind_series(
        title: &str,
        df: &DataFrame,
        key_col: &str,
        value_col: &str,
        kind: ChartKind,
    ) -> Result<ChartSpec, BindError> {
        Self::ensure_rows(title, df)?;
        let labels = Self::label_values(df, key_col)?;
        let values = Self::numeric_values(df, value_col)?;

        let points = labels
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, value))| BoundPoint {
                hover: format!("{}: {}", label, value),
                label,
                x: i as f64,
                y: value,
                marker: None,
            })
            .collect();

        Ok(ChartSpec {
            kind,
            title: title.to_string(),
            x_label: key_col.to_string(),
            y_label: value_col.to_string(),
            points,
        })
    }

    /// Bind a (region, lat, lon, intensity) table to a marker-map description.
    /// Marker size and color scale linearly with the intensity channel.
    pub fn bind_geo(
        title: &str,
        df: &DataFrame,
        region_col: &str,
        lat_col: &str,
        lon_col: &str,
        value_col: &str,
    ) -> Result<ChartSpec, BindError> {
        Self::ensure_rows(title, df)?;
        let regions = Self::label_values(df, region_col)?;
        let lats = Self::numeric_values(df, lat_col)?;
        let lons = Self::numeric_values(df, lon_col)?;
        let values = Self::numeric_values(df, value_col)?;

        let points = regions
            .into_iter()
            .zip(lats)
            .zip(lons)
            .zip(values)
            .map(|(((region, lat), lon), value)| BoundPoint {
                hover: format!("{}: {:.0}", region, value),
                label: region,
                x: lon,
                y: lat,
                marker: Some(MarkerSpec {
                    size: Self::marker_size(value),
                    intensity: value,
                }),
            })
            .collect();

        Ok(ChartSpec {
            kind: ChartKind::GeoScatter,
            title: title.to_string(),
            x_label: lon_col.to_string(),
            y_label: lat_col.to_string(),
            points,
        })
    }

    /// Linear marker sizing: intensity / 3 + 8.
    pub fn marker_size(intensity: f64) -> f32 {
        intensity as f32 / MARKER_SCALE + MARKER_BASE
    }

    fn ensure_rows(dataset: &str, df: &DataFrame) -> Result<(), BindError> {
        if df.height() == 0 {
            return Err(BindError::EmptyDataset {
                dataset: dataset.to_string(),
            });
        }
        Ok(())
    }

    fn label_values(df: &DataFrame, column: &str) -> Result<Vec<String>, BindError> {
        let series = df.column(column)?;
        let mut labels = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let value = series.get(i)?;
            if value.is_null() {
                return Err(BindError::MissingValue {
                    column: column.to_string(),
                    row: i,
                });
            }
            labels.push(value.to_string().trim_matches('"').to_string());
        }
        Ok(labels)
    }

    fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, BindError> {
        let series = df.column(column)?;
        if !Self::is_numeric(series.dtype()) {
            return Err(BindError::NonNumeric {
                column: column.to_string(),
                dtype: series.dtype().to_string(),
            });
        }

        let casted = series.cast(&DataType::Float64)?;
        let values = casted.f64()?;

        let mut out = Vec::with_capacity(values.len());
        for (i, value) in values.into_iter().enumerate() {
            match value {
                Some(v) => out.push(v),
                None => {
                    return Err(BindError::MissingValue {
                        column: column.to_string(),
                        row: i,
                    })
                }
            }
        }
        Ok(out)
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn rating_spec() -> ChartSpec {
        ChartBinder::bind_series(
            "Monthly Rating Trend",
            &data::monthly_ratings().unwrap(),
            "month",
            "rating",
            ChartKind::Line,
        )
        .unwrap()
    }

    fn geo_spec() -> ChartSpec {
        ChartBinder::bind_geo(
            "India — Cyber Report Intensity",
            &data::region_intensity().unwrap(),
            "region",
            "lat",
            "lon",
            "value",
        )
        .unwrap()
    }

    #[test]
    fn rating_series_binds_twelve_points_in_input_order() {
        let spec = rating_spec();
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.points.len(), 12);

        let labels: Vec<&str> = spec.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, data::MONTH_LABELS);

        assert_eq!(spec.points[0].y, 3.8);
        assert_eq!(spec.points[7].y, 4.6);
        assert_eq!(spec.points[11].y, 4.4);
        assert!(spec.points.iter().enumerate().all(|(i, p)| p.x == i as f64));
    }

    #[test]
    fn bound_point_count_matches_row_count_for_every_table() {
        let tables = [
            (data::monthly_ratings().unwrap(), "rating"),
            (data::articles_per_month().unwrap(), "articles"),
            (data::sentiment_trend().unwrap(), "positive_pct"),
        ];
        for (df, value_col) in &tables {
            let spec =
                ChartBinder::bind_series("t", df, "month", value_col, ChartKind::Line).unwrap();
            assert_eq!(spec.points.len(), df.height());
        }

        let geo = geo_spec();
        assert_eq!(geo.points.len(), data::region_intensity().unwrap().height());
    }

    #[test]
    fn binding_is_idempotent() {
        assert_eq!(rating_spec(), rating_spec());
        assert_eq!(geo_spec(), geo_spec());

        let a = serde_json::to_string(&rating_spec()).unwrap();
        let b = serde_json::to_string(&rating_spec()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let df = DataFrame::new(vec![
            Column::new("month".into(), Vec::<String>::new()),
            Column::new("rating".into(), Vec::<f64>::new()),
        ])
        .unwrap();

        let err = ChartBinder::bind_series("empty", &df, "month", "rating", ChartKind::Line)
            .unwrap_err();
        assert!(matches!(err, BindError::EmptyDataset { .. }));
    }

    #[test]
    fn non_numeric_value_column_is_rejected() {
        let df = DataFrame::new(vec![
            Column::new("month".into(), vec!["Jan 2024".to_string()]),
            Column::new("rating".into(), vec!["high".to_string()]),
        ])
        .unwrap();

        let err = ChartBinder::bind_series("bad", &df, "month", "rating", ChartKind::Line)
            .unwrap_err();
        assert!(matches!(err, BindError::NonNumeric { .. }));
    }

    #[test]
    fn missing_column_is_reported() {
        let df = data::monthly_ratings().unwrap();
        let err = ChartBinder::bind_series("t", &df, "month", "absent", ChartKind::Bar)
            .unwrap_err();
        assert!(matches!(err, BindError::Table(_)));
    }

    #[test]
    fn geo_markers_scale_linearly_from_intensity() {
        let spec = geo_spec();
        let delhi = spec.points.iter().find(|p| p.label == "Delhi").unwrap();

        assert_eq!(delhi.x, 77.2090);
        assert_eq!(delhi.y, 28.6139);
        assert_eq!(delhi.hover, "Delhi: 85");

        let marker = delhi.marker.unwrap();
        assert_eq!(marker.intensity, 85.0);
        assert!((marker.size - (85.0 / 3.0 + 8.0)).abs() < 1e-4);
    }
}
