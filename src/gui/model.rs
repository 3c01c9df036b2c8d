//! Dashboard Model
//! The product of one provider-to-binder pass: four bound chart descriptions
//! plus the headline cards. Built once at startup, never mutated.

use crate::charts::{ChartBinder, ChartKind, ChartSpec};
use crate::data::{self, NewsCard};
use anyhow::Context;

/// Everything the dashboard renders, in bound form.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub rating: ChartSpec,
    pub articles: ChartSpec,
    pub sentiment: ChartSpec,
    pub intensity_map: ChartSpec,
    pub cards: Vec<NewsCard>,
}

impl DashboardModel {
    /// Bind every static dataset into its chart description. One linear,
    /// synchronous pass; a malformed dataset aborts the render here.
    pub fn build() -> anyhow::Result<Self> {
        let rating = ChartBinder::bind_series(
            "Monthly Rating Trend",
            &data::monthly_ratings()?,
            "month",
            "rating",
            ChartKind::Line,
        )
        .context("binding the rating series")?;

        let articles = ChartBinder::bind_series(
            "Articles per Month",
            &data::articles_per_month()?,
            "month",
            "articles",
            ChartKind::Bar,
        )
        .context("binding the article counts")?;

        let sentiment = ChartBinder::bind_series(
            "Sentiment (Positive %)",
            &data::sentiment_trend()?,
            "month",
            "positive_pct",
            ChartKind::Line,
        )
        .context("binding the sentiment trend")?;

        let intensity_map = ChartBinder::bind_geo(
            "India — Cyber Report Intensity",
            &data::region_intensity()?,
            "region",
            "lat",
            "lon",
            "value",
        )
        .context("binding the regional intensity map")?;

        let cards = data::top_headlines();
        tracing::info!(charts = 4, cards = cards.len(), "dashboard model bound");

        Ok(Self {
            rating,
            articles,
            sentiment,
            intensity_map,
            cards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;

    #[test]
    fn model_builds_from_static_data() {
        let model = DashboardModel::build().unwrap();

        assert_eq!(model.rating.kind, ChartKind::Line);
        assert_eq!(model.articles.kind, ChartKind::Bar);
        assert_eq!(model.sentiment.kind, ChartKind::Line);
        assert_eq!(model.intensity_map.kind, ChartKind::GeoScatter);

        assert_eq!(model.rating.points.len(), 12);
        assert_eq!(model.articles.points.len(), 12);
        assert_eq!(model.sentiment.points.len(), 12);
        assert_eq!(model.intensity_map.points.len(), 8);
        assert_eq!(model.cards.len(), 3);
    }

    #[test]
    fn repeated_builds_are_equivalent() {
        let a = DashboardModel::build().unwrap();
        let b = DashboardModel::build().unwrap();
        assert_eq!(a, b);
    }
}
