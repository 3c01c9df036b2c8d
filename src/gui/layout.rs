//! Layout Composer
//! Arranges the bound charts and the card set into a fixed grid of weighted
//! rows. Purely structural; drawing happens in the app.

use crate::charts::ChartSpec;
use crate::data::NewsCard;
use crate::gui::model::DashboardModel;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("row declares {panes} panes but {weights} weights")]
    WeightCountMismatch { panes: usize, weights: usize },
    #[error("row weights must be positive (got {0})")]
    NonPositiveWeight(f32),
    #[error("row has no panes")]
    EmptyRow,
}

/// A renderable cell: one chart or the headline card strip.
#[derive(Debug, Clone, PartialEq)]
pub enum Pane {
    Chart(ChartSpec),
    Cards {
        heading: String,
        cards: Vec<NewsCard>,
    },
}

/// A pane with its share of the row width.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub fraction: f32,
    pub pane: Pane,
}

/// One horizontal band of slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub slots: Vec<Slot>,
}

impl Row {
    /// Pair an ordered list of panes with a partition spec of relative
    /// widths. Weights are normalized to fractions summing to one; pane
    /// order is preserved.
    pub fn split(panes: Vec<Pane>, weights: &[f32]) -> Result<Self, LayoutError> {
        if panes.is_empty() {
            return Err(LayoutError::EmptyRow);
        }
        if panes.len() != weights.len() {
            return Err(LayoutError::WeightCountMismatch {
                panes: panes.len(),
                weights: weights.len(),
            });
        }
        if let Some(&bad) = weights.iter().find(|w| **w <= 0.0) {
            return Err(LayoutError::NonPositiveWeight(bad));
        }

        let total: f32 = weights.iter().sum();
        let slots = panes
            .into_iter()
            .zip(weights)
            .map(|(pane, &weight)| Slot {
                fraction: weight / total,
                pane,
            })
            .collect();

        Ok(Self { slots })
    }
}

/// A tree of positioned containers, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    pub rows: Vec<Row>,
}

/// The fixed dashboard grid: three equal metric columns, then a 2:1 split
/// of headline cards and the intensity map.
pub fn compose(model: DashboardModel) -> Result<LayoutTree, LayoutError> {
    let DashboardModel {
        rating,
        articles,
        sentiment,
        intensity_map,
        cards,
    } = model;

    let metrics = Row::split(
        vec![
            Pane::Chart(rating),
            Pane::Chart(articles),
            Pane::Chart(sentiment),
        ],
        &[1.0, 1.0, 1.0],
    )?;

    let detail = Row::split(
        vec![
            Pane::Cards {
                heading: "Top headlines — The Hacker News".to_string(),
                cards,
            },
            Pane::Chart(intensity_map),
        ],
        &[2.0, 1.0],
    )?;

    Ok(LayoutTree {
        rows: vec![metrics, detail],
    })
}
