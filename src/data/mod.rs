//! Data module - static sample datasets

mod cards;
mod samples;

pub use cards::{top_headlines, NewsCard};
pub use samples::{
    articles_per_month, monthly_ratings, region_intensity, sentiment_trend, MONTH_LABELS,
};
