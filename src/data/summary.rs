//! Series Summary
//! Descriptive statistics shown under the data cards.

use crate::charts::RenderSeries;
use statrs::statistics::{Data, OrderStatistics, Statistics};

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; 0 for a single bar.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesSummary {
    /// `None` when the series has no bars.
    pub fn from_series(series: &RenderSeries) -> Option<Self> {
        let values: Vec<f64> = series.iter().map(|bar| bar.numeric_value).collect();
        if values.is_empty() {
            return None;
        }

        let std = if values.len() > 1 {
            Statistics::std_dev(values.iter())
        } else {
            0.0
        };
        let mut data = Data::new(values.clone());

        Some(Self {
            count: values.len(),
            mean: Statistics::mean(values.iter()),
            median: data.median(),
            std,
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
        })
    }
}
