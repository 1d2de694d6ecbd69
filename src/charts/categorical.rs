use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use super::Plotter;
use crate::Result;
use crate::core::Style;
use crate::figure::figure;
use crate::output::CATEGORY_FREQUENCY;

/// Occurrences per distinct label, in label order, and the chart drawn from them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryCounts<T> {
    pub bars: Vec<(T, usize)>,
    pub path: PathBuf,
}

impl<T: PartialEq> CategoryCounts<T> {
    /// Sum of all bar heights.
    pub fn total(&self) -> usize {
        self.bars.iter().map(|(_, n)| n).sum()
    }

    pub fn count(&self, label: &T) -> Option<usize> {
        self.bars
            .iter()
            .find_map(|(l, n)| (l == label).then_some(*n))
    }
}

impl Plotter {
    /// Bar chart of how often each distinct label occurs.
    ///
    /// Empty input draws empty axes.
    pub fn category_frequency<I>(&self, labels: I) -> Result<CategoryCounts<I::Item>>
    where
        I: IntoIterator,
        I::Item: Ord + Display,
    {
        let mut counts: BTreeMap<I::Item, usize> = BTreeMap::new();
        for label in labels {
            *counts.entry(label).or_default() += 1;
        }
        let bars: Vec<(I::Item, usize)> = counts.into_iter().collect();
        debug!(categories = bars.len(), "counted category labels");

        let style = Style::default().color(self.config.accent_color()?);
        let plot = figure()
            .bars(|b| {
                bars.iter()
                    .fold(b, |b, (label, n)| b.bar(label.to_string(), *n as f64))
                    .title("Category Frequency")
                    .x_label("Category")
                    .y_label("Frequency")
                    .style(style)
            })
            .build();

        let path = self.render(&plot, CATEGORY_FREQUENCY)?;
        Ok(CategoryCounts { bars, path })
    }
}
