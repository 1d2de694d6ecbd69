use std::path::PathBuf;

use error_stack::Report;
use serde::Serialize;
use tracing::{debug, info};

use super::Plotter;
use crate::core::Style;
use crate::figure::figure;
use crate::frame::Table;
use crate::output::{BOXPLOT, CORRELATION_HEATMAP, DESCRIPTIVE_STATISTICS, FINDINGS};
use crate::stats::{CorrelationMatrix, Summary, correlation_matrix, describe};
use crate::{Result, TabvizError};

/// Everything one exploratory pass produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exploration {
    pub summary: Summary,
    /// Empty when the table has fewer than two numeric columns.
    pub correlation: CorrelationMatrix,
    /// Files written, in the order they were produced.
    pub artifacts: Vec<PathBuf>,
}

impl Plotter {
    /// Descriptive statistics, an outlier box plot, a correlation heatmap and
    /// a short findings note.
    ///
    /// The box plot needs at least one numeric column and the heatmap at
    /// least two; otherwise they are skipped. An empty table is rejected
    /// before anything is written.
    pub fn explore(&self, table: &Table) -> Result<Exploration> {
        if table.is_empty() {
            return Err(Report::new(TabvizError::EmptyTable).attach(format!(
                "{} rows, {} columns",
                table.row_count(),
                table.column_count()
            )));
        }

        let summary = describe(table);
        let mut artifacts = vec![
            self.out
                .write_text(DESCRIPTIVE_STATISTICS, &summary.to_csv()?)?,
        ];
        let mut findings = vec![format!(
            "Descriptive statistics saved to {DESCRIPTIVE_STATISTICS}."
        )];

        let numeric = table.numeric_columns();
        debug!(
            columns = table.column_count(),
            numeric = numeric.len(),
            "exploring table"
        );

        if !numeric.is_empty() {
            let style = Style::default()
                .color(self.config.accent_color()?)
                .opacity(0.35);
            let plot = figure()
                .boxplot(|b| {
                    numeric
                        .iter()
                        .fold(b, |b, (name, values)| b.group(*name, values.to_vec()))
                        .title("Box Plot for Outlier Detection")
                        .x_label("Variables")
                        .y_label("Values")
                        .style(style)
                })
                .build();
            artifacts.push(self.render(&plot, BOXPLOT)?);
            findings.push(format!(
                "Box plot saved to {BOXPLOT}; values beyond whiskers suggest potential outliers."
            ));
        }

        let correlation = if numeric.len() >= 2 {
            let matrix = correlation_matrix(&numeric);
            let plot = figure()
                .heatmap(|h| {
                    h.grid(matrix.names.clone(), matrix.names.clone(), matrix.values.clone())
                        .annotate(2)
                        .colormap(self.config.colormap)
                        .title("Correlation Heatmap")
                })
                .build();
            artifacts.push(self.render(&plot, CORRELATION_HEATMAP)?);
            findings.push(format!(
                "Correlation heatmap saved to {CORRELATION_HEATMAP}; coefficients near 1/-1 indicate strong linear relationships."
            ));
            matrix
        } else {
            CorrelationMatrix::default()
        };

        artifacts.push(self.out.write_text(FINDINGS, &findings.join("\n"))?);
        info!(artifacts = artifacts.len(), "exploration complete");

        Ok(Exploration {
            summary,
            correlation,
            artifacts,
        })
    }
}
