//! Descriptive statistics and correlation for exploratory analysis.
//!
//! - **Mean/Std**: Welford's online algorithm, sample (n − 1) deviation.
//! - **Quantiles**: R-7 linear interpolation, the default in R and pandas.
//! - **Correlation**: Pearson over pairwise-complete observations.

use std::collections::BTreeMap;
use csv::WriterBuilder;
use error_stack::{Report, ResultExt};
use serde::Serialize;
use tracing::warn;

use crate::frame::{Column, Scalar, Table};
use crate::{Result, TabvizError};

// ── Numeric helpers ────────────────────────────────────────────────────

/// Quantile of an ascending slice by linear interpolation. `NaN` when empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let frac = rank - lo as f64;
            // an exact rank must not touch its neighbour, which may be infinite
            if frac == 0.0 || lo + 1 >= n {
                return sorted[lo];
            }
            sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac
        }
    }
}

/// Running mean and squared-deviation sum.
#[derive(Debug, Default, Clone, Copy)]
struct Welford {
    n: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn update(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn mean(&self) -> Option<f64> {
        (self.n > 0).then_some(self.mean)
    }

    fn sample_std(&self) -> Option<f64> {
        (self.n > 1).then(|| (self.m2 / (self.n - 1) as f64).sqrt())
    }
}

fn valid_sorted(values: &[f64]) -> Vec<f64> {
    let mut valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    valid.sort_by(f64::total_cmp);
    valid
}

/// Most frequent value of a column; ties go to the smallest value.
///
/// Fails with `NoMode` when the column holds no non-missing values.
pub fn column_mode(name: &str, column: &Column) -> Result<Scalar> {
    let mode = match column {
        Column::Numeric(values) => {
            let sorted = valid_sorted(values);
            let mut best: Option<(f64, usize)> = None;
            for run in sorted.chunk_by(|a, b| a == b) {
                if best.is_none_or(|(_, count)| run.len() > count) {
                    best = Some((run[0], run.len()));
                }
            }
            best.map(|(v, _)| Scalar::Number(v))
        }
        Column::Text(values) => {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for v in values.iter().flatten() {
                *counts.entry(v.as_str()).or_default() += 1;
            }
            let mut best: Option<(&str, usize)> = None;
            for (v, count) in counts {
                if best.is_none_or(|(_, c)| count > c) {
                    best = Some((v, count));
                }
            }
            best.map(|(v, _)| Scalar::Text(v.to_string()))
        }
    };

    mode.ok_or_else(|| {
        Report::new(TabvizError::NoMode {
            column: name.to_string(),
        })
    })
}

// ── Summary ────────────────────────────────────────────────────────────

/// One statistic column of the summary table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stat {
    Count,
    Unique,
    Top,
    Freq,
    Mean,
    Std,
    Min,
    Q25,
    Median,
    Q75,
    Max,
}

impl Stat {
    const TEXT: [Stat; 4] = [Stat::Count, Stat::Unique, Stat::Top, Stat::Freq];
    const NUMERIC: [Stat; 8] = [
        Stat::Count,
        Stat::Mean,
        Stat::Std,
        Stat::Min,
        Stat::Q25,
        Stat::Median,
        Stat::Q75,
        Stat::Max,
    ];
    const ALL: [Stat; 11] = [
        Stat::Count,
        Stat::Unique,
        Stat::Top,
        Stat::Freq,
        Stat::Mean,
        Stat::Std,
        Stat::Min,
        Stat::Q25,
        Stat::Median,
        Stat::Q75,
        Stat::Max,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stat::Count => "count",
            Stat::Unique => "unique",
            Stat::Top => "top",
            Stat::Freq => "freq",
            Stat::Mean => "mean",
            Stat::Std => "std",
            Stat::Min => "min",
            Stat::Q25 => "25%",
            Stat::Median => "50%",
            Stat::Q75 => "75%",
            Stat::Max => "max",
        }
    }
}

/// Summary of one source column. Fields that do not apply to the column's
/// kind stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub unique: Option<usize>,
    pub top: Option<String>,
    pub freq: Option<usize>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
    /// Most frequent value; `None` when it could not be computed.
    pub mode: Option<Scalar>,
}

impl ColumnSummary {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            unique: None,
            top: None,
            freq: None,
            mean: None,
            std: None,
            min: None,
            q25: None,
            median: None,
            q75: None,
            max: None,
            mode: None,
        }
    }

    fn numeric(name: &str, values: &[f64]) -> Self {
        let sorted = valid_sorted(values);
        let mut acc = Welford::default();
        sorted.iter().for_each(|&v| acc.update(v));
        let q = |p: f64| (!sorted.is_empty()).then(|| quantile_sorted(&sorted, p));

        Self {
            count: sorted.len(),
            mean: acc.mean(),
            std: acc.sample_std(),
            min: sorted.first().copied(),
            q25: q(0.25),
            median: q(0.5),
            q75: q(0.75),
            max: sorted.last().copied(),
            ..Self::empty(name)
        }
    }

    fn text(name: &str, values: &[Option<String>]) -> Self {
        // first-seen order decides ties for `top`
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for v in values.iter().flatten() {
            match counts.iter_mut().find(|(s, _)| *s == v.as_str()) {
                Some((_, c)) => *c += 1,
                None => counts.push((v.as_str(), 1)),
            }
        }
        let mut top: Option<(&str, usize)> = None;
        for &(v, c) in &counts {
            if top.is_none_or(|(_, best)| c > best) {
                top = Some((v, c));
            }
        }

        Self {
            count: counts.iter().map(|(_, c)| c).sum(),
            unique: Some(counts.len()),
            top: top.map(|(v, _)| v.to_string()),
            freq: top.map(|(_, c)| c),
            ..Self::empty(name)
        }
    }

    /// Cell text for one statistic; empty when missing.
    pub fn cell(&self, stat: Stat) -> String {
        fn num(v: Option<f64>) -> String {
            v.filter(|x| !x.is_nan()).map(|x| x.to_string()).unwrap_or_default()
        }
        match stat {
            Stat::Count => self.count.to_string(),
            Stat::Unique => self.unique.map(|u| u.to_string()).unwrap_or_default(),
            Stat::Top => self.top.clone().unwrap_or_default(),
            Stat::Freq => self.freq.map(|f| f.to_string()).unwrap_or_default(),
            Stat::Mean => num(self.mean),
            Stat::Std => num(self.std),
            Stat::Min => num(self.min),
            Stat::Q25 => num(self.q25),
            Stat::Median => num(self.median),
            Stat::Q75 => num(self.q75),
            Stat::Max => num(self.max),
        }
    }
}

/// Per-column descriptive statistics plus a most-frequent-value column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub stats: Vec<Stat>,
    pub rows: Vec<ColumnSummary>,
}

impl Summary {
    pub fn row(&self, name: &str) -> Option<&ColumnSummary> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Header names, `mode` last.
    pub fn header(&self) -> Vec<&'static str> {
        self.stats
            .iter()
            .map(|s| s.name())
            .chain(std::iter::once("mode"))
            .collect()
    }

    /// CSV with one line per source column and an unnamed index column.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        let header: Vec<&str> = std::iter::once("").chain(self.header()).collect();
        writer.write_record(&header).change_context(TabvizError::Io)?;

        for row in &self.rows {
            let mode = row.mode.as_ref().map(|m| m.to_string()).unwrap_or_default();
            let record: Vec<String> = std::iter::once(row.name.clone())
                .chain(self.stats.iter().map(|&stat| row.cell(stat)))
                .chain(std::iter::once(mode))
                .collect();
            writer
                .write_record(&record)
                .change_context(TabvizError::Io)
                .attach_with(|| format!("summary row '{}'", row.name))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| err.into_error())
            .change_context(TabvizError::Io)?;
        String::from_utf8(bytes).change_context(TabvizError::Io)
    }
}

/// Summarise every column of `table`.
///
/// The statistics listed depend on the column kinds present: numeric-only
/// tables get count/mean/std/quartiles, text-only tables get
/// count/unique/top/freq, mixed tables get both. The mode of each column is
/// computed independently; a column whose mode cannot be computed gets an
/// empty entry and the rest of the summary is unaffected.
pub fn describe(table: &Table) -> Summary {
    let has_numeric = table.columns().any(|(_, c)| c.is_numeric());
    let has_text = table.columns().any(|(_, c)| !c.is_numeric());
    let stats = match (has_numeric, has_text) {
        (true, false) => Stat::NUMERIC.to_vec(),
        (false, true) => Stat::TEXT.to_vec(),
        _ => Stat::ALL.to_vec(),
    };

    let rows = table
        .columns()
        .map(|(name, column)| {
            let mut row = match column {
                Column::Numeric(v) => ColumnSummary::numeric(name, v),
                Column::Text(v) => ColumnSummary::text(name, v),
            };
            row.mode = match column_mode(name, column) {
                Ok(mode) => Some(mode),
                Err(report) => {
                    warn!(column = name, error = ?report, "mode unavailable, leaving it empty");
                    None
                }
            };
            row
        })
        .collect();

    Summary { stats, rows }
}

// ── Correlation ────────────────────────────────────────────────────────

/// Square, row-major correlation matrix labelled by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    pub values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.len())
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.len() + col]
    }
}

/// Pearson correlation over the rows where both values are present.
/// `NaN` with fewer than two such rows or zero variance on either side.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .map(|(&x, &y)| (x, y))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for &(x, y) in &pairs {
        let (dx, dy) = (x - mean_x, y - mean_y);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx <= 0.0 || syy <= 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

/// Pairwise Pearson matrix over the given numeric columns.
pub fn correlation_matrix(columns: &[(&str, &[f64])]) -> CorrelationMatrix {
    let n = columns.len();
    let mut values = vec![f64::NAN; n * n];
    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                // a column correlates perfectly with itself unless it is constant
                match pearson(columns[i].1, columns[i].1) {
                    r if r.is_nan() => f64::NAN,
                    _ => 1.0,
                }
            } else {
                pearson(columns[i].1, columns[j].1)
            };
            values[i * n + j] = r;
            values[j * n + i] = r;
        }
    }
    CorrelationMatrix {
        names: columns.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quantiles_interpolate() {
        let s = [7.0, 15.0, 36.0, 39.0, 40.0, 41.0];
        assert!(close(quantile_sorted(&s, 0.25), 20.25));
        assert!(close(quantile_sorted(&s, 0.5), 37.5));
        assert!(close(quantile_sorted(&s, 0.75), 39.75));
        assert!(quantile_sorted(&[], 0.5).is_nan());
        assert_eq!(quantile_sorted(&[3.0], 0.9), 3.0);
    }

    #[test]
    fn exact_rank_ignores_infinite_neighbour() {
        let s = [1.0, 3.0, f64::INFINITY];
        assert_eq!(quantile_sorted(&s, 0.5), 3.0);
        assert_eq!(quantile_sorted(&s, 0.0), 1.0);
        assert_eq!(quantile_sorted(&s, 1.0), f64::INFINITY);

        let row = ColumnSummary::numeric("a", &[1.0, f64::INFINITY, 3.0]);
        assert_eq!(row.median, Some(3.0));
        assert_eq!(row.cell(Stat::Median), "3");
    }

    #[test]
    fn numeric_summary_matches_hand_values() {
        let row = ColumnSummary::numeric("v", &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0, f64::NAN]);
        assert_eq!(row.count, 8);
        assert!(close(row.mean.unwrap(), 5.0));
        assert!(close(row.std.unwrap(), 4.571428571428571_f64.sqrt()));
        assert_eq!(row.min, Some(2.0));
        assert_eq!(row.max, Some(9.0));
        assert!(close(row.median.unwrap(), 4.5));
    }

    #[test]
    fn single_value_has_no_std() {
        let row = ColumnSummary::numeric("v", &[3.0]);
        assert_eq!(row.std, None);
        assert_eq!(row.cell(Stat::Std), "");
    }

    #[test]
    fn text_summary_top_and_freq() {
        let values: Vec<Option<String>> = ["b", "a", "b", "c"]
            .into_iter()
            .map(|s| Some(s.to_string()))
            .chain([None])
            .collect();
        let row = ColumnSummary::text("t", &values);
        assert_eq!(row.count, 4);
        assert_eq!(row.unique, Some(3));
        assert_eq!(row.top.as_deref(), Some("b"));
        assert_eq!(row.freq, Some(2));
    }

    #[test]
    fn mode_prefers_smallest_on_tie() {
        let numeric = Column::Numeric(vec![3.0, 1.0, 3.0, 1.0, 2.0]);
        assert_eq!(column_mode("n", &numeric).unwrap(), Scalar::Number(1.0));
        let text = Column::from(vec!["z", "y", "z", "y"]);
        assert_eq!(column_mode("t", &text).unwrap(), Scalar::Text("y".into()));
    }

    #[test]
    fn mode_fails_without_values() {
        let err = column_mode("n", &Column::Numeric(vec![f64::NAN, f64::NAN])).unwrap_err();
        assert!(matches!(err.current_context(), TabvizError::NoMode { column } if column == "n"));
    }

    #[test]
    fn describe_recovers_from_missing_mode() {
        let table = Table::from_columns([
            ("a", vec![1.0, 2.0, 2.0]),
            ("b", vec![f64::NAN, f64::NAN, f64::NAN]),
        ])
        .unwrap();
        let summary = describe(&table);
        assert_eq!(summary.stats, Stat::NUMERIC.to_vec());
        assert_eq!(summary.row("a").unwrap().mode, Some(Scalar::Number(2.0)));
        assert_eq!(summary.row("b").unwrap().mode, None);
        assert_eq!(summary.row("b").unwrap().count, 0);
    }

    #[test]
    fn describe_mixed_table_lists_all_stats() {
        let table = Table::new()
            .with_column("n", vec![1.0, 2.0])
            .and_then(|t| t.with_column("s", vec!["x", "y"]))
            .unwrap();
        let summary = describe(&table);
        assert_eq!(summary.stats.len(), 11);
        let csv = summary.to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            ",count,unique,top,freq,mean,std,min,25%,50%,75%,max,mode"
        );
        assert_eq!(lines.next().unwrap(), "n,2,,,,1.5,0.7071067811865476,1,1.25,1.5,1.75,2,1");
        assert_eq!(lines.next().unwrap(), "s,2,2,x,1,,,,,,,,x");
    }

    #[test]
    fn csv_quotes_awkward_fields() {
        let table = Table::new()
            .with_column("a,b", vec!["say \"hi\"", "say \"hi\"", "plain"])
            .unwrap();
        let csv = describe(&table).to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), ",count,unique,top,freq,mode");
        assert_eq!(
            lines.next().unwrap(),
            "\"a,b\",3,2,\"say \"\"hi\"\"\",2,\"say \"\"hi\"\"\""
        );
    }

    #[test]
    fn pearson_known_values() {
        assert!(close(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0));
        assert!(close(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0));
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        // incomplete pairs are skipped
        assert!(close(pearson(&[1.0, f64::NAN, 2.0, 3.0], &[1.0, 5.0, 2.0, 3.0]), 1.0));
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 1.0, 4.0, 3.0];
        let c = [9.0, 7.0, 4.0, 1.0];
        let m = correlation_matrix(&[("a", &a), ("b", &b), ("c", &c)]);
        assert_eq!(m.shape(), (3, 3));
        for i in 0..3 {
            assert!(close(m.get(i, i), 1.0));
            for j in 0..3 {
                assert!(close(m.get(i, j), m.get(j, i)));
            }
        }
        assert!(close(m.get(0, 1), 0.6));
    }
}
