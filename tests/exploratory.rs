use std::fs;
use std::path::Path;

use tabviz::config::RenderConfig;
use tabviz::output::{BOXPLOT, CORRELATION_HEATMAP, DESCRIPTIVE_STATISTICS, FINDINGS};
use tabviz::{Column, Plotter, Scalar, Table, TabvizError};
use tempfile::tempdir;

fn plotter(dir: &Path) -> Plotter {
    let config = RenderConfig {
        dpi: 40,
        ..RenderConfig::default()
    };
    Plotter::new(dir, config)
}

fn names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn empty_table_fails_before_writing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("plots");

    let no_columns = plotter(&out).explore(&Table::new()).unwrap_err();
    assert_eq!(no_columns.current_context(), &TabvizError::EmptyTable);

    let no_rows = Table::from_columns([("a", Vec::<f64>::new())]).unwrap();
    let err = plotter(&out).explore(&no_rows).unwrap_err();
    assert_eq!(err.current_context(), &TabvizError::EmptyTable);

    assert!(!out.exists());
}

#[test]
fn text_only_table_gets_no_charts() {
    let dir = tempdir().unwrap();
    let table = Table::from_columns([("city", vec!["oslo", "rome", "oslo"])]).unwrap();
    let result = plotter(dir.path()).explore(&table).unwrap();

    assert_eq!(names(&result.artifacts), [DESCRIPTIVE_STATISTICS, FINDINGS]);
    assert!(!dir.path().join(BOXPLOT).exists());
    assert!(result.correlation.is_empty());

    let csv = fs::read_to_string(dir.path().join(DESCRIPTIVE_STATISTICS)).unwrap();
    assert_eq!(csv, ",count,unique,top,freq,mode\ncity,3,2,oslo,2,oslo\n");
}

#[test]
fn single_numeric_column_gets_boxplot_only() {
    let dir = tempdir().unwrap();
    let table = Table::from_columns([("v", vec![1.0, 2.0, 3.0, 50.0])]).unwrap();
    let result = plotter(dir.path()).explore(&table).unwrap();

    assert_eq!(
        names(&result.artifacts),
        [DESCRIPTIVE_STATISTICS, BOXPLOT, FINDINGS]
    );
    assert!(!dir.path().join(CORRELATION_HEATMAP).exists());
    assert!(result.correlation.is_empty());

    let findings = fs::read_to_string(dir.path().join(FINDINGS)).unwrap();
    assert_eq!(findings.lines().count(), 2);
    assert!(findings.contains("outliers"));
}

#[test]
fn several_numeric_columns_get_both_charts() {
    let dir = tempdir().unwrap();
    let table = Table::new()
        .with_column("a", vec![1.0, 2.0, 3.0, 4.0, 5.0])
        .and_then(|t| t.with_column("b", vec![2.0, 4.1, 5.9, 8.2, 9.9]))
        .and_then(|t| t.with_column("c", vec![5.0, 3.0, 4.0, 1.0, 2.0]))
        .and_then(|t| t.with_column("label", vec!["p", "q", "p", "q", "p"]))
        .unwrap();
    let result = plotter(dir.path()).explore(&table).unwrap();

    assert_eq!(
        names(&result.artifacts),
        [DESCRIPTIVE_STATISTICS, BOXPLOT, CORRELATION_HEATMAP, FINDINGS]
    );
    for path in &result.artifacts {
        assert!(path.is_file(), "{}", path.display());
    }

    let corr = &result.correlation;
    assert_eq!(corr.shape(), (3, 3));
    assert_eq!(corr.names, ["a", "b", "c"]);
    for i in 0..3 {
        assert!((corr.get(i, i) - 1.0).abs() < 1e-9);
    }
    assert!(corr.get(0, 1) > 0.99);
    assert!(corr.get(0, 2) < 0.0);

    let findings = fs::read_to_string(dir.path().join(FINDINGS)).unwrap();
    assert_eq!(findings.lines().count(), 3);
    assert!(findings.contains("1/-1"));

    // mixed table: every statistic plus mode
    let header = result.summary.header();
    assert_eq!(header.len(), 12);
    assert_eq!(header.last(), Some(&"mode"));
    assert_eq!(
        result.summary.row("label").and_then(|r| r.mode.clone()),
        Some(Scalar::Text("p".into()))
    );
}

#[test]
fn column_without_values_keeps_the_batch_going() {
    let dir = tempdir().unwrap();
    let table = Table::new()
        .with_column("a", vec![1.0, 2.0, 2.0])
        .and_then(|t| t.with_column("empty", Column::Text(vec![None, None, None])))
        .unwrap();
    let result = plotter(dir.path()).explore(&table).unwrap();

    assert_eq!(result.summary.row("empty").unwrap().mode, None);
    assert_eq!(
        result.summary.row("a").unwrap().mode,
        Some(Scalar::Number(2.0))
    );
    let csv = fs::read_to_string(dir.path().join(DESCRIPTIVE_STATISTICS)).unwrap();
    let empty_row = csv.lines().find(|l| l.starts_with("empty,")).unwrap();
    assert!(empty_row.ends_with(','));
}
