use std::collections::BTreeSet;

use proptest::prelude::*;
use tabviz::Plotter;
use tabviz::config::RenderConfig;
use tempfile::TempDir;

fn plotter() -> (TempDir, Plotter) {
    let dir = TempDir::new().unwrap();
    let config = RenderConfig {
        dpi: 20,
        ..RenderConfig::default()
    };
    let plotter = Plotter::new(dir.path(), config);
    (dir, plotter)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn bar_heights_sum_to_input_length(labels in prop::collection::vec("[a-e]{1,2}", 0..40)) {
        let (_dir, plotter) = plotter();
        let counts = plotter.category_frequency(labels.iter().cloned()).unwrap();

        prop_assert_eq!(counts.total(), labels.len());
        let distinct: BTreeSet<&String> = labels.iter().collect();
        prop_assert_eq!(counts.bars.len(), distinct.len());
    }

    #[test]
    fn bars_are_sorted_and_positive(labels in prop::collection::vec(0u8..10, 1..40)) {
        let (_dir, plotter) = plotter();
        let counts = plotter.category_frequency(labels).unwrap();

        prop_assert!(counts.bars.windows(2).all(|w| w[0].0 < w[1].0));
        prop_assert!(counts.bars.iter().all(|&(_, n)| n > 0));
    }
}
