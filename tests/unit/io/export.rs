//! Tests for stimulus generation and JSON persistence

#[cfg(test)]
mod tests {
    use std::path::Path;
    use stimgrid::PatternError;
    use stimgrid::algorithm::expander::{GradientDirection, Strategy};
    use stimgrid::io::configuration::{DimensionConfig, StimulusConfig};
    use stimgrid::io::export::{StimulusDocument, read_json, write_json};
    use stimgrid::sequence::value::FeatureValue;

    fn pattern(name: &str, seed: Vec<FeatureValue>, strategy: Strategy) -> DimensionConfig {
        DimensionConfig::Pattern {
            name: name.to_string(),
            seed,
            strategy,
            repeat_each: 1,
            jitter: None,
            shuffle: false,
        }
    }

    fn config() -> StimulusConfig {
        StimulusConfig {
            rows: 4,
            cols: 4,
            dimensions: vec![
                pattern(
                    "shape",
                    vec![FeatureValue::from("circle"), FeatureValue::from("square")],
                    Strategy::Checkerboard,
                ),
                DimensionConfig::Gradient {
                    name: "size".to_string(),
                    start: FeatureValue::from(10),
                    end: FeatureValue::from(40),
                    direction: GradientDirection::Rows,
                },
            ],
            swaps: 2,
            distinct_swaps: 1,
            hidden: vec![0],
            metric_dimensions: None,
        }
    }

    // Tests the generated document layout and metrics
    // Verified by storing the swapped grids instead of the originals
    #[test]
    fn test_generate() {
        let document = StimulusDocument::generate(&config(), 42).unwrap();

        assert_eq!((document.display.rows, document.display.cols), (4, 4));
        assert_eq!(document.display.seed, 42);
        assert_eq!(document.display.metrics.element_count, 15);
        assert_eq!(document.display.metrics.loc, 6);
        assert_eq!(document.display.metrics.loci, 2);
        assert_eq!(document.display.metrics.loce, 8);

        let shape = document.dimension("shape").unwrap();
        assert_eq!(shape.get(0, 0), Some(&FeatureValue::from("circle")));
        assert_eq!(shape.get(1, 0), Some(&FeatureValue::from("square")));

        let elements = &document.elements;
        assert_eq!(elements.hidden.iter().filter(|&&hidden| hidden).count(), 1);
        assert_eq!(elements.hidden.first(), Some(&true));

        let mut order = elements.order.clone();
        order.sort_unstable();
        assert_eq!(order, (0..16).collect::<Vec<_>>());
        let moved = elements
            .order
            .iter()
            .enumerate()
            .filter(|(position, index)| position != *index)
            .count();
        assert_eq!(moved, 6);
        assert_eq!(elements.order.first(), Some(&0));
    }

    // Tests that generation is a pure function of config and seed
    // Verified by seeding from entropy
    #[test]
    fn test_generate_is_reproducible() {
        let first = StimulusDocument::generate(&config(), 7).unwrap();
        let second = StimulusDocument::generate(&config(), 7).unwrap();
        assert_eq!(first, second);
    }

    // Tests presented values follow the stored order
    // Verified by ignoring the order in presented
    #[test]
    fn test_presented() {
        let document = StimulusDocument::generate(&config(), 3).unwrap();
        let stored = document.dimension("size").unwrap();
        let presented = document.presented("size").unwrap();

        for (position, &index) in document.elements.order.iter().enumerate() {
            assert_eq!(presented.get_index(position), stored.get_index(index));
        }
        assert!(document.dimension("texture").is_err());
    }

    // Tests rejection of missing, duplicate and reserved names
    // Verified by removing the name checks
    #[test]
    fn test_generate_rejects_bad_dimensions() {
        let mut empty = config();
        empty.dimensions.clear();
        assert!(StimulusDocument::generate(&empty, 0).is_err());

        let mut duplicate = config();
        duplicate
            .dimensions
            .push(pattern("shape", vec![FeatureValue::from(1)], Strategy::RepeatElements));
        assert!(matches!(
            StimulusDocument::generate(&duplicate, 0),
            Err(PatternError::InvalidParameter { parameter: "name", .. })
        ));

        let mut reserved = config();
        reserved
            .dimensions
            .push(pattern("order", vec![FeatureValue::from(1)], Strategy::RepeatElements));
        assert!(StimulusDocument::generate(&reserved, 0).is_err());
    }

    // Tests strategy and swap failures surface from generation
    // Verified by skipping swaps when they fail
    #[test]
    fn test_generate_propagates_failures() {
        let mut odd = config();
        odd.rows = 3;
        assert!(matches!(
            StimulusDocument::generate(&odd, 0),
            Err(PatternError::IncompatibleDimensions { .. })
        ));

        let mut crowded = config();
        crowded.swaps = 9;
        assert!(StimulusDocument::generate(&crowded, 0).is_err());
    }

    // Tests writing and reading a document through a temp directory
    // Verified by writing compact JSON with missing fields
    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stimulus.json");
        let document = StimulusDocument::generate(&config(), 11).unwrap();

        document.write_json(&path).unwrap();
        let restored = StimulusDocument::read_json(&path).unwrap();
        assert_eq!(restored, document);

        let raw: serde_json::Value = read_json(&path).unwrap();
        assert!(raw.get("display").is_some());
        assert!(raw.pointer("/elements/shape").is_some());
        assert!(raw.pointer("/elements/order").is_some());
    }

    // Tests persistence errors carry the path
    // Verified by reporting an unknown path
    #[test]
    fn test_json_errors() {
        let missing = Path::new("/nonexistent/dir/stimulus.json");
        assert!(matches!(
            write_json(&1, missing),
            Err(PatternError::FileSystem {
                operation: "write",
                ..
            })
        ));
        assert!(StimulusDocument::read_json(missing).is_err());
    }
}
