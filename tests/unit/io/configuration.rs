//! Tests for configuration constants and the serde configuration model

#[cfg(test)]
mod tests {
    use std::fs;
    use stimgrid::PatternError;
    use stimgrid::algorithm::expander::{GradientDirection, Strategy};
    use stimgrid::io::configuration::{
        CHECKERBOARD_MAX_VALUES, DEFAULT_REPEAT_EACH, DEFAULT_SEED, DimensionConfig,
        FINGERPRINT_SEPARATOR, MAX_GRID_DIMENSION, OUTPUT_SUFFIX, StimulusConfig,
    };
    use stimgrid::sequence::value::FeatureValue;

    const CONFIG: &str = r#"{
        "rows": 4,
        "cols": 4,
        "dimensions": [
            { "kind": "pattern", "name": "shape", "seed": ["circle", "square"], "strategy": "checkerboard" },
            { "kind": "pattern", "name": "size", "seed": [10, 20], "strategy": "mirror_across_rows",
              "repeat_each": 2, "jitter": { "sigma": 0.5 }, "shuffle": true },
            { "kind": "gradient", "name": "color", "start": "red", "end": "blue", "direction": "right_diagonal" }
        ],
        "swaps": 2,
        "hidden": [5]
    }"#;

    // Tests constant values
    // Verified by changing constant values
    #[test]
    fn test_constants() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert_eq!(CHECKERBOARD_MAX_VALUES, 3);
        assert_eq!(FINGERPRINT_SEPARATOR, "|");
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_REPEAT_EACH, 1);
        assert_eq!(OUTPUT_SUFFIX, "_stimulus");
    }

    // Tests parsing of tagged dimensions with defaults
    // Verified by removing the repeat_each default
    #[test]
    fn test_parse_config() {
        let config: StimulusConfig = serde_json::from_str(CONFIG).unwrap();

        assert_eq!((config.rows, config.cols), (4, 4));
        assert_eq!(config.swaps, 2);
        assert_eq!(config.distinct_swaps, 0);
        assert_eq!(config.hidden, vec![5]);
        assert!(config.metric_dimensions.is_none());

        let names: Vec<&str> = config.dimensions.iter().map(DimensionConfig::name).collect();
        assert_eq!(names, vec!["shape", "size", "color"]);

        match config.dimensions.first() {
            Some(DimensionConfig::Pattern {
                seed,
                strategy,
                repeat_each,
                jitter,
                shuffle,
                ..
            }) => {
                assert_eq!(seed.first(), Some(&FeatureValue::from("circle")));
                assert_eq!(*strategy, Strategy::Checkerboard);
                assert_eq!(*repeat_each, DEFAULT_REPEAT_EACH);
                assert!(jitter.is_none());
                assert!(!shuffle);
            }
            other => unreachable!("Expected a pattern dimension, got {other:?}"),
        }

        match config.dimensions.get(1) {
            Some(DimensionConfig::Pattern {
                repeat_each,
                jitter: Some(jitter),
                ..
            }) => {
                assert_eq!(*repeat_each, 2);
                assert!((jitter.mu - 0.0).abs() < f64::EPSILON);
                assert!((jitter.sigma - 0.5).abs() < f64::EPSILON);
            }
            other => unreachable!("Expected a jittered pattern dimension, got {other:?}"),
        }

        assert!(matches!(
            config.dimensions.get(2),
            Some(DimensionConfig::Gradient {
                direction: GradientDirection::RightDiagonal,
                ..
            })
        ));
    }

    // Tests that unknown fields and strategies are rejected
    // Verified by removing deny_unknown_fields
    #[test]
    fn test_reject_unknown_input() {
        let extra = r#"{ "rows": 1, "cols": 1, "dimensions": [], "colour": 3 }"#;
        assert!(serde_json::from_str::<StimulusConfig>(extra).is_err());

        let strategy = r#"{ "rows": 1, "cols": 1, "dimensions": [
            { "kind": "pattern", "name": "s", "seed": [1], "strategy": "spiral" } ] }"#;
        assert!(serde_json::from_str::<StimulusConfig>(strategy).is_err());
    }

    // Tests loading from disk and reporting bad files
    // Verified by swallowing the read error
    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.json");
        fs::write(&path, CONFIG).unwrap();
        assert_eq!(StimulusConfig::load(&path).unwrap().dimensions.len(), 3);

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ rows: 4").unwrap();
        assert!(matches!(
            StimulusConfig::load(&broken),
            Err(PatternError::Serialization { .. })
        ));

        assert!(matches!(
            StimulusConfig::load(&dir.path().join("missing.json")),
            Err(PatternError::FileSystem {
                operation: "read",
                ..
            })
        ));
    }
}
