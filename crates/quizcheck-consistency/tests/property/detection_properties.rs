use proptest::prelude::*;
use quizcheck_consistency::{severity, ConsistencyDetector};
use quizcheck_core::config::DetectorConfig;
use quizcheck_core::models::QuestionRecord;

fn detector(config: DetectorConfig) -> ConsistencyDetector {
    ConsistencyDetector::new(config).unwrap()
}

proptest! {
    #[test]
    fn digit_free_text_extracts_nothing(text in "[a-zA-Z ,.;:=≈()_]{0,200}", declared in -1e6f64..1e6) {
        let report = detector(DetectorConfig::default())
            .detect(&[QuestionRecord::new(0, declared.to_string(), text)]);
        prop_assert_eq!(report.stats.values_extracted, 0);
        prop_assert_eq!(report.stats.contradictions_found, 0);
    }

    #[test]
    fn within_tolerance_is_never_reported(declared in 1.0f64..1000.0, factor in -0.049f64..0.049) {
        let candidate = declared * (1.0 + factor);
        let text = format!("x = {candidate} V");
        let report = detector(DetectorConfig::default())
            .detect(&[QuestionRecord::new(0, declared.to_string(), text)]);
        prop_assert_eq!(report.stats.contradictions_found, 0);
    }

    #[test]
    fn epsilon_neighbours_are_never_reported(
        declared in -500.0f64..500.0,
        delta in -0.0009f64..0.0009,
        tolerance in 0.0f64..1.0,
        intermediates in proptest::collection::vec(-500.0f64..500.0, 0..4),
    ) {
        let config = DetectorConfig {
            tolerance_threshold: tolerance,
            intermediate_values: intermediates,
            ..Default::default()
        };
        let text = format!("Final answer: v = {} V", declared + delta);
        let report = detector(config)
            .detect(&[QuestionRecord::new(0, declared.to_string(), text)]);
        prop_assert_eq!(report.stats.contradictions_found, 0);
    }

    #[test]
    fn detection_is_deterministic(text in ".{0,300}", declared in -1e3f64..1e3) {
        let detector = detector(DetectorConfig::default());
        let records = [
            QuestionRecord::new(0, declared.to_string(), text.clone()),
            QuestionRecord::new(1, "2.5", text),
        ];
        let first = detector.detect(&records);
        prop_assert_eq!(&first, &detector.detect(&records));
        prop_assert_eq!(&first, &detector.detect_parallel(&records));
        prop_assert_eq!(first.stats.contradictions_found, first.contradictions.len());
    }

    #[test]
    fn reported_differences_exceed_tolerance(
        text in "([a-z]{1,3} = -?[0-9]{1,3}(\\.[0-9]{1,3})? [VA%], ){1,6}",
        declared in 1.0f64..100.0,
        tolerance in 0.0f64..0.5,
    ) {
        let config = DetectorConfig { tolerance_threshold: tolerance, ..Default::default() };
        let report = detector(config)
            .detect(&[QuestionRecord::new(0, declared.to_string(), text)]);
        for c in &report.contradictions {
            prop_assert!(c.percentage_difference >= 0.0);
            prop_assert!(c.percentage_difference > tolerance * 100.0);
            prop_assert!((c.conflicting_value - declared).abs() >= 1e-3);
            prop_assert_eq!(c.severity, severity::classify(c.percentage_difference));
        }
    }

    #[test]
    fn severity_is_monotone(a in 0.0f64..500.0, b in 0.0f64..500.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(severity::classify(lo) <= severity::classify(hi));
    }
}
