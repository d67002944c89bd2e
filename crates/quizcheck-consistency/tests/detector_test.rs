//! Detector behaviour: run isolation, parallel parity, reporting modes,
//! custom rules, and extraction caps.

use quizcheck_consistency::extraction::rules::tags;
use quizcheck_consistency::{detect, ConsistencyDetector, RecordOutcome};
use quizcheck_core::config::{DetectorConfig, ReportingMode, RuleConfig};
use quizcheck_core::errors::{ConfigError, RecordError};
use quizcheck_core::models::{ProcessingStats, QuestionRecord};

fn sample_bank() -> Vec<QuestionRecord> {
    (0..40)
        .map(|i| {
            let declared = 10.0 + i as f64;
            let text = match i % 4 {
                0 => format!("x = {} V. Final answer: x = {declared} V.", declared * 1.3),
                1 => format!("The answer is {declared}"),
                2 => format!("y ≈ {} A", declared * 0.5),
                _ => "no cues here".to_string(),
            };
            QuestionRecord::new(i, declared.to_string(), text)
        })
        .collect()
}

#[test]
fn repeated_runs_are_identical() {
    let detector = ConsistencyDetector::new(DetectorConfig::default()).unwrap();
    let bank = sample_bank();
    let first = detector.detect(&bank);
    let second = detector.detect(&bank);
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}

#[test]
fn runs_do_not_accumulate_across_inputs() {
    let detector = ConsistencyDetector::new(DetectorConfig::default()).unwrap();
    let big = detector.detect(&sample_bank());
    assert!(big.stats.contradictions_found > 0);

    let small = detector.detect(&[QuestionRecord::new(0, "1", "x = 1 V")]);
    assert_eq!(
        small.stats,
        ProcessingStats {
            questions_analyzed: 1,
            values_extracted: 1,
            ..Default::default()
        }
    );
    assert!(small.is_empty());
}

#[test]
fn parallel_matches_sequential() {
    let detector = ConsistencyDetector::new(DetectorConfig::default()).unwrap();
    let bank = sample_bank();
    assert_eq!(detector.detect(&bank), detector.detect_parallel(&bank));
}

#[test]
fn aggregated_mode_keeps_every_conflict() {
    let text = "a = 2 V, b = 3 V, c = 1 V";
    let records = [QuestionRecord::new(0, "1", text)];

    let all = ConsistencyDetector::new(DetectorConfig::default())
        .unwrap()
        .detect(&records);
    let values: Vec<f64> = all.contradictions.iter().map(|c| c.conflicting_value).collect();
    assert_eq!(values, vec![2.0, 3.0]);

    let first = ConsistencyDetector::new(DetectorConfig {
        reporting_mode: ReportingMode::FirstOnly,
        ..Default::default()
    })
    .unwrap()
    .detect(&records);
    assert_eq!(first.stats.contradictions_found, 1);
    assert_eq!(first.contradictions[0].conflicting_value, 2.0);
}

#[test]
fn intermediate_set_suppresses_configured_values() {
    let records = [QuestionRecord::new(0, "49.05", "g = 9.81 m/s^2 gives F = 49.05 N")];

    let plain = detect(&records, DetectorConfig::default()).unwrap();
    assert_eq!(plain.stats.contradictions_found, 1);

    let with_g = detect(
        &records,
        DetectorConfig {
            intermediate_values: vec![9.81],
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(with_g.stats.contradictions_found, 0);
}

#[test]
fn custom_rule_runs_after_builtins() {
    let config = DetectorConfig {
        rules: vec![RuleConfig {
            tag: "percent_word".to_string(),
            pattern: r"(?P<value>[0-9]+(?:\.[0-9]+)?)\s*percent".to_string(),
            context_window: Some(8),
            enabled: None,
        }],
        ..Default::default()
    };
    let detector = ConsistencyDetector::new(config).unwrap();
    let tags: Vec<&str> = detector.extractor().rules().iter().map(|r| r.tag()).collect();
    assert_eq!(
        tags,
        vec![
            tags::ASSIGNMENT,
            tags::APPROXIMATION,
            tags::FINAL_ANSWER,
            tags::UNIT_SUFFIX,
            "percent_word"
        ]
    );

    let report = detector.detect(&[QuestionRecord::new(0, "40", "The yield rose 55 percent.")]);
    assert_eq!(report.stats.contradictions_found, 1);
    assert_eq!(report.contradictions[0].pattern_tag, "percent_word");
}

#[test]
fn builtins_can_be_disabled() {
    let config = DetectorConfig {
        use_builtin_rules: false,
        rules: vec![RuleConfig {
            tag: "only".to_string(),
            pattern: r"result:\s*(?P<value>[0-9]+)".to_string(),
            context_window: None,
            enabled: Some(true),
        }],
        ..Default::default()
    };
    let detector = ConsistencyDetector::new(config).unwrap();
    assert!(!detector.config().use_builtin_rules);
    assert_eq!(detector.extractor().rules().len(), 1);
    assert_eq!(detector.extractor().rules()[0].pattern(), r"result:\s*(?P<value>[0-9]+)");
    assert_eq!(detector.extractor().rules()[0].context_window(), 30);

    let report = detector.detect(&[QuestionRecord::new(0, "5", "x = 9 V, result: 5")]);
    assert_eq!(report.stats.values_extracted, 1);
    assert!(report.is_empty());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let bad_pattern = DetectorConfig {
        rules: vec![RuleConfig {
            tag: "no_group".to_string(),
            pattern: r"[0-9]+".to_string(),
            context_window: None,
            enabled: None,
        }],
        ..Default::default()
    };
    assert!(matches!(
        ConsistencyDetector::new(bad_pattern),
        Err(ConfigError::MissingValueGroup { .. })
    ));

    let bad_tolerance = DetectorConfig {
        tolerance_threshold: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        detect(&[], bad_tolerance),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn disabled_custom_rules_are_not_compiled() {
    let config = DetectorConfig {
        rules: vec![RuleConfig {
            tag: "broken".to_string(),
            pattern: "(".to_string(),
            context_window: None,
            enabled: Some(false),
        }],
        ..Default::default()
    };
    assert_eq!(ConsistencyDetector::new(config).unwrap().extractor().rules().len(), 4);
}

#[test]
fn text_cap_truncates_but_still_analyzes() {
    let detector = ConsistencyDetector::new(DetectorConfig {
        max_scan_chars: 12,
        ..Default::default()
    })
    .unwrap();
    let text = "x = 1 V and then y = 900 V";

    let report = detector.detect(&[QuestionRecord::new(0, "1", text)]);
    assert_eq!(report.stats.questions_analyzed, 1);
    assert_eq!(report.stats.extraction_overflows, 1);
    assert_eq!(report.stats.values_extracted, 1);
    assert!(report.is_empty(), "value past the cap is never seen");
}

#[test]
fn match_cap_limits_each_rule() {
    let detector = ConsistencyDetector::new(DetectorConfig {
        max_matches_per_rule: 2,
        ..Default::default()
    })
    .unwrap();
    let text = "a = 1, b = 2, c = 3, d = 4";

    match detector.analyze(&QuestionRecord::new(0, "1", text)) {
        RecordOutcome::Analyzed {
            values_extracted,
            overflowed,
            contradictions,
        } => {
            assert_eq!(values_extracted, 2);
            assert!(overflowed);
            assert_eq!(contradictions.len(), 1);
        }
        other => panic!("expected analyzed, got {other:?}"),
    }
}

#[test]
fn analyze_reports_skip_reason() {
    let detector = ConsistencyDetector::new(DetectorConfig::default()).unwrap();
    let outcome = detector.analyze(&QuestionRecord::new(9, "twelve", "x = 12"));
    assert_eq!(
        outcome,
        RecordOutcome::Skipped(RecordError::UnparseableDeclaredAnswer {
            index: 9,
            raw: "twelve".to_string()
        })
    );
}

#[test]
fn stats_merge_sums_counters() {
    let detector = ConsistencyDetector::new(DetectorConfig::default()).unwrap();
    let bank = sample_bank();
    let (left, right) = bank.split_at(17);

    let mut merged = detector.detect(left).stats;
    merged.merge(&detector.detect(right).stats);
    assert_eq!(merged, detector.detect(&bank).stats);
}
