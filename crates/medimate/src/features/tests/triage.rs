use crate::features::triage::{TriageCategory, TriageEngine};
use crate::features::Severity;

#[test]
fn flu_rule_wins_over_later_rules() {
    let engine = TriageEngine::with_default_rules();

    let verdict = engine.classify("Fever, cough, and headache");

    assert_eq!(verdict.category, TriageCategory::FluLike);
    assert_eq!(verdict.severity, Severity::Warning);
    assert!(verdict.advice.contains("flu or COVID-19"));
}

#[test]
fn matching_is_case_insensitive() {
    let engine = TriageEngine::with_default_rules();

    let verdict = engine.classify("FEVER and a COUGH since yesterday");

    assert_eq!(verdict.category, TriageCategory::FluLike);
}

#[test]
fn matching_is_substring_based_not_whole_word() {
    let engine = TriageEngine::with_default_rules();

    let verdict = engine.classify("feverish, with coughing fits at night");

    assert_eq!(verdict.category, TriageCategory::FluLike);
}

#[test]
fn headache_rule_fires_without_the_flu_pair() {
    let engine = TriageEngine::with_default_rules();

    let verdict = engine.classify("I have a bad headache");

    assert_eq!(verdict.category, TriageCategory::Headache);
    assert_eq!(verdict.severity, Severity::Info);
    assert!(verdict.advice.contains("migraine"));
}

#[test]
fn stomach_rule_fires_for_digestive_complaints() {
    let engine = TriageEngine::with_default_rules();

    let verdict = engine.classify("my stomach hurts after dinner");

    assert_eq!(verdict.category, TriageCategory::GiIssue);
    assert_eq!(verdict.severity, Severity::Info);
}

#[test]
fn fever_alone_does_not_satisfy_the_flu_rule() {
    let engine = TriageEngine::with_default_rules();

    let verdict = engine.classify("a slight fever since this morning");

    assert_eq!(verdict.category, TriageCategory::MildUnspecified);
}

#[test]
fn empty_input_falls_back_to_mild_verdict() {
    let engine = TriageEngine::with_default_rules();

    let verdict = engine.classify("");

    assert_eq!(verdict.category, TriageCategory::MildUnspecified);
    assert_eq!(verdict.severity, Severity::Success);
    assert!(verdict.advice.contains("Rest and monitor"));
}

#[test]
fn classification_is_pure_across_repeated_calls() {
    let engine = TriageEngine::with_default_rules();

    let first = engine.classify("cough and fever");
    let second = engine.classify("cough and fever");

    assert_eq!(first, second);
}
