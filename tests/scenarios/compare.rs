//! Test: Compare - full variable comparison of two pipelines

use crate::helpers::*;
use pipediff::cli::dispatcher::Dispatcher;
use pipediff::cli::output::Tone;
use pipediff::{compare_named, Configuration, MISSING};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_compare_pipeline_and_shared_stage() {
    let dispatcher = Dispatcher::new(StaticSource::new(SERVER_XML));

    let lines = dispatcher
        .compare("payments-qa", "payments-prod")
        .await
        .unwrap();

    // Only the "test" stage exists in both pipelines
    assert_eq!(scope_titles(&lines), vec!["Pipeline", "test"]);

    let text = non_blank_lines(&lines);
    assert_eq!(
        text[1..5].to_vec(),
        vec![
            "[MATCH] REGION: eu-west-1",
            "[DIFF]  DB_HOST: qa-db -> prod-db",
            "[DIFF]  FEATURE_FLAGS: beta -> MISSING",
            "[DIFF]  PAGER: MISSING -> on",
        ]
    );
    assert_eq!(text[6], "[MATCH] PARALLEL: 4");
    assert_eq!(text.len(), 7);
}

#[tokio::test]
async fn test_compare_is_directional() {
    let dispatcher = Dispatcher::new(StaticSource::new(SERVER_XML));

    let lines = dispatcher
        .compare("payments-prod", "payments-qa")
        .await
        .unwrap();
    let text = non_blank_lines(&lines);

    assert_eq!(
        text[1..5].to_vec(),
        vec![
            "[MATCH] REGION: eu-west-1",
            "[DIFF]  DB_HOST: prod-db -> qa-db",
            "[DIFF]  PAGER: on -> MISSING",
            "[DIFF]  FEATURE_FLAGS: MISSING -> beta",
        ]
    );
}

#[tokio::test]
async fn test_compare_pipeline_with_itself() {
    let dispatcher = Dispatcher::new(StaticSource::new(SERVER_XML));

    let lines = dispatcher
        .compare("payments-qa", "payments-qa")
        .await
        .unwrap();

    assert_eq!(scope_titles(&lines), vec!["Pipeline", "build", "test"]);
    assert!(lines.iter().all(|line| !line.has_tone(Tone::Diff)));
    assert_eq!(
        lines.iter().filter(|line| line.has_tone(Tone::Match)).count(),
        5
    );
}

#[tokio::test]
async fn test_compare_pipeline_without_variables() {
    let dispatcher = Dispatcher::new(StaticSource::new(SERVER_XML));

    let lines = dispatcher.compare("storefront", "payments-prod").await.unwrap();
    let text = non_blank_lines(&lines);

    assert_eq!(scope_titles(&lines), vec!["Pipeline"]);
    assert_has_line(&text, "[DIFF]  REGION: MISSING -> eu-west-1");
    assert_has_line(&text, "[DIFF]  DB_HOST: MISSING -> prod-db");
    assert_has_line(&text, "[DIFF]  PAGER: MISSING -> on");
}

#[tokio::test]
async fn test_compare_fetches_once() {
    let source = StaticSource::new(SERVER_XML);
    let fetches = source.fetch_counter();
    let dispatcher = Dispatcher::new(source);

    dispatcher
        .compare("payments-qa", "payments-prod")
        .await
        .unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_comparison_model_for_fixture() {
    let config = Configuration::from_xml(SERVER_XML).unwrap();
    let result = compare_named(&config, "payments-qa", "payments-prod").unwrap();

    let fields: Vec<(&str, &str, &str)> = result
        .variables
        .iter()
        .map(|c| (c.name.as_str(), c.left_value(), c.right_value()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("REGION", "eu-west-1", "eu-west-1"),
            ("DB_HOST", "qa-db", "prod-db"),
            ("FEATURE_FLAGS", "beta", MISSING),
            ("PAGER", MISSING, "on"),
        ]
    );
    assert_eq!(result.stages.len(), 1);
    assert_eq!(result.difference_count(), 3);
}
