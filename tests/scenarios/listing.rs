//! Test: Listing - every pipeline with its group

use crate::helpers::*;
use pipediff::Dispatcher;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_list_all_pipelines() {
    let dispatcher = Dispatcher::new(StaticSource::new(SERVER_XML));

    let lines = dispatcher.list().await.unwrap();

    assert_eq!(
        plain_lines(&lines),
        vec![
            "payments: payments-qa",
            "payments: payments-prod",
            "web: storefront",
        ]
    );
}

#[tokio::test]
async fn test_list_without_pipelines() {
    let dispatcher = Dispatcher::new(StaticSource::new("<cruise><server /></cruise>"));
    let lines = dispatcher.list().await.unwrap();
    assert!(lines.is_empty());
}

#[tokio::test]
async fn test_list_fetches_once() {
    let source = StaticSource::new(SERVER_XML);
    let fetches = source.fetch_counter();
    let dispatcher = Dispatcher::new(source);

    dispatcher.list().await.unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}
