//! Scenario tests for the image loader, driven through the public API the
//! way a rendering layer would: construct, feed settlements, read the view.

use lumen_components::{ImageLoader, LoadState, Settlement};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lumen_components=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_fallback_recovers_primary_failure() {
    init_tracing();
    let mut loader = ImageLoader::with_fallback("a.png", "b.png").unwrap();

    let view = loader.current_view();
    assert_eq!(view.state, LoadState::Loading);
    assert_eq!(view.source, "a.png");

    let view = loader.on_source_settled("a.png", Settlement::Failure);
    assert_eq!(view.state, LoadState::Loading);
    assert_eq!(view.source, "b.png");

    let view = loader.on_source_settled("b.png", Settlement::Success);
    assert_eq!(view.state, LoadState::Loaded);
    assert_eq!(view.source, "b.png");
}

#[test]
fn test_fallback_failure_is_terminal() {
    init_tracing();
    let mut loader = ImageLoader::with_fallback("a.png", "b.png").unwrap();
    loader.on_source_settled("a.png", Settlement::Failure);

    let view = loader.on_source_settled("b.png", Settlement::Failure);
    assert_eq!(view.state, LoadState::Failed);
    assert_eq!(view.source, "b.png");

    // No third attempt, in either direction.
    let view = loader.on_source_settled("b.png", Settlement::Success);
    assert_eq!(view.state, LoadState::Failed);
    let view = loader.on_source_settled("a.png", Settlement::Success);
    assert_eq!(view.state, LoadState::Failed);
    assert_eq!(view.source, "b.png");
}

#[test]
fn test_no_fallback_fails_immediately() {
    init_tracing();
    let mut loader = ImageLoader::new("a.png").unwrap();

    let view = loader.on_source_settled("a.png", Settlement::Failure);
    assert_eq!(view.state, LoadState::Failed);
    assert_eq!(view.source, "a.png");
}

#[test]
fn test_fallback_equal_to_primary_is_not_retried() {
    init_tracing();
    let mut loader = ImageLoader::with_fallback("a.png", "a.png").unwrap();

    let view = loader.on_source_settled("a.png", Settlement::Failure);
    assert_eq!(view.state, LoadState::Failed);
    assert_eq!(view.source, "a.png");
    assert!(!loader.is_using_fallback());
}

#[test]
fn test_stale_primary_success_ignored() {
    init_tracing();
    let mut loader = ImageLoader::with_fallback("a.png", "b.png").unwrap();
    loader.on_source_settled("a.png", Settlement::Failure);

    let before = loader.clone();
    let view = loader.on_source_settled("a.png", Settlement::Success);
    assert_eq!(view.state, LoadState::Loading);
    assert_eq!(view.source, "b.png");
    assert_eq!(loader, before);
}

#[test]
fn test_stale_primary_failure_after_fallback_loaded() {
    init_tracing();
    let mut loader = ImageLoader::with_fallback("a.png", "b.png").unwrap();
    loader.on_source_settled("a.png", Settlement::Failure);
    loader.on_source_settled("b.png", Settlement::Success);

    let view = loader.on_source_settled("a.png", Settlement::Failure);
    assert_eq!(view.state, LoadState::Loaded);
    assert_eq!(view.source, "b.png");
}

#[test]
fn test_unknown_source_is_noop() {
    init_tracing();
    let mut loader = ImageLoader::new("a.png").unwrap();

    let view = loader.on_source_settled("c.png", Settlement::Success);
    assert_eq!(view.state, LoadState::Loading);
    assert_eq!(view.source, "a.png");
}

#[test]
fn test_primary_success_skips_fallback() {
    init_tracing();
    let mut loader = ImageLoader::with_fallback("a.png", "b.png").unwrap();

    let view = loader.on_source_settled("a.png", Settlement::Success);
    assert_eq!(view.state, LoadState::Loaded);
    assert_eq!(view.source, "a.png");

    // The fallback was never requested; a settlement for it is stale.
    let view = loader.on_source_settled("b.png", Settlement::Failure);
    assert_eq!(view.state, LoadState::Loaded);
    assert_eq!(view.source, "a.png");
}

#[test]
fn test_empty_primary_rejected() {
    assert!(ImageLoader::new("").is_err());
    assert!(ImageLoader::with_fallback("", "b.png").is_err());
}

#[test]
fn test_current_view_is_pure() {
    let loader = ImageLoader::with_fallback("a.png", "b.png").unwrap();
    let first = loader.current_view();
    let second = loader.current_view();
    assert_eq!(first, second);
}
