// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::{throttle_with_timer, ManualTimer, ThrottleOptions};
use cadence_test_utils::{advance_ms, block_ms, InvocationLog};
use serde_json::json;

#[test]
fn test_throttle_invokes_on_both_edges() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let throttled = throttle_with_timer(log.counter(), 32, ThrottleOptions::default(), timer.clone());

    // Act
    throttled.call(());
    throttled.call(());
    throttled.call(());
    let last_count = log.count();

    // Assert
    assert_eq!(last_count, 1);
    advance_ms(&timer, 64);
    assert!(log.count() > last_count);

    Ok(())
}

#[test]
fn test_throttle_subsequent_calls_return_first_result() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let throttled = throttle_with_timer(log.identity(), 32, ThrottleOptions::default(), timer.clone());

    // Act
    let first = [throttled.call("a"), throttled.call("b")];
    advance_ms(&timer, 64);
    let second = [throttled.call("c"), throttled.call("d")];

    // Assert
    assert_eq!(first, [Some("a"), Some("a")]);
    assert_eq!(second[0], Some("c"));
    assert_eq!(second[1], Some("c"));
    assert_eq!(log.args(), vec!["a", "b", "c"]);

    Ok(())
}

#[test]
fn test_throttle_single_call_has_no_trailing_invocation() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let throttled = throttle_with_timer(log.counter(), 32, ThrottleOptions::default(), timer.clone());

    // Act
    throttled.call(());

    // Assert
    assert_eq!(log.count(), 1);
    advance_ms(&timer, 64);
    assert_eq!(log.count(), 1);

    Ok(())
}

#[test]
fn test_throttle_invokes_repeatedly_in_tight_loop() -> anyhow::Result<()> {
    for options in [ThrottleOptions::default(), ThrottleOptions::new().with_leading(false)] {
        // Arrange
        let timer = ManualTimer::new();
        let log = InvocationLog::new();
        let throttled = throttle_with_timer(log.counter(), 32, options, timer.clone());

        // Act
        for _ in 0..320 {
            throttled.call(());
            block_ms(&timer, 1);
        }
        let actual = log.count();
        advance_ms(&timer, 1);

        // Assert
        assert!(actual > 1, "expected repeated invocations with {options:?}, got {actual}");
    }

    Ok(())
}

#[test]
fn test_throttle_second_call_runs_as_soon_as_possible() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = ThrottleOptions::new().with_leading(false);
    let throttled = throttle_with_timer(log.counter(), 128, options, timer.clone());
    throttled.call(());

    // Act
    advance_ms(&timer, 192);
    assert_eq!(log.count(), 1);
    throttled.call(());

    // Assert
    advance_ms(&timer, 62);
    assert_eq!(log.count(), 1);
    advance_ms(&timer, 130);
    assert_eq!(log.count(), 2);

    Ok(())
}

#[test]
fn test_throttle_applies_default_options() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = ThrottleOptions::from_value(&json!({}));
    let throttled = throttle_with_timer(log.counter(), 32, options, timer.clone());

    // Act
    throttled.call(());
    throttled.call(());

    // Assert
    assert_eq!(log.count(), 1);
    advance_ms(&timer, 128);
    assert_eq!(log.count(), 2);

    Ok(())
}

#[test]
fn test_throttle_leading_option() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let with_leading = throttle_with_timer(
        log.identity(),
        32,
        ThrottleOptions::new().with_leading(true),
        timer.clone(),
    );
    let without_leading = throttle_with_timer(
        log.identity(),
        32,
        ThrottleOptions::new().with_leading(false),
        timer.clone(),
    );

    // Act
    let leading = with_leading.call("a");
    let not_leading = without_leading.call("a");

    // Assert
    assert_eq!(leading, Some("a"));
    assert_eq!(not_leading, None);

    Ok(())
}

#[test]
fn test_throttle_trailing_option() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let with_log = InvocationLog::new();
    let without_log = InvocationLog::new();
    let with_trailing = throttle_with_timer(
        with_log.identity(),
        64,
        ThrottleOptions::new().with_trailing(true),
        timer.clone(),
    );
    let without_trailing = throttle_with_timer(
        without_log.identity(),
        64,
        ThrottleOptions::new().with_trailing(false),
        timer.clone(),
    );

    // Act
    let with_results = [with_trailing.call("a"), with_trailing.call("b")];
    let without_results = [without_trailing.call("a"), without_trailing.call("b")];
    advance_ms(&timer, 256);

    // Assert
    assert_eq!(with_results, [Some("a"), Some("a")]);
    assert_eq!(without_results, [Some("a"), Some("a")]);
    assert_eq!(with_log.count(), 2);
    assert_eq!(without_log.count(), 1);

    Ok(())
}

#[test]
fn test_throttle_without_trailing_starts_new_window_later() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = ThrottleOptions::new().with_trailing(false);
    let throttled = throttle_with_timer(log.counter(), 64, options, timer.clone());

    // Act
    throttled.call(());
    throttled.call(());
    advance_ms(&timer, 96);
    throttled.call(());
    throttled.call(());
    advance_ms(&timer, 96);

    // Assert
    assert_eq!(log.count(), 2);

    Ok(())
}

#[test]
fn test_throttle_ignores_max_wait_option() -> anyhow::Result<()> {
    // Arrange
    let options = ThrottleOptions::from_value(&json!({ "leading": false, "maxWait": 500 }));
    let timer = ManualTimer::new();
    let log = InvocationLog::<(), ()>::new();
    let throttled = throttle_with_timer(log.counter(), 32, options, timer.clone());

    // Act
    let config = throttled.config();

    // Assert
    assert!(!config.leading());
    assert!(config.trailing());
    assert_eq!(config.max_wait(), Some(config.wait()));

    Ok(())
}
