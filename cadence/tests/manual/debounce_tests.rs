// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::{debounce_with_context, debounce_with_timer, DebounceOptions, ManualTimer, Timer};
use cadence_test_utils::{advance_ms, block_ms, InvocationLog, Receiver};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_debounce_invokes_once_with_last_arguments() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let debounced = debounce_with_timer(log.identity(), 32, DebounceOptions::default(), timer.clone());

    // Act
    let results = [debounced.call("a"), debounced.call("b"), debounced.call("c")];

    // Assert
    assert_eq!(results, [None, None, None]);
    assert_eq!(log.count(), 0);

    advance_ms(&timer, 128);
    assert_eq!(log.args(), vec!["c"]);

    let results = [debounced.call("d"), debounced.call("e"), debounced.call("f")];
    assert_eq!(results, [Some("c"), Some("c"), Some("c")]);
    assert_eq!(log.count(), 1);

    advance_ms(&timer, 128);
    assert_eq!(log.args(), vec!["c", "f"]);

    Ok(())
}

#[test]
fn test_debounce_nothing_runs_before_quiet_period() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let debounced = debounce_with_timer(log.identity(), 32, DebounceOptions::default(), timer.clone());

    // Act
    debounced.call("a");
    advance_ms(&timer, 20);
    debounced.call("b");
    advance_ms(&timer, 20);

    // Assert
    assert_eq!(log.count(), 0);
    advance_ms(&timer, 12);
    assert_eq!(log.args(), vec!["b"]);

    Ok(())
}

#[test]
fn test_debounce_subsequent_calls_return_last_result() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let debounced = debounce_with_timer(log.identity(), 32, DebounceOptions::default(), timer.clone());
    debounced.call("a");

    // Act
    advance_ms(&timer, 64);
    let second = debounced.call("b");
    advance_ms(&timer, 64);
    let third = debounced.call("c");
    let fourth = debounced.call("c");

    // Assert
    assert_eq!(second, Some("a"));
    assert_eq!(third, Some("b"));
    assert_eq!(fourth, Some("b"));

    Ok(())
}

#[test]
fn test_debounce_zero_wait_defers_to_next_turn() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let debounced = debounce_with_timer(log.counter(), 0, DebounceOptions::default(), timer.clone());

    // Act
    debounced.call(());
    debounced.call(());

    // Assert
    assert_eq!(log.count(), 0);
    advance_ms(&timer, 5);
    assert_eq!(log.count(), 1);

    Ok(())
}

#[test]
fn test_debounce_leading_invokes_at_burst_start() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let leading_log = InvocationLog::new();
    let both_log = InvocationLog::new();
    let options = DebounceOptions::new().with_leading(true);
    let with_leading = debounce_with_timer(leading_log.counter(), 32, options, timer.clone());
    let with_leading_and_trailing = debounce_with_timer(both_log.counter(), 32, options, timer.clone());

    // Act
    with_leading.call(());
    with_leading_and_trailing.call(());
    with_leading_and_trailing.call(());

    // Assert
    assert_eq!(leading_log.count(), 1);
    assert_eq!(both_log.count(), 1);

    advance_ms(&timer, 64);
    assert_eq!(leading_log.count(), 1);
    assert_eq!(both_log.count(), 2);

    with_leading.call(());
    assert_eq!(leading_log.count(), 2);

    Ok(())
}

#[test]
fn test_debounce_leading_only_returns_burst_result() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = DebounceOptions::new().with_leading(true).with_trailing(false);
    let debounced = debounce_with_timer(log.identity(), 32, options, timer.clone());

    // Act
    let first = [debounced.call("a"), debounced.call("b")];
    advance_ms(&timer, 64);
    let second = [debounced.call("c"), debounced.call("d")];

    // Assert
    assert_eq!(first, [Some("a"), Some("a")]);
    assert_eq!(second, [Some("c"), Some("c")]);
    advance_ms(&timer, 64);
    assert_eq!(log.args(), vec!["a", "c"]);

    Ok(())
}

#[test]
fn test_debounce_trailing_option() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let with_log = InvocationLog::new();
    let without_log = InvocationLog::new();
    let with_trailing = debounce_with_timer(
        with_log.counter(),
        32,
        DebounceOptions::new().with_trailing(true),
        timer.clone(),
    );
    let without_trailing = debounce_with_timer(
        without_log.counter(),
        32,
        DebounceOptions::new().with_trailing(false),
        timer.clone(),
    );

    // Act
    with_trailing.call(());
    without_trailing.call(());

    // Assert
    assert_eq!(with_log.count(), 0);
    assert_eq!(without_log.count(), 0);
    advance_ms(&timer, 64);
    assert_eq!(with_log.count(), 1);
    assert_eq!(without_log.count(), 0);

    Ok(())
}

#[test]
fn test_debounce_max_wait_option() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = DebounceOptions::new().with_max_wait(64);
    let debounced = debounce_with_timer(log.counter(), 32, options, timer.clone());

    // Act
    debounced.call(());
    debounced.call(());

    // Assert
    assert_eq!(log.count(), 0);
    advance_ms(&timer, 128);
    assert_eq!(log.count(), 1);

    debounced.call(());
    debounced.call(());
    assert_eq!(log.count(), 1);
    advance_ms(&timer, 128);
    assert_eq!(log.count(), 2);

    Ok(())
}

#[test]
fn test_debounce_max_wait_bounds_time_between_invocations() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = DebounceOptions::new().with_max_wait(100);
    let debounced = debounce_with_timer(log.identity(), 50, options, timer.clone());

    // Act
    for tick in 0..10_u64 {
        debounced.call(tick);
        advance_ms(&timer, 30);
    }

    // Assert
    assert_eq!(log.args(), vec![3, 6, 9]);

    Ok(())
}

#[test]
fn test_debounce_max_wait_in_tight_loop() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let with_log = InvocationLog::new();
    let without_log = InvocationLog::new();
    let with_max_wait = debounce_with_timer(
        with_log.counter(),
        64,
        DebounceOptions::new().with_max_wait(128),
        timer.clone(),
    );
    let without_max_wait = debounce_with_timer(without_log.counter(), 96, DebounceOptions::default(), timer.clone());

    // Act
    for _ in 0..320 {
        with_max_wait.call(());
        without_max_wait.call(());
        block_ms(&timer, 1);
    }
    let actual = (without_log.count() > 0, with_log.count() > 0);
    advance_ms(&timer, 1);

    // Assert
    assert_eq!(actual, (false, true));

    Ok(())
}

#[test]
fn test_debounce_queues_trailing_call_after_max_wait() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = DebounceOptions::new().with_max_wait(200);
    let debounced = debounce_with_timer(log.counter(), 200, options, timer.clone());

    // Act
    debounced.call(());
    advance_ms(&timer, 190);
    debounced.call(());
    advance_ms(&timer, 10);
    debounced.call(());
    advance_ms(&timer, 10);
    debounced.call(());
    advance_ms(&timer, 290);

    // Assert
    assert_eq!(log.count(), 2);

    Ok(())
}

#[test]
fn test_debounce_trailing_invocation_disarms_ceiling() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = DebounceOptions::new().with_max_wait(64);
    let debounced = debounce_with_timer(log.counter(), 32, options, timer.clone());
    debounced.call(());

    // Act
    advance_ms(&timer, 128);
    debounced.call(());

    // Assert
    assert_eq!(log.count(), 1);
    advance_ms(&timer, 64);
    assert_eq!(log.count(), 2);
    assert_eq!(timer.pending_tasks(), 0);

    Ok(())
}

#[test]
fn test_debounce_trailing_call_keeps_arguments_and_context() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::<Receiver, &str>::new();
    let recorder = log.clone();
    let options = DebounceOptions::new().with_leading(true).with_max_wait(64);
    let debounced = debounce_with_context(
        move |context: Option<Receiver>, value: &'static str| {
            recorder.record(context, value);
            recorder.count() != 2
        },
        32,
        options,
        timer.clone(),
    );
    let receiver = Receiver::new("object");

    // Act
    let mut iterations = 0;
    while debounced.call_with(receiver.clone(), "a") != Some(false) && iterations < 1_000 {
        block_ms(&timer, 1);
        iterations += 1;
    }
    advance_ms(&timer, 64);

    // Assert
    assert_eq!(log.count(), 2);
    let last = log.last().ok_or_else(|| anyhow::anyhow!("no invocation recorded"))?;
    assert_eq!(last.context, Some(receiver));
    assert_eq!(last.args, "a");

    Ok(())
}

#[test]
fn test_debounce_backward_clock_defers_without_ceiling() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let debounced = debounce_with_timer(log.identity(), 32, DebounceOptions::default(), timer.clone());
    block_ms(&timer, 100);
    debounced.call("a");

    // Act
    timer.rewind(cadence_test_utils::ms(50));
    let result = debounced.call("b");

    // Assert
    assert_eq!(result, None);
    assert_eq!(log.count(), 0);
    advance_ms(&timer, 100);
    assert_eq!(log.args(), vec!["b"]);

    Ok(())
}

#[test]
fn test_debounce_backward_clock_forces_ceiling_invocation() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = DebounceOptions::new().with_max_wait(64);
    let debounced = debounce_with_timer(log.identity(), 32, options, timer.clone());
    block_ms(&timer, 100);
    debounced.call("a");

    // Act
    timer.rewind(cadence_test_utils::ms(50));
    let result = debounced.call("b");

    // Assert
    assert_eq!(result, Some("b"));
    assert_eq!(log.args(), vec!["b"]);

    Ok(())
}

#[test]
fn test_debounce_backward_clock_keeps_ceiling_window() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let log = InvocationLog::new();
    let options = DebounceOptions::new().with_max_wait(64);
    let debounced = debounce_with_timer(log.identity(), 32, options, timer.clone());
    block_ms(&timer, 100);
    debounced.call("a");
    timer.rewind(cadence_test_utils::ms(50));
    debounced.call("b");

    // Act
    for _ in 0..100 {
        block_ms(&timer, 1);
        debounced.call("c");
    }
    let before_ceiling = log.args();
    for _ in 0..20 {
        block_ms(&timer, 1);
        debounced.call("c");
    }

    // Assert
    assert_eq!(before_ceiling, vec!["b"]);
    assert_eq!(log.args(), vec!["b", "c"]);

    Ok(())
}

#[test]
fn test_debounce_cancel_opens_new_ceiling_window() -> anyhow::Result<()> {
    // Arrange
    let timer = ManualTimer::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let (recorder, clock) = (fired.clone(), timer.clone());
    let options = DebounceOptions::new().with_max_wait(64);
    let debounced = debounce_with_timer(
        move |value: u64| {
            let at = clock.now().since_origin().as_millis();
            recorder.borrow_mut().push((at, value));
            value
        },
        32,
        options,
        timer.clone(),
    );

    // Act
    for tick in 0..18_u64 {
        debounced.call(tick * 10);
        if tick == 5 {
            debounced.cancel();
        }
        advance_ms(&timer, 10);
    }

    // Assert
    let fired = fired.borrow();
    let (first_at, first_value) = *fired.first().ok_or_else(|| anyhow::anyhow!("no invocation recorded"))?;
    assert!(first_at > 64, "invoked at the cancelled ceiling: {fired:?}");
    assert!(first_at <= 124, "missed the new ceiling: {fired:?}");
    assert!(first_value >= 60);

    Ok(())
}
