// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The debounce state machine shared by debounced and throttled wrappers.
//!
//! All state lives in one [`RefCell`] owned by the engine. Borrows are kept short
//! and are always released before the underlying function runs, so the function
//! may call back into its own wrapper (call, cancel, flush) at any depth.

mod policy;
mod records;
mod timers;

use crate::logging::{debug, trace};
use cadence_core::DebounceConfig;
use cadence_runtime::timer::Timer;
use core::cell::RefCell;
use core::time::Duration;
use policy::CallEdge;
use records::{InvocationRecord, PendingCall, TimingRecord};
use std::rc::{Rc, Weak};
use timers::{TimerRole, TimerSlots};

/// Underlying function with its calling context made explicit.
pub(crate) type BoxedFunc<A, C, R> = Box<dyn Fn(Option<C>, A) -> R>;

struct EngineState<A, C, R, TM: Timer> {
    invocation: InvocationRecord<A, C, R>,
    timing: TimingRecord<TM::Instant>,
    timers: TimerSlots<TM::Task>,
}

impl<A, C, R, TM: Timer> Default for EngineState<A, C, R, TM> {
    fn default() -> Self {
        Self {
            invocation: InvocationRecord::default(),
            timing: TimingRecord::default(),
            timers: TimerSlots::default(),
        }
    }
}

pub(crate) struct Engine<A, C, R, TM: Timer> {
    func: BoxedFunc<A, C, R>,
    config: DebounceConfig,
    timer: TM,
    state: RefCell<EngineState<A, C, R, TM>>,
    this: Weak<Self>,
}

impl<A, C, R, TM> Engine<A, C, R, TM>
where
    A: 'static,
    C: 'static,
    R: Clone + 'static,
    TM: Timer,
{
    pub(crate) fn new(func: BoxedFunc<A, C, R>, config: DebounceConfig, timer: TM) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            func,
            config,
            timer,
            state: RefCell::new(EngineState::default()),
            this: this.clone(),
        })
    }

    pub(crate) fn config(&self) -> DebounceConfig {
        self.config
    }

    pub(crate) fn call(&self, args: A, context: Option<C>) -> Option<R> {
        let now = self.timer.now();
        let edge = {
            let mut state = self.state.borrow_mut();
            let is_invoking = policy::should_invoke(&self.config, &state.timing, now);
            state.invocation.record(args, context);
            state.timing.last_call_time = Some(now);
            policy::classify_call(
                is_invoking,
                state.timers.is_armed(TimerRole::Delay),
                self.config.is_maxing(),
            )
        };

        match edge {
            CallEdge::Leading => self.leading_edge(now),
            CallEdge::Ceiling => self.ceiling_edge(now),
            CallEdge::Deferred => {
                let mut state = self.state.borrow_mut();
                if !state.timers.is_armed(TimerRole::Delay) {
                    self.arm(&mut state, TimerRole::Delay, self.config.wait());
                }
                if !state.timers.is_armed(TimerRole::Ceiling) {
                    if let Some(remaining) =
                        policy::remaining_ceiling(&self.config, &state.timing, now)
                    {
                        self.arm(&mut state, TimerRole::Ceiling, remaining);
                    }
                }
                state.invocation.result()
            }
        }
    }

    pub(crate) fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        self.disarm_all(&mut state);
        state.invocation.clear_pending();
        state.timing.last_call_time = None;
        trace!("pending invocation cancelled");
    }

    pub(crate) fn flush(&self) -> Option<R> {
        let armed = self.state.borrow().timers.is_armed(TimerRole::Delay);
        if armed {
            trace!("flushing pending invocation");
            self.trailing_edge(self.timer.now())
        } else {
            self.last_result()
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.state.borrow().timers.is_armed(TimerRole::Delay)
    }

    pub(crate) fn last_result(&self) -> Option<R> {
        self.state.borrow().invocation.result()
    }

    fn leading_edge(&self, now: TM::Instant) -> Option<R> {
        {
            let mut state = self.state.borrow_mut();
            state.timing.mark_invoked(now);
            self.arm(&mut state, TimerRole::Delay, self.config.wait());
            if let Some(max_wait) = self.config.max_wait() {
                self.arm(&mut state, TimerRole::Ceiling, max_wait);
            }
        }

        trace!(leading = self.config.leading(), "burst started");
        if self.config.leading() {
            self.invoke(now)
        } else {
            self.last_result()
        }
    }

    fn ceiling_edge(&self, now: TM::Instant) -> Option<R> {
        {
            let mut state = self.state.borrow_mut();
            self.arm(&mut state, TimerRole::Delay, self.config.wait());
            if let Some(max_wait) = self.config.max_wait() {
                self.arm(&mut state, TimerRole::Ceiling, max_wait);
            }
        }

        debug!("ceiling reached while calls keep arriving");
        self.invoke(now)
    }

    fn trailing_edge(&self, now: TM::Instant) -> Option<R> {
        let invoke = {
            let mut state = self.state.borrow_mut();
            self.disarm_all(&mut state);
            let invoke = self.config.trailing() && state.invocation.has_pending();
            if !invoke {
                state.invocation.clear_pending();
            }
            invoke
        };

        trace!(invoke, "trailing edge");
        if invoke {
            self.invoke(now)
        } else {
            self.last_result()
        }
    }

    fn on_timer(&self, role: TimerRole, generation: u64) {
        let now = self.timer.now();
        {
            let mut state = self.state.borrow_mut();
            if !state.timers.take_fired(role, generation) {
                trace!(?role, "ignoring superseded timer");
                return;
            }
            if !policy::should_invoke(&self.config, &state.timing, now) {
                let remaining = match role {
                    TimerRole::Delay => Some(policy::remaining_wait(&self.config, &state.timing, now)),
                    TimerRole::Ceiling => policy::remaining_ceiling(&self.config, &state.timing, now),
                };
                if let Some(remaining) = remaining {
                    self.arm(&mut state, role, remaining);
                }
                return;
            }
        }

        self.trailing_edge(now);
    }

    fn invoke(&self, now: TM::Instant) -> Option<R> {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.timing.mark_invoked(now);
            state.invocation.take_pending()
        };
        let Some(PendingCall { args, context }) = pending else {
            return self.last_result();
        };

        let result = (self.func)(context, args);
        self.state
            .borrow_mut()
            .invocation
            .store_result(result.clone());
        Some(result)
    }

    fn arm(&self, state: &mut EngineState<A, C, R, TM>, role: TimerRole, delay: Duration) {
        let generation = state.timers.next_generation();
        let engine = self.this.clone();
        let task = self.timer.schedule_after(
            delay,
            Box::new(move || {
                if let Some(engine) = engine.upgrade() {
                    engine.on_timer(role, generation);
                }
            }),
        );

        if let Some(previous) = state.timers.install(role, generation, task) {
            self.timer.cancel_task(previous);
        }
        trace!(?role, ?delay, "timer armed");
    }

    fn disarm_all(&self, state: &mut EngineState<A, C, R, TM>) {
        for task in state.timers.take_all() {
            self.timer.cancel_task(task);
        }
    }
}

impl<A, C, R, TM: Timer> Drop for Engine<A, C, R, TM> {
    fn drop(&mut self) {
        for task in self.state.get_mut().timers.take_all() {
            self.timer.cancel_task(task);
        }
    }
}
