// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The two timers a wrapper can have armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerRole {
    /// Waits for the quiet period after the last call.
    Delay,
    /// Bounds the time since the last invocation. Only armed with a ceiling.
    Ceiling,
}

#[derive(Debug)]
struct Armed<T> {
    generation: u64,
    task: T,
}

/// One slot per [`TimerRole`], each holding at most one armed task.
///
/// Every arming gets a fresh generation. A callback that fires for a generation
/// no longer in its slot was superseded and must be ignored.
#[derive(Debug)]
pub(crate) struct TimerSlots<T> {
    delay: Option<Armed<T>>,
    ceiling: Option<Armed<T>>,
    next_generation: u64,
}

impl<T> Default for TimerSlots<T> {
    fn default() -> Self {
        Self {
            delay: None,
            ceiling: None,
            next_generation: 0,
        }
    }
}

impl<T> TimerSlots<T> {
    pub(crate) fn is_armed(&self, role: TimerRole) -> bool {
        self.slot(role).is_some()
    }

    pub(crate) fn next_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        generation
    }

    /// Stores a freshly scheduled task, handing back the one it replaces.
    pub(crate) fn install(&mut self, role: TimerRole, generation: u64, task: T) -> Option<T> {
        self.slot_mut(role)
            .replace(Armed { generation, task })
            .map(|armed| armed.task)
    }

    /// Disarms a role, handing back its task for cancellation.
    pub(crate) fn take(&mut self, role: TimerRole) -> Option<T> {
        self.slot_mut(role).take().map(|armed| armed.task)
    }

    /// Clears the slot of a task that just fired.
    ///
    /// Returns `false` when the firing is stale, leaving the slot untouched.
    pub(crate) fn take_fired(&mut self, role: TimerRole, generation: u64) -> bool {
        let slot = self.slot_mut(role);
        if slot.as_ref().is_some_and(|armed| armed.generation == generation) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Disarms both roles, handing back their tasks for cancellation.
    pub(crate) fn take_all(&mut self) -> impl Iterator<Item = T> {
        let delay = self.take(TimerRole::Delay);
        let ceiling = self.take(TimerRole::Ceiling);
        delay.into_iter().chain(ceiling)
    }

    fn slot(&self, role: TimerRole) -> &Option<Armed<T>> {
        match role {
            TimerRole::Delay => &self.delay,
            TimerRole::Ceiling => &self.ceiling,
        }
    }

    fn slot_mut(&mut self, role: TimerRole) -> &mut Option<Armed<T>> {
        match role {
            TimerRole::Delay => &mut self.delay,
            TimerRole::Ceiling => &mut self.ceiling,
        }
    }
}
