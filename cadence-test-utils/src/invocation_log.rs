// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::RefCell;
use std::rc::Rc;

/// One invocation of an underlying function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<C, A> {
    pub context: Option<C>,
    pub args: A,
}

/// Shared, append-only record of invocations.
#[derive(Debug)]
pub struct InvocationLog<C, A> {
    entries: Rc<RefCell<Vec<Invocation<C, A>>>>,
}

impl<C, A> Clone for InvocationLog<C, A> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<C, A> Default for InvocationLog<C, A> {
    fn default() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<C: Clone, A: Clone> InvocationLog<C, A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, context: Option<C>, args: A) {
        self.entries.borrow_mut().push(Invocation { context, args });
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn args(&self) -> Vec<A> {
        self.entries.borrow().iter().map(|entry| entry.args.clone()).collect()
    }

    #[must_use]
    pub fn contexts(&self) -> Vec<Option<C>> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.context.clone())
            .collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<Invocation<C, A>> {
        self.entries.borrow().last().cloned()
    }
}

impl<A: Clone + 'static> InvocationLog<(), A> {
    /// A function that records its argument and returns it unchanged.
    pub fn identity(&self) -> impl Fn(A) -> A + 'static {
        let log = self.clone();
        move |args| {
            log.record(None, args.clone());
            args
        }
    }

    /// A function that records its argument and returns the invocation count so far.
    pub fn counter(&self) -> impl Fn(A) -> usize + 'static {
        let log = self.clone();
        move |args| {
            log.record(None, args);
            log.count()
        }
    }
}

impl<C: Clone + 'static, A: Clone + 'static> InvocationLog<C, A> {
    /// Like [`InvocationLog::counter`], for functions that receive a calling context.
    pub fn contextual_counter(&self) -> impl Fn(Option<C>, A) -> usize + 'static {
        let log = self.clone();
        move |context, args| {
            log.record(context, args);
            log.count()
        }
    }
}
