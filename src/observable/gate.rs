//! # Per-subscription gating observer.
//!
//! Every `subscribe` call wraps the caller's observer in a [`SubscriptionGate`]
//! before handing it to the producer. The gate centralizes two rules so every
//! operator inherits them (operators are themselves built by calling
//! `subscribe` on their upstream):
//!
//! - **disposal**: once the subscription's [`Disposable`] flag is set, all
//!   three callbacks become no-ops;
//! - **at most one terminal signal**: after the first `on_error` or
//!   `on_complete` passes through, every further event is dropped.
//!
//! Both checks are lock-free reads of shared atomics; dispose may race with
//! delivery from a scheduler worker, and the first terminal signal wins via
//! a single atomic swap.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::disposable::Disposable;
use crate::error::StreamError;
use crate::observers::{Observer, ObserverRef};

pub(crate) struct SubscriptionGate<T> {
    downstream: ObserverRef<T>,
    disposable: Disposable,
    terminated: AtomicBool,
}

impl<T> SubscriptionGate<T> {
    pub(crate) fn new(downstream: ObserverRef<T>, disposable: Disposable) -> Self {
        Self {
            downstream,
            disposable,
            terminated: AtomicBool::new(false),
        }
    }

    /// Claims the terminal slot; only the first caller gets `true`.
    fn claim_terminal(&self) -> bool {
        !self.terminated.swap(true, Ordering::AcqRel)
    }
}

impl<T: Send + 'static> Observer<T> for SubscriptionGate<T> {
    fn on_next(&self, item: T) {
        if self.disposable.is_disposed() || self.terminated.load(Ordering::Acquire) {
            return;
        }
        self.downstream.on_next(item);
    }

    fn on_error(&self, error: StreamError) {
        if self.disposable.is_disposed() {
            return;
        }
        if self.claim_terminal() {
            self.downstream.on_error(error);
        }
    }

    fn on_complete(&self) {
        if self.disposable.is_disposed() {
            return;
        }
        if self.claim_terminal() {
            self.downstream.on_complete();
        }
    }
}
