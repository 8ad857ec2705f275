//! # Subscription cancellation handle.
//!
//! A [`Disposable`] is returned by every `subscribe` call and gates further
//! event delivery to that subscription's observer. Cancellation is
//! **advisory**: flipping the flag stops the subscription boundary from
//! forwarding events, but it does not interrupt a producer mid-loop and does
//! not cancel jobs already queued on a scheduler.
//!
//! ## Guarantees
//! - `dispose()` is idempotent and thread-safe (may race with concurrent
//!   event delivery from a scheduler worker).
//! - Clones share the same underlying flag; disposing any clone disposes all.
//! - The flag is monotonic: once disposed, `is_disposed()` stays `true`.

use tokio_util::sync::CancellationToken;

/// Cancellation handle for one subscription.
///
/// Created fresh per `subscribe` call and valid only for that call's event
/// stream. Backed by a [`CancellationToken`], so the disposed state is shared
/// between the handle returned to the caller and the gating observer inside
/// the subscription.
///
/// ## Example
/// ```
/// use rxflow::Disposable;
///
/// let d = Disposable::new();
/// assert!(!d.is_disposed());
///
/// let shared = d.clone();
/// shared.dispose();
/// assert!(d.is_disposed());
///
/// d.dispose(); // idempotent
/// assert!(d.is_disposed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Disposable {
    flag: CancellationToken,
}

impl Disposable {
    /// Creates a fresh, undisposed handle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flag: CancellationToken::new(),
        }
    }

    /// Flips the shared flag. Subsequent events at the subscription boundary
    /// that created this handle are dropped instead of delivered.
    ///
    /// Work already in flight upstream is not interrupted.
    pub fn dispose(&self) {
        self.flag.cancel();
    }

    /// Returns whether this subscription has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.flag.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_handle_is_not_disposed() {
        let d = Disposable::new();
        assert!(!d.is_disposed());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let d = Disposable::new();
        d.dispose();
        d.dispose();
        assert!(d.is_disposed());
    }

    #[test]
    fn test_clones_share_state() {
        let d = Disposable::new();
        let c = d.clone();
        c.dispose();
        assert!(d.is_disposed());
        assert!(c.is_disposed());
    }

    #[test]
    fn test_dispose_from_another_thread() {
        let d = Disposable::new();
        let c = d.clone();
        std::thread::spawn(move || c.dispose())
            .join()
            .expect("dispose thread panicked");
        assert!(d.is_disposed());
    }
}
