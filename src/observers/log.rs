//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints every event it receives to stdout in a
//! human-readable format. This is primarily useful for development,
//! debugging, and examples.
//!
//! ## Output format
//! ```text
//! [next] item=42
//! [error] label=stream_transform_failed msg="transform: bad item"
//! [complete]
//! ```

use std::fmt::Debug;

use crate::error::StreamError;
use crate::observers::observer::Observer;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints human-readable event lines for
/// any item type that implements [`Debug`].
///
/// Not intended for production use - implement a custom [`Observer`] for
/// structured logging or metrics collection.
#[derive(Debug, Default)]
pub struct LogObserver;

impl<T> Observer<T> for LogObserver
where
    T: Debug + Send + 'static,
{
    fn on_next(&self, item: T) {
        println!("[next] item={item:?}");
    }

    fn on_error(&self, error: StreamError) {
        println!(
            "[error] label={} msg={:?}",
            error.as_label(),
            error.as_message()
        );
    }

    fn on_complete(&self) {
        println!("[complete]");
    }
}
