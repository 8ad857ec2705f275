//! Error types used by the rxflow core and scheduler backends.
//!
//! This module defines two main error types:
//!
//! - [`StreamError`] — the value carried on a subscription's error channel
//!   (what an observer receives in `on_error`).
//! - [`SchedulerError`] — errors raised while constructing a scheduler backend.
//!
//! [`StreamError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors flowing through a subscription's error channel.
///
/// A `StreamError` is a terminal signal for one subscription: once it has been
/// delivered to an observer, no further events follow on that subscription.
///
/// The type is cheap to clone and comparable so tests and downstream sinks can
/// inspect what they received.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The producer procedure failed or signalled an error explicitly.
    #[error("source failed: {message}")]
    Source {
        /// Human-readable description of the failure.
        message: String,
    },

    /// A `map` function, `filter` predicate, or `flat_map` mapper rejected an item.
    #[error("transform failed: {message}")]
    Transform {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl StreamError {
    /// Creates a [`StreamError::Source`].
    pub fn source(message: impl Into<String>) -> Self {
        StreamError::Source {
            message: message.into(),
        }
    }

    /// Creates a [`StreamError::Transform`].
    pub fn transform(message: impl Into<String>) -> Self {
        StreamError::Transform {
            message: message.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use rxflow::StreamError;
    ///
    /// let err = StreamError::source("boom");
    /// assert_eq!(err.as_label(), "stream_source_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StreamError::Source { .. } => "stream_source_failed",
            StreamError::Transform { .. } => "stream_transform_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StreamError::Source { message } => format!("source: {message}"),
            StreamError::Transform { message } => format!("transform: {message}"),
        }
    }
}

/// # Errors raised while constructing a scheduler backend.
///
/// Backends own an OS thread pool; standing one up can fail (thread limits,
/// resource exhaustion). Construction is the only fallible scheduler
/// operation — `execute` itself never reports failure back to the caller.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// The backing worker pool could not be started.
    #[error("failed to start {name} worker pool: {source}")]
    PoolStart {
        /// Backend name (for logs).
        name: &'static str,
        /// The underlying I/O error from the runtime builder.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(StreamError::source("x").as_label(), "stream_source_failed");
        assert_eq!(
            StreamError::transform("x").as_label(),
            "stream_transform_failed"
        );
    }

    #[test]
    fn test_messages_include_detail() {
        let err = StreamError::transform("bad item");
        assert_eq!(err.as_message(), "transform: bad item");
        assert_eq!(err.to_string(), "transform failed: bad item");
    }

    #[test]
    fn test_clone_compares_equal() {
        let err = StreamError::source("boom");
        assert_eq!(err, err.clone());
    }
}
