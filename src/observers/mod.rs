mod callback;
mod observer;

#[cfg(feature = "logging")]
mod log;
#[cfg(test)]
pub(crate) mod recording;

pub use callback::FnObserver;
pub use observer::{Observer, ObserverRef};

#[cfg(feature = "logging")]
pub use log::LogObserver;
