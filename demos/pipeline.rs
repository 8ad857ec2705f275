//! # Example: pipeline
//!
//! Minimal synchronous pipeline: create a cold source, chain `filter`,
//! `map`, and `flat_map`, and subscribe with three closures.
//!
//! Demonstrates how to:
//! - Build a source with [`Observable::create`].
//! - Convert transform failures into the error channel.
//! - Observe cold semantics (each subscribe replays the producer).
//!
//! ## Run
//! ```bash
//! cargo run --example pipeline
//! ```

use rxflow::{Observable, StreamError};

fn main() {
    // 1. A cold source: nothing runs until subscribe.
    let numbers = Observable::create(|obs| {
        for i in 1..=6 {
            obs.on_next(i);
        }
        obs.on_complete();
        Ok(())
    });

    // 2. Compose operators; each call returns a new Observable.
    let pipeline = numbers
        .filter(|v| Ok(v % 2 == 0))
        .map(|v| {
            if v > 100 {
                return Err(StreamError::transform(format!("{v} is out of range")));
            }
            Ok(format!("even_{v}"))
        })
        .flat_map(|label| {
            Ok(Observable::create(move |obs| {
                obs.on_next(format!("{label}_a"));
                obs.on_next(format!("{label}_b"));
                obs.on_complete();
                Ok(())
            }))
        });

    // 3. First subscription.
    pipeline.subscribe_with(
        |item| println!("[first] {item}"),
        |err: StreamError| eprintln!("[first] failed: {err}"),
        || println!("[first] done"),
    );

    // 4. Second subscription replays the whole source from scratch.
    pipeline.subscribe_with(
        |item| println!("[second] {item}"),
        |err: StreamError| eprintln!("[second] failed: {err}"),
        || println!("[second] done"),
    );
}
