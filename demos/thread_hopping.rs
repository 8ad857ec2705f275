//! # Example: thread_hopping
//!
//! Moves production onto the io pool with `subscribe_on` and delivery onto a
//! single worker with `observe_on`, then disposes a second subscription
//! before its events arrive.
//!
//! ## Flow
//! ```text
//! main thread:    subscribe() ──► returns Disposable immediately
//! io worker:      producer emits 1..=5
//! single worker:  delivery, strictly in arrival order
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example thread_hopping
//! ```

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use rxflow::{IoScheduler, Observable, SchedulerRef, SingleScheduler, StreamError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let io: SchedulerRef = Arc::new(IoScheduler::new()?);
    let single: SchedulerRef = Arc::new(SingleScheduler::new()?);

    let source = Observable::create(|obs| {
        println!("[producer] running on {:?}", thread::current().id());
        for i in 1..=5 {
            obs.on_next(i);
        }
        obs.on_complete();
        Ok(())
    });

    let pipeline = source
        .map(|v| Ok(v * 10))
        .subscribe_on(Arc::clone(&io))
        .observe_on(Arc::clone(&single));

    // First subscription: wait for completion via a channel.
    let (done_tx, done_rx) = mpsc::channel();
    pipeline.subscribe_with(
        |item| println!("[deliver] {item} on {:?}", thread::current().id()),
        |err: StreamError| eprintln!("[deliver] failed: {err}"),
        move || done_tx.send(()).unwrap(),
    );
    done_rx.recv()?;

    // Second subscription, disposed right away: the producer may still run,
    // but nothing passes the disposed gate.
    let disposable = pipeline.subscribe_with(
        |item| println!("[disposed] should not print: {item}"),
        |_err| {},
        || println!("[disposed] should not print completion"),
    );
    disposable.dispose();
    println!("[main] disposed={}", disposable.is_disposed());

    Ok(())
}
