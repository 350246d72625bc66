//! Demonstrates the tracing events emitted by a checker
//!
//! Run with: cargo run --example tracing_demo --features tracing

use insure::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let mut ensure = Insure::with_defaults();

    // rejected: `number` is a default
    let _ = ensure.register("number", |_: &Value| true);

    let number = ensure.assertion("number").expect("default assertion");
    match insure!(ensure; 1, "two").must(&[number.clone()]) {
        Ok(_) => tracing::info!("all values are numbers"),
        Err(e) => tracing::error!("{}", e),
    }

    ensure.disable();
    let _ = insure!(ensure; "two").must(&[number]);
    tracing::info!("disabled checker skipped evaluation");
}
