//! Guarding function inputs with runtime contracts
//!
//! Mirrors the classic `test(x, y, z)` example: one value must be a small number,
//! one must exist and be a boolean, one must be a string or a boolean.
//!
//! Run with: cargo run --example guarded_api

use insure::prelude::*;
use insure::Result;

fn check_args(ensure: &Insure, x: Value, y: Value, z: Value) -> Result<()> {
    insure!(ensure; x).must(&[ensure.assertion("number")?, ensure.assertion("small")?])?;
    insure!(ensure; y).must(&[ensure.not("null")?, ensure.assertion("boolean")?])?;
    insure!(ensure; z).either(&[ensure.assertion("string")?, ensure.assertion("boolean")?])?;

    println!("  arguments are all okay!");
    Ok(())
}

fn run(ensure: &Insure) {
    let calls: [(Value, Value, Value); 3] = [
        (3.into(), true.into(), "hello".into()),
        (3.into(), true.into(), false.into()),
        (3.into(), true.into(), 10.into()),
    ];

    for (x, y, z) in calls {
        if let Err(e) = check_args(ensure, x, y, z) {
            println!("  error: {}", e);
        }
    }
}

fn main() {
    println!("=== Guarded API Example ===\n");

    let mut ensure = Insure::with_defaults();
    ensure
        .register("small", |v: &Value| v.as_f64().is_some_and(|n| n.abs() < 100.0))
        .expect("fresh name");

    println!("--- Checks enabled ---");
    run(&ensure);

    println!("\n--- Checks disabled ---");
    ensure.disable();
    run(&ensure);
}
