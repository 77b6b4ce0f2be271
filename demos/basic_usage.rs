// ============================================================================
// Basic Usage Example
// ============================================================================

use fincalc::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Financial Calculator Example ===\n");

    let calc = CalculatorBuilder::new()
        .with_event_handler(Arc::new(LoggingEventHandler))
        .build()
        .expect("default configuration is valid");

    // Comma or point as decimal separator, spaces ignored
    let cases = [
        ("1234567890,123456", "-987654321,654321", Operation::Add),
        ("0.1", "0.2", Operation::Add),
        ("0.9999995", "1", Operation::Subtract),
        ("1 000 000", "0,000001", Operation::Subtract),
    ];

    println!("Calculations:");
    for (a, b, op) in cases.iter() {
        match calc.evaluate(a, b, *op) {
            Ok(done) => println!("  {}", done.equation()),
            Err(err) => println!("  {:?} {} {:?}: {}", a, op.symbol(), b, err),
        }
    }

    // Rejections carry a stable kind id plus an English message
    println!("\n=== Rejected Input ===");
    let rejected = [
        ("1e5", "1"),
        ("1", "1.2.3"),
        ("", "1"),
        ("1000000000000", "0.000001"),
    ];
    for (a, b) in rejected.iter() {
        if let Err(err) = calc.evaluate(a, b, Operation::Add) {
            println!("  [{}] {}", err.kind_id(), err);
        }
    }

    // Free functions for callers that drive the pipeline themselves
    println!("\n=== Pipeline ===");
    println!("  normalize(\" 12 345,6 \") = {:?}", normalize(" 12 345,6 "));
    match parse("-0,0000005") {
        Ok(amount) => println!("  parse(\"-0,0000005\") = {}", format(&amount)),
        Err(kind) => println!("  parse failed: {}", kind),
    }
}
