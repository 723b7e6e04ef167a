//! Basic logger usage example
//!
//! Demonstrates level filtering, trace ids, an error hook and scoped loggers.
//!
//! Run with: cargo run --example basic_usage

use service_logger::prelude::*;
use service_logger::{info, BuildInfo};

fn main() -> Result<()> {
    println!("=== Service Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .output(Output::Stdout)
        .min_level(Level::Debug)
        .service_name("SALES")
        .trace_id_fn(trace_id_from_context())
        .events(Events::new().on_error(|ctx, record| {
            eprintln!(
                "alert: {} (trace {})",
                record.message,
                ctx.trace_id().unwrap_or("-")
            );
        }))
        .build();

    let ctx = Context::background().with_new_trace_id();

    println!("1. Logging at different levels:");
    logger.debug(&ctx, "This is a debug message", vec![]);
    logger.info(&ctx, "This is an info message", vec![Attr::new("cpus", 8)]);
    logger.warn(&ctx, "This is a warning message", vec![]);
    logger.error(&ctx, "This is an error message", vec![Attr::new("code", 500)]);

    println!("\n2. Build information:");
    logger.build_info(&ctx, BuildInfo::current().as_ref());

    println!("\n3. Scoped logger and macros:");
    let orders = logger
        .with_group("order")
        .with_attrs(vec![Attr::new("id", 1042)]);
    info!(orders, &ctx, "order placed", "amount" => 19.99, "currency" => "EUR");

    println!("\n4. Text output with a higher threshold:");
    let text = Logger::builder()
        .format(OutputFormat::Text)
        .min_level("warn".parse()?)
        .service_name("BILLING")
        .build();
    text.info(&ctx, "Info message (hidden)", vec![]);
    text.warn(&ctx, "Warning message (visible)", vec![]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
