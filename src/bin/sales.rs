//! Sales service skeleton: start, wait for a termination signal, shut down.

use clap::Parser;
use service_logger::prelude::*;
use service_logger::{attrs, info};
use std::process::ExitCode;
use std::sync::{Arc, OnceLock};

#[derive(Parser)]
#[command(name = "sales")]
#[command(about = "Sales service", long_about = None)]
struct Cli {
    /// Value of the `service` field on every record
    #[arg(long, default_value = "SALES")]
    service_name: String,

    /// Minimum level written (debug, info, warn, error)
    #[arg(long, default_value_t = Level::Info)]
    log_level: Level,

    /// Record format (json, text)
    #[arg(long, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The error hook logs through the logger it is installed in.
    let alerts: Arc<OnceLock<Logger>> = Arc::new(OnceLock::new());
    let hook_logger = Arc::clone(&alerts);
    let events = Events::new().on_error(move |ctx, _record| {
        if let Some(log) = hook_logger.get() {
            log.info(ctx, "********** SEND ALERT **********", Vec::new());
        }
    });

    let log = Logger::builder()
        .output(Output::Stdout)
        .min_level(cli.log_level)
        .service_name(cli.service_name)
        .trace_id_fn(trace_id_from_context())
        .events(events)
        .format(cli.format)
        .colors(cli.format == OutputFormat::Text)
        .build();
    let _ = alerts.set(log.clone());

    let ctx = Context::background();

    if let Err(e) = run(&ctx, &log).await {
        log.error(&ctx, "failed to run sales service", attrs!["error" => e.to_string()]);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(ctx: &Context, log: &Logger) -> Result<()> {
    log.build_info(ctx, BuildInfo::current().as_ref());

    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    info!(log, ctx, "startup", "cpus" => cpus);

    let signal = shutdown_signal().await?;

    info!(log, ctx, "shutdown", "status" => "shutdown started", "signal" => signal);
    info!(log, ctx, "shutdown", "status" => "shutdown completed", "signal" => signal);

    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => Ok("SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
