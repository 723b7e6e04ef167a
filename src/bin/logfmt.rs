//! Reads JSON log lines on stdin and prints them in a compact text form.
//!
//! ```text
//! sales | logfmt -service sales
//! ```

use clap::Parser;
use service_logger::filter::LogFilter;
use std::ffi::OsString;
use std::io;

#[derive(Parser)]
#[command(name = "logfmt")]
#[command(about = "Reformat JSON log lines from stdin", long_about = None)]
struct Cli {
    /// Filter which service to see (case-insensitive)
    #[arg(short, long, default_value = "")]
    service: String,
}

/// Accept the single-dash `-service` spelling as well as `--service`.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if s == "-service" || s.starts_with("-service=") => {
                OsString::from(format!("-{}", s))
            }
            _ => arg,
        })
        .collect()
}

/// Leave Ctrl-C to the producer at the head of the pipeline so every line it
/// flushes on the way out still gets formatted.
#[cfg(unix)]
fn ignore_interrupt() {
    use tokio::signal::unix::{signal, SignalKind};

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("logfmt: cannot install SIGINT handler: {}", e);
            return;
        }
    };
    // tokio installs its handler once and never restores the default
    // disposition, so SIGINT stays ignored after the stream and runtime drop.
    runtime.block_on(async {
        if let Err(e) = signal(SignalKind::interrupt()) {
            eprintln!("logfmt: cannot install SIGINT handler: {}", e);
        }
    });
}

#[cfg(not(unix))]
fn ignore_interrupt() {}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    ignore_interrupt();

    let filter = LogFilter::new(&cli.service);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = filter.run(stdin.lock(), stdout.lock()) {
        eprintln!("{}", e);
    }
}
