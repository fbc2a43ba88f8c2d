use clap::Parser;
use event_selectors::print_report;
use eyre::Result;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Prints the Starknet selectors of the job and worker events.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> Result<()> {
    let _args = Cli::parse();

    setup_tracing();

    print_report()?;

    Ok(())
}

/// Set up the subscriber for tracing. Logs go to stderr, leaving stdout for the report.
///
/// Invalid `RUST_LOG` directives are skipped, never failing the run.
fn setup_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_default();
    let env_filter = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).parse_lossy(filter);

    let stderr = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_filter(env_filter).boxed();

    tracing_subscriber::registry().with(stderr).init();
}
