use clap::Parser;
use dnscache_view_application::{GenerateReportUseCase, ReportMode};
use dnscache_view_domain::DomainError;
use dnscache_view_infrastructure::{ResolverSession, SystemCacheSource, SystemPayloadResolver};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "dnscache-view")]
#[command(version)]
#[command(about = "Dump the local DNS resolver cache as a table or CSV")]
struct Cli {
    /// Write the report as CSV to this file instead of a table on stdout
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // One diagnostic line on stdout, then a nonzero exit.
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bootstrap::init_logging(&cli.log_level);

    // The sink is resolved before anything touches the cache: a bad path
    // must fail without a fetch being attempted.
    let (mut sink, mode): (Box<dyn Write>, ReportMode) = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| DomainError::OutputSink {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            (Box::new(BufWriter::new(file)), ReportMode::Csv)
        }
        None => (Box::new(io::stdout().lock()), ReportMode::Table),
    };

    let session = ResolverSession::open()?;
    let cache = Arc::new(SystemCacheSource::new(session.clone()));
    let resolver = Arc::new(SystemPayloadResolver::new(session));

    let report = GenerateReportUseCase::new(cache, resolver);
    let summary = report.execute(mode, &mut *sink)?;

    info!(
        entries = summary.entries,
        resolved = summary.resolved,
        "dnscache-view finished"
    );
    Ok(())
}
