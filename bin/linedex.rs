use anyhow::Result;
use clap::Parser;
use linedex::{repl, RecordSource, SearchService};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "linedex")]
#[command(about = "In-memory word search over line-oriented records", long_about = None)]
struct Args {
    /// Record file, one record per line; omit to enter records at the console
    #[arg(long, env = "LINEDEX_FILE")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting linedex v{}", linedex::VERSION);

    let source = RecordSource::from_path(args.file);
    info!("Record source: {:?}", source);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let records = repl::load_records(&source, &mut stdin.lock(), &mut stdout)?;
    let service = SearchService::new(records);

    info!(
        "Indexed {} record(s), {} distinct token(s)",
        service.record_count(),
        service.index().distinct_tokens()
    );

    repl::run(&service, &mut stdin.lock(), &mut stdout)?;

    Ok(())
}
