use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderbatch::application::dispatcher::OrderDispatcher;
use orderbatch::application::orchestrator::BatchOrchestrator;
use orderbatch::domain::ports::OrderRepositoryBox;
use orderbatch::infrastructure::in_memory::{
    InMemoryOrderRepository, InMemoryOrderSource, StaticApiClient,
};
#[cfg(feature = "storage-rocksdb")]
use orderbatch::infrastructure::rocksdb::RocksDBOrderRepository;
use orderbatch::interfaces::csv::api_response_reader::ApiResponseReader;
use orderbatch::interfaces::csv::order_exporter::CsvOrderExporter;
use orderbatch::interfaces::csv::order_reader::OrderReader;
use orderbatch::logging;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file (id,user,type,amount,flag)
    input: PathBuf,

    /// User whose orders are processed
    #[arg(long, default_value_t = 0)]
    user: u32,

    /// API responses CSV file (order,status,data). Orders without a response
    /// are treated as failed API calls.
    #[arg(long)]
    api_responses: Option<PathBuf>,

    /// Report file. Defaults to orders_report_<user>.csv
    #[arg(long)]
    report: Option<PathBuf>,

    /// Directory where the type A export file is created
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init_logging();
    let cli = Cli::parse();

    // Load pending orders
    let source = InMemoryOrderSource::new();
    let file = File::open(&cli.input).into_diagnostic()?;
    for row_result in OrderReader::new(file).orders() {
        match row_result {
            Ok(row) => source.add(row.user, row.into_order()).await,
            Err(e) => warn!("Error reading order: {}", e),
        }
    }

    let api_client = StaticApiClient::new();
    if let Some(path) = &cli.api_responses {
        let file = File::open(path).into_diagnostic()?;
        for row_result in ApiResponseReader::new(file).responses() {
            match row_result {
                Ok(row) => api_client.insert(row.order, row.response()).await,
                Err(e) => warn!("Error reading API response: {}", e),
            }
        }
    }

    let repository = open_repository(cli.db_path.as_deref())?;
    let exporter = CsvOrderExporter::for_user(&cli.export_dir, cli.user);
    let dispatcher = OrderDispatcher::new(Box::new(api_client), repository, Box::new(exporter));
    let orchestrator = BatchOrchestrator::new(Box::new(source), dispatcher);

    let report_path = cli
        .report
        .unwrap_or_else(|| PathBuf::from(format!("orders_report_{}.csv", cli.user)));
    let report = File::create(&report_path).into_diagnostic()?;

    let success = orchestrator
        .process_orders(cli.user, BufWriter::new(report))
        .await;
    info!(report = %report_path.display(), success, "Run complete");

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(feature = "storage-rocksdb")]
fn open_repository(db_path: Option<&Path>) -> Result<OrderRepositoryBox> {
    match db_path {
        Some(path) => Ok(Box::new(RocksDBOrderRepository::open(path).into_diagnostic()?)),
        None => Ok(Box::new(InMemoryOrderRepository::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_repository(db_path: Option<&Path>) -> Result<OrderRepositoryBox> {
    if db_path.is_some() {
        warn!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryOrderRepository::new()))
}
