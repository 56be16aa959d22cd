use tokio::io::AsyncReadExt;
use tracing::info;

use roomsweep::batch::{self, Mode};
use roomsweep::wire;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the reports; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let metrics_port: Option<u16> = std::env::var("ROOMSWEEP_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    roomsweep::observability::init(metrics_port)?;

    let mode: Mode = std::env::var("ROOMSWEEP_MODE")
        .unwrap_or_else(|_| "assign".into())
        .parse()?;
    let input_path = std::env::var("ROOMSWEEP_INPUT").ok();
    let max_parallel: usize = std::env::var("ROOMSWEEP_MAX_PARALLEL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);

    info!("roomsweep starting");
    info!("  mode: {}", mode.label());
    info!("  input: {}", input_path.as_deref().unwrap_or("<stdin>"));
    info!("  max_parallel: {max_parallel}");

    let raw = match &input_path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let sets = wire::parse_request(&raw)?.into_sets();
    let total_events: usize = sets.iter().map(Vec::len).sum();
    info!("solving {} sets ({total_events} events)", sets.len());

    let reports = batch::run_batch(sets, mode, max_parallel).await;
    let failed = reports.iter().filter(|r| !r.is_ok()).count();

    let stdout = std::io::stdout();
    wire::write_reports(&mut stdout.lock(), &reports)?;

    if failed > 0 {
        tracing::warn!("{failed} of {} sets rejected", reports.len());
    }
    info!("roomsweep done");
    Ok(())
}
