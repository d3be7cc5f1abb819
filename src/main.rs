use anyhow::Context;
use bizdash::cli::Cli;
use bizdash::{logging, AnalyticsCalculator, DashboardService, JsonSnapshotSource};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = cli.analytics_config()?;
    tracing::info!("讀取快照: {}", cli.snapshot.display());

    let service = DashboardService::new(
        JsonSnapshotSource::new(&cli.snapshot),
        AnalyticsCalculator::new(config),
    );

    let dashboard = service.refresh().map_err(|error| {
        tracing::error!("儀表板載入失敗 ({})", error.kind().as_str());
        error
    });
    let dashboard =
        dashboard.with_context(|| format!("無法載入快照 {}", cli.snapshot.display()))?;

    println!("{}", cli.render(&dashboard, service.calculator())?);
    Ok(())
}
