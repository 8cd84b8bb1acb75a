/// Точка входа: очистка обоих наборов и экспорт в Excel

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use aula_prep::PrepConfig;

fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PrepConfig::default();
    let summary = aula_prep::run(&config).context("Data preparation failed")?;

    tracing::info!(summary = %serde_json::to_string(&summary)?, "Done");
    Ok(())
}
