use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::WaterAnalysisService;
use crate::domain::error::Result;
use crate::infrastructure::config::Settings;

/// Install the global tracing subscriber; `RUST_LOG` takes precedence over `filter`.
/// Later calls are no-ops.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

/// Load settings, start logging and build an analysis service for the host process
pub fn bootstrap() -> Result<(Settings, WaterAnalysisService)> {
    let settings = Settings::load()?;
    init_tracing(&settings.log_filter);

    info!(
        "watertreat ready (environment={}, max_file_size={})",
        settings.environment, settings.max_file_size
    );

    let service = WaterAnalysisService::new(settings.ingest_config());
    Ok((settings, service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("debug");
        init_tracing("info");
    }
}
