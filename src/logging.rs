use anyhow::Result;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Installs the global subscriber for the command-line binary.
///
/// `RUST_LOG` overrides the default INFO level.
pub fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(default_filter())
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Lambda variant: CloudWatch timestamps each line and does not render ANSI.
pub fn init_lambda_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(default_filter())
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn default_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
