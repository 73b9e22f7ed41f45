mod app;
mod config;
mod error;
mod ui;

use std::{fs::File, sync::Arc};

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let mut app = app::App::new(config);
    app.run()?;
    Ok(())
}

/// Logs go to a file: the alternate screen owns stdout while the app runs.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    let file = File::create(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "alcancia_tui={level},ledger={level}",
            level = config.log_level
        ))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
