//! Wiring & DI. Entry point: load config, init logging, build adapters,
//! inject into services, run the menu. No business logic here.

use dotenv::dotenv;
use std::sync::Arc;
use student_marks::adapters::persistence::memory_repo::MemoryRepo;
use student_marks::adapters::ui::banner;
use student_marks::adapters::ui::console::StdConsole;
use student_marks::adapters::ui::tui::TuiInputPort;
use student_marks::ports::{ConsolePort, InputPort, RepoPort};
use student_marks::shared::config::AppConfig;
use student_marks::usecases::{MarkService, RosterService};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    let cfg_result = AppConfig::load();
    let cfg = cfg_result.as_ref().cloned().unwrap_or_default();

    // Diagnostics go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter_or_default())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }
    if let Err(e) = &cfg_result {
        warn!(error = %e, "invalid configuration, using defaults");
    }

    // --- Adapters ---
    let repo: Arc<dyn RepoPort> = Arc::new(MemoryRepo::new());
    let console: Arc<dyn ConsolePort> = Arc::new(StdConsole::new());

    // --- Services ---
    let roster = Arc::new(RosterService::new(Arc::clone(&repo), Arc::clone(&console)));
    let marks = Arc::new(MarkService::new(Arc::clone(&repo), Arc::clone(&console)));

    let mut tui = TuiInputPort::new(
        Arc::clone(&console),
        roster,
        marks,
        cfg.clear_screen_or_default(),
    );
    if cfg.show_banner_or_default() {
        tui = tui.with_header(banner::render_welcome());
    }
    let input_port: Arc<dyn InputPort> = Arc::new(tui);

    // --- Run (main menu until "0" or end of input) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("session ended");
    Ok(())
}
