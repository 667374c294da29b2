use anyhow::Result;
use todoterm::{backend, config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {e:#}");
            if let Ok(path) = Config::get_default_config_path() {
                eprintln!("\n💡 Check ./todoterm.toml or {}", path.display());
            }
            std::process::exit(1);
        }
    };

    if let Some(path) = logger::init(&config.logging)? {
        log::info!("Logging to {}", path.display());
    }

    let store = backend::create_store(&config.api)?;

    // Run the TUI application
    ui::run_app(store, config).await?;

    Ok(())
}
