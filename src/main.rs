/// Selecta demo entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use selecta::{DemoApp, DemoConfig, LogLevel};

    // RUST_LOG, when set, wins over the configured level
    let env_filter = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !env_filter {
        log::set_max_level(LogLevel::default().to_level_filter());
    }

    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let config = DemoConfig::resolve(path.as_deref())?;
    if !env_filter {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let mut app = DemoApp::new(&config)?;
    let stdin = std::io::stdin();
    app.run(stdin.lock(), std::io::stdout())?;
    Ok(())
}
