use anyhow::Context;
use clap::Parser;
use tip_calc::app::{self, Store, TraceSubscriber};
use tip_calc::tui::TuiApp;
use tip_calc::utils::logger::{self, LogSink};
use tip_calc::utils::validation::Validate;
use tip_calc::{CliConfig, LocaleCurrencyFormatter, Settings, TipCalcError, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = run(config) {
        match e.downcast_ref::<TipCalcError>() {
            Some(err) => {
                tracing::error!("❌ {} ({:#})", err, e);
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    // 驗證命令列參數
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let settings = Settings::resolve(file_config.as_ref(), &config.overrides())?;

    // 介面模式時終端機由 UI 佔用，日誌只寫入檔案
    let sink = match (&settings.log.file, config.is_headless()) {
        (Some(path), _) => LogSink::File(path.clone()),
        (None, true) => LogSink::Stderr,
        (None, false) => LogSink::Off,
    };
    logger::init_logger(
        settings.log.verbose,
        settings.log.level.as_deref(),
        settings.log.format,
        sink,
    )?;

    tracing::info!("Starting tip-calc");
    tracing::debug!("Settings: {:?}", settings);

    let formatter = match &settings.locale {
        Some(tag) => LocaleCurrencyFormatter::for_tag(tag),
        None => LocaleCurrencyFormatter::detect(),
    };
    let clipboard = settings.clipboard.build();
    let mut store = Store::with_state(settings.initial_state(), clipboard, formatter);

    match config.amount.as_deref() {
        Some(amount) => {
            store.subscribe(Box::new(TraceSubscriber));
            let screen = app::run_once(&mut store, amount, config.copy);
            if config.json {
                println!("{}", serde_json::to_string_pretty(&screen).map_err(TipCalcError::from)?);
            } else {
                print!("{}", screen);
            }
        }
        None => TuiApp::new(store).run()?,
    }

    tracing::info!("tip-calc finished");
    Ok(())
}
