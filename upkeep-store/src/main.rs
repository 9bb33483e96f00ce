//! `upkeep-replay`: feed newline-delimited JSON actions through a store.
//!
//! Usage: `upkeep-replay [--config PATH] [ACTIONS_FILE]`. Actions are read
//! from stdin when no file is given. The final state is printed to stdout as
//! pretty JSON; logs go to stderr. Toast durations and the comparison cap
//! come from the config; an add to a full comparison tray is logged and
//! skipped.

use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use upkeep_store::config::{config_path_from_args, config_path_from_env};
use upkeep_store::telemetry::init_tracing;
use upkeep_store::{
    dispatch_configured, DismissScheduler, JsonFilePreferences, ThemePreferenceSync, UiAction,
    UiConfig, UiError, UiStore,
};

fn main() -> Result<(), UiError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match config_path_from_args(args.iter().cloned()).or_else(config_path_from_env) {
        Some(path) => UiConfig::load_from(&path)?,
        None => UiConfig::default(),
    };
    init_tracing(config.log_format)?;

    let mut store = UiStore::new();
    let theme = ThemePreferenceSync::new(
        JsonFilePreferences::new(config.preferences_path.clone()),
        config.theme_key.clone(),
        config.fallback_theme,
    );
    theme.restore(&mut store);
    theme.attach(&mut store);

    let reader: Box<dyn BufRead> = match actions_path(&args) {
        Some(path) => {
            tracing::info!(path = %path.display(), "replaying actions from file");
            Box::new(BufReader::new(std::fs::File::open(path)?))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut scheduler = DismissScheduler::new();
    let mut replayed = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action: UiAction = serde_json::from_str(trimmed).map_err(|source| UiError::Action {
            line: index + 1,
            source,
        })?;
        let name = action.name();
        match dispatch_configured(&mut store, &config, action) {
            Ok(changed) => {
                tracing::info!(line = index + 1, action = name, changed = ?changed, "replayed")
            }
            Err(e @ UiError::ComparisonFull { .. }) => {
                tracing::warn!(line = index + 1, action = name, error = %e, "action rejected")
            }
            Err(e) => return Err(e),
        }
        scheduler.sync(store.state(), std::time::Instant::now());
        replayed += 1;
    }

    theme.persist(store.state());
    tracing::info!(
        replayed,
        pending_dismissals = scheduler.pending(),
        "replay finished"
    );

    let json = serde_json::to_string_pretty(store.state()).map_err(UiError::Serialize)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// First positional argument that is not the value of `--config`.
fn actions_path(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            iter.next();
            continue;
        }
        return Some(PathBuf::from(arg));
    }
    None
}
