//! Single-shot focus-ring contrast check.
//!
//! Resolves a theme from the environment (`FOCUSRING_THEME`,
//! `FOCUSRING_THEME_FALLBACK`), runs the contrast check once, and exits
//! non-zero if the focus indicator is not visible enough.

use std::process::ExitCode;

use focusring::check::run_check;
use focusring::error::CheckError;
use focusring_theme::config::ThemeConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<(), CheckError> {
    let config = ThemeConfig::from_env_or_default();
    let theme = config.resolve().map_err(CheckError::UnsupportedTheme)?;
    let report = run_check(theme.as_ref())?;
    log::info!("{report}");
    Ok(())
}
