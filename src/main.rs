mod ui;

use gettextrs::LocaleCategory;
use gtk4::glib;
use memory_match::config::{self, AppConfig};
use tracing_subscriber::EnvFilter;

const GETTEXT_PACKAGE: &str = "memory-match";
const LOCALE_DIR: &str = match option_env!("LOCALEDIR") {
    Some(dir) => dir,
    None => "/usr/share/locale",
};

fn main() -> glib::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    init_i18n();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = ?err, "falling back to default configuration");
            AppConfig::default()
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting memory-match");
    ui::app::run(config)
}

fn init_i18n() {
    if gettextrs::setlocale(LocaleCategory::LcAll, "").is_none() {
        tracing::debug!("locale not supported, using untranslated strings");
    }
    if let Err(err) = gettextrs::bindtextdomain(GETTEXT_PACKAGE, LOCALE_DIR) {
        tracing::warn!(error = %err, "failed to bind text domain");
    }
    if let Err(err) = gettextrs::bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8") {
        tracing::warn!(error = %err, "failed to set text domain codeset");
    }
    if let Err(err) = gettextrs::textdomain(GETTEXT_PACKAGE) {
        tracing::warn!(error = %err, "failed to select text domain");
    }
}
