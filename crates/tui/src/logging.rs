use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "coffee_rec=info,coffee_rec_api=info,coffee_rec_form=info";
const LOG_FILE: &str = "coffee-rec.log";

/// Logs go to a file; stdout belongs to the terminal UI.
pub fn init(log_dir: &Path) {
    if std::fs::create_dir_all(log_dir).is_err() {
        return;
    }

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
