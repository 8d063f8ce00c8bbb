use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Route `tracing` output to the log file; the terminal belongs to the UI.
///
/// `ANDANTE_LOG` overrides the configured level. When no file can be opened
/// logging stays off.
pub fn init(settings: &LogSettings) {
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        eprintln!("andante: no log file location, logging disabled");
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("andante: cannot create {}: {e}, logging disabled", parent.display());
            return;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("andante: cannot open {}: {e}, logging disabled", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_env("ANDANTE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
