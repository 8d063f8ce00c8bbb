use crate::config;

/// Load settings, falling back to defaults.
///
/// Returns the reason for a fallback so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => {
                eprintln!("andante: invalid config, using defaults: {msg}");
                (config::Settings::default(), Some(msg))
            }
        },
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("andante: failed to load config, using defaults: {e}");
            (config::Settings::default(), Some(e.to_string()))
        }
    }
}
