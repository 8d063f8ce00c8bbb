use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_andante_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ANDANTE_CONFIG_PATH", "/tmp/andante-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/andante-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("andante")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("andante")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_state_dirs() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/state/andante/andante.log")
    );

    let _g3 = EnvGuard::set("XDG_STATE_HOME", "/tmp/state");
    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/state/andante/andante.log")
    );
}

#[test]
fn defaults_match_the_stock_player() {
    let s = Settings::default();
    assert_eq!(s.controls.seek_step_ms, 10_000);
    assert_eq!(s.ui.refresh_interval_ms, 1000);
    assert_eq!(s.volume.max, 100);
    assert_eq!(s.catalog.tracks.len(), 2);
    assert_eq!(s.catalog.tracks[0].name, "Song 1");
    assert_eq!(s.catalog.tracks[1].name, "Song 2");
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_zero_intervals() {
    let mut s = Settings::default();
    s.ui.refresh_interval_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.seek_step_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.volume.max = 0;
    assert!(s.validate().is_err());
}

#[test]
fn catalog_tracks_parse_from_toml_tables() {
    let s: Settings = toml::from_str(
        r#"
[[catalog.tracks]]
name = "Intro"
path = "/music/intro.ogg"

[[catalog.tracks]]
name = "Outro"
path = "outro.wav"
"#,
    )
    .unwrap();

    assert_eq!(
        s.catalog.tracks,
        vec![
            TrackEntry {
                name: "Intro".into(),
                path: PathBuf::from("/music/intro.ogg"),
            },
            TrackEntry {
                name: "Outro".into(),
                path: PathBuf::from("outro.wav"),
            },
        ]
    );
    // Untouched sections keep their defaults.
    assert_eq!(s.controls.seek_step_ms, 10_000);
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
seek_step_ms = 5000
volume_step = 2

[ui]
header_text = "hello"
refresh_interval_ms = 250
show_durations = false

[volume]
enabled = false
sink = "alsa_output.pci"
max = 150

[catalog]
extensions = ["mp3"]
recursive = false
include_hidden = true
follow_links = false

[[catalog.tracks]]
name = "Only"
path = "/tmp/only.mp3"

[log]
level = "debug"
file = "/tmp/andante.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ANDANTE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ANDANTE__CONTROLS__SEEK_STEP_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.seek_step_ms, 5000);
    assert_eq!(s.controls.volume_step, 2);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.refresh_interval_ms, 250);
    assert!(!s.ui.show_durations);
    assert!(!s.volume.enabled);
    assert_eq!(s.volume.sink, "alsa_output.pci");
    assert_eq!(s.volume.max, 150);
    assert_eq!(s.catalog.extensions, vec!["mp3".to_string()]);
    assert!(!s.catalog.recursive);
    assert!(s.catalog.include_hidden);
    assert!(!s.catalog.follow_links);
    assert_eq!(s.catalog.tracks.len(), 1);
    assert_eq!(s.catalog.tracks[0].name, "Only");
    assert_eq!(s.log.level, "debug");
    assert_eq!(s.log.file, Some(PathBuf::from("/tmp/andante.log")));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
seek_step_ms = 5000
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ANDANTE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ANDANTE__CONTROLS__SEEK_STEP_MS", "15000");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.seek_step_ms, 15_000);
}
