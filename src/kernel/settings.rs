use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::vocabulary::Vocabulary;

const SETTINGS_DIR: &str = ".wordgrid";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

pub const DEFAULT_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_true")]
    pub search: bool,
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default = "default_delay_step_ms")]
    pub delay_step_ms: u64,
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            word_fg: Some("white".to_string()),
            idle_fg: Some("dark_gray".to_string()),
            match_fg: Some("yellow".to_string()),
            hover_fg: Some("cyan".to_string()),
            border: Some("dark_gray".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            search: true,
            animate: true,
            delay_step_ms: default_delay_step_ms(),
            uppercase: true,
            words: None,
            theme: ThemeSettings::default(),
        }
    }
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_true() -> bool {
    true
}

fn default_delay_step_ms() -> u64 {
    100
}

impl Settings {
    pub fn vocabulary(&self) -> Vocabulary {
        match &self.words {
            Some(words) => Vocabulary::new(words.iter().cloned()),
            None => Vocabulary::default(),
        }
    }

    pub fn delay_step(&self) -> Duration {
        Duration::from_millis(self.delay_step_ms)
    }

    /// Applies `--rows N`, `--words a,b,c`, `--no-search` and
    /// `--no-animate`. Unknown or malformed arguments are logged and skipped.
    pub fn apply_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--rows" => match args.next().map(|v| v.as_ref().parse::<usize>()) {
                    Some(Ok(rows)) if rows > 0 => self.rows = rows,
                    _ => tracing::warn!("--rows expects a positive integer"),
                },
                "--words" => match args.next() {
                    Some(list) => {
                        self.words = Some(
                            list.as_ref()
                                .split(',')
                                .map(|w| w.trim().to_string())
                                .filter(|w| !w.is_empty())
                                .collect(),
                        );
                    }
                    None => tracing::warn!("--words expects a comma separated list"),
                },
                "--no-search" => self.search = false,
                "--no-animate" => self.animate = false,
                other => tracing::warn!(arg = other, "ignoring unknown argument"),
            }
        }
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

/// Writes the default settings to `path` unless it already exists.
pub fn ensure_settings_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file");
            None
        }
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/settings.rs"]
mod tests;
