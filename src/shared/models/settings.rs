use std::fs;

use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database_path: "tasks.redb".to_string(),
        }
    }
}

impl Settings {
    /// Read settings.json next to the binary. Missing or unreadable file
    /// falls back to defaults; a present-but-invalid file is a boot error.
    pub fn load() -> Settings {
        match fs::read_to_string(SETTINGS_FILENAME) {
            Ok(content) => serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Cannot parse {SETTINGS_FILENAME}: {e}")),
            Err(_) => {
                tracing::warn!("{SETTINGS_FILENAME} not found, using defaults");
                Settings::default()
            }
        }
    }
}
