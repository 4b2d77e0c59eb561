//! Game settings and world configuration
//!
//! Persisted in LocalStorage on the web; read from a JSON file natively.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{WORLD_GRAVITY, WORLD_HEIGHT, WORLD_WIDTH};

/// Environment variable naming a native settings file
pub const SETTINGS_ENV_VAR: &str = "STAR_HOP_SETTINGS";

/// Settings load/parse failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("world gravity must be finite, got {0}")]
    Gravity(f32),
}

/// Physics world tuning.
///
/// The level layout is fixed at `WORLD_WIDTH` x `WORLD_HEIGHT`, so only
/// gravity is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Downward gravity applied to every body that allows it
    pub gravity_y: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_y: WORLD_GRAVITY,
        }
    }
}

impl WorldConfig {
    /// Horizontal midpoint, splits the world into the two bomb spawn halves
    #[inline]
    pub fn midpoint_x(&self) -> f32 {
        WORLD_WIDTH / 2.0
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)
    }

    #[inline]
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, self.gravity_y)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics world configuration
    pub world: WorldConfig,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
    /// Draw physics body outlines
    pub debug_bodies: bool,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "star_hop_settings";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        if !settings.world.gravity_y.is_finite() {
            return Err(SettingsError::Gravity(settings.world.gravity_y));
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `STAR_HOP_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from_path(std::path::Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}
