//! Application state management structures.
//!
//! This module contains the main application struct and the transient state
//! the canvas keeps between frames. Only presentation preferences are
//! serialized; the plane is rebuilt from the configuration on every launch.

use crate::assets::AssetCache;
use crate::config::CanvasConfig;
use crate::plane::PannableWrapPlane;
use serde::{Deserialize, Serialize};

/// Transient per-frame canvas state.
#[derive(Debug, Default)]
pub struct CanvasState {
    /// Whether a primary-button drag is currently panning the plane
    pub is_dragging: bool,
}

/// The main application structure containing the plane and UI state.
///
/// This struct implements the `eframe::App` trait and handles all user interface
/// rendering and interaction logic.
#[derive(Serialize)]
pub struct CanvasApp {
    /// Session configuration; persisted as a user preference
    pub config: CanvasConfig,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// The wrapping plane with its items and interaction state
    #[serde(skip)]
    pub plane: PannableWrapPlane,
    /// Textures for item sources
    #[serde(skip)]
    pub assets: AssetCache,
    /// Canvas interaction state
    #[serde(skip)]
    pub canvas: CanvasState,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl CanvasApp {
    /// Creates an app whose plane and asset source follow `config`.
    pub fn with_config(config: CanvasConfig) -> Self {
        let config = config.sanitized();
        let assets = AssetCache::new(config.asset_dir.clone());
        log::info!("Resolving item sources under {}", assets.dir().display());
        Self {
            plane: PannableWrapPlane::from_config(&config),
            assets,
            config,
            dark_mode: false,
            canvas: CanvasState::default(),
        }
    }

    /// Creates the app, restoring preferences saved by a previous session.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let restored = cc
            .storage
            .and_then(|storage| storage.get_string(super::APP_STATE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("Discarding saved app state: {err}");
                    None
                }
            });
        restored.unwrap_or_default()
    }

    /// Serializes the persisted preferences to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restores preferences from JSON and builds a fresh plane for them.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct Preferences {
            config: CanvasConfig,
            dark_mode: bool,
        }

        let prefs: Preferences = serde_json::from_str(json)?;
        Ok(Self {
            dark_mode: prefs.dark_mode,
            ..Self::with_config(prefs.config)
        })
    }
}
