//! Configuration for haptic backends
//!
//! Backends read their tuning from a JSON file so intensities and pattern
//! locations can be adjusted without recompiling. A missing or malformed
//! file is never fatal: the defaults below are used instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::FeedbackKind;

/// Complete haptics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticsConfig {
    pub intensities: IntensityConfig,
    pub patterns: PatternConfig,
}

/// One-shot vibration used for a named feedback kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneShot {
    /// Vibration length in milliseconds
    pub duration_ms: u64,
    /// Vibration strength (1-255); ignored on devices without amplitude control
    pub amplitude: u8,
}

/// Per-kind one-shot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityConfig {
    pub light: OneShot,
    pub medium: OneShot,
    pub heavy: OneShot,
    pub selection: OneShot,
}

impl IntensityConfig {
    pub fn for_kind(&self, kind: FeedbackKind) -> OneShot {
        match kind {
            FeedbackKind::Light => self.light,
            FeedbackKind::Medium => self.medium,
            FeedbackKind::Heavy => self.heavy,
            FeedbackKind::Selection => self.selection,
        }
    }
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            light: OneShot {
                duration_ms: 20,
                amplitude: 64,
            },
            medium: OneShot {
                duration_ms: 40,
                amplitude: 128,
            },
            heavy: OneShot {
                duration_ms: 70,
                amplitude: 255,
            },
            // Selection ticks are shorter than light taps so list scrolling
            // does not feel like a stream of buzzes
            selection: OneShot {
                duration_ms: 10,
                amplitude: 96,
            },
        }
    }
}

/// Custom pattern lookup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Directories searched, in order, for relative pattern identifiers
    pub search_dirs: Vec<PathBuf>,
    /// Patterns longer than this are rejected
    pub max_duration_ms: u64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            search_dirs: vec![PathBuf::from("assets/haptics")],
            max_duration_ms: 10_000,
        }
    }
}

impl PatternConfig {
    /// Resolve relative search directories against `root`
    ///
    /// Absolute directories are kept as they are. On Android `root` is the
    /// app files directory, since the process working directory is `/`.
    pub fn anchored_at(&self, root: &Path) -> Self {
        Self {
            search_dirs: self
                .search_dirs
                .iter()
                .map(|dir| {
                    if dir.is_absolute() {
                        dir.clone()
                    } else {
                        root.join(dir)
                    }
                })
                .collect(),
            max_duration_ms: self.max_duration_ms,
        }
    }
}

impl HapticsConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or the defaults if the file cannot be read
    /// or parsed. Fields missing from the file take their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded haptics configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration on Android
    ///
    /// Bundled assets live behind the Android AssetManager, which this crate
    /// does not read; the defaults are used.
    #[cfg(target_os = "android")]
    pub fn load_android() -> Self {
        log::info!("[Config] Using default haptics configuration on Android");
        Self::default()
    }

    /// Load configuration for non-Android platforms
    #[cfg(not(target_os = "android"))]
    pub fn load() -> Self {
        Self::load_from_file("assets/haptics_config.json")
    }

    /// Load configuration the way the current platform expects
    pub fn load_platform() -> Self {
        #[cfg(target_os = "android")]
        {
            Self::load_android()
        }

        #[cfg(not(target_os = "android"))]
        {
            Self::load()
        }
    }
}
