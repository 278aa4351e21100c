//! Custom pattern resolution and parsing.
//!
//! Pattern files are JSON documents holding a vibration waveform as two
//! parallel arrays:
//!
//! ```json
//! { "timings_ms": [0, 30, 60, 30], "amplitudes": [0, 255, 0, 128] }
//! ```
//!
//! Each entry holds `amplitudes[i]` for `timings_ms[i]` milliseconds. The
//! loader is platform independent so patterns can be validated on desktop,
//! but only backends with waveform playback consume it.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::PatternConfig;
use crate::error::HapticsError;

const PATTERN_EXTENSION: &str = "json";

/// Waveform loaded from a pattern file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HapticPattern {
    pub timings_ms: Vec<u64>,
    pub amplitudes: Vec<u8>,
}

impl HapticPattern {
    /// Sum of all segment durations, saturating at `u64::MAX`.
    pub fn total_duration_ms(&self) -> u64 {
        self.timings_ms
            .iter()
            .fold(0u64, |acc, &t| acc.saturating_add(t))
    }

    pub fn segment_count(&self) -> usize {
        self.timings_ms.len()
    }

    fn validate(&self, max_duration_ms: u64) -> Result<(), String> {
        if self.timings_ms.is_empty() {
            return Err("pattern has no segments".to_string());
        }
        if self.timings_ms.len() != self.amplitudes.len() {
            return Err(format!(
                "timings_ms has {} entries but amplitudes has {}",
                self.timings_ms.len(),
                self.amplitudes.len()
            ));
        }
        let total = self
            .timings_ms
            .iter()
            .try_fold(0u64, |acc, &t| acc.checked_add(t))
            .ok_or_else(|| "pattern duration overflows".to_string())?;
        if total == 0 {
            return Err("pattern has zero total duration".to_string());
        }
        if total > max_duration_ms {
            return Err(format!(
                "pattern lasts {}ms, limit is {}ms",
                total, max_duration_ms
            ));
        }
        Ok(())
    }
}

/// Resolves pattern identifiers to files and parses them.
#[derive(Debug, Clone)]
pub struct PatternLoader {
    search_dirs: Vec<PathBuf>,
    max_duration_ms: u64,
}

impl PatternLoader {
    pub fn new(config: &PatternConfig) -> Self {
        Self {
            search_dirs: config.search_dirs.clone(),
            max_duration_ms: config.max_duration_ms,
        }
    }

    /// Map an identifier to an existing pattern file.
    ///
    /// Absolute paths are used as-is. Relative identifiers are looked up in
    /// each search directory in order; a missing extension defaults to
    /// `.json`.
    pub fn resolve(&self, identifier: &str) -> Result<PathBuf, HapticsError> {
        let not_found = || HapticsError::PatternNotFound {
            identifier: identifier.to_string(),
        };

        if identifier.trim().is_empty() {
            return Err(not_found());
        }

        let mut relative = PathBuf::from(identifier);
        if relative.extension().is_none() {
            relative.set_extension(PATTERN_EXTENSION);
        }

        if relative.is_absolute() {
            return if relative.is_file() {
                Ok(relative)
            } else {
                Err(not_found())
            };
        }

        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(HapticsError::PatternInvalid {
                identifier: identifier.to_string(),
                reason: "identifier escapes the pattern directories".to_string(),
            });
        }

        self.search_dirs
            .iter()
            .map(|dir| dir.join(&relative))
            .find(|candidate| candidate.is_file())
            .ok_or_else(not_found)
    }

    /// Resolve, read and validate a pattern.
    pub fn load(&self, identifier: &str) -> Result<HapticPattern, HapticsError> {
        let path = self.resolve(identifier)?;
        self.load_path(identifier, &path)
    }

    fn load_path(&self, identifier: &str, path: &Path) -> Result<HapticPattern, HapticsError> {
        let contents = fs::read_to_string(path).map_err(|err| HapticsError::PatternInvalid {
            identifier: identifier.to_string(),
            reason: err.to_string(),
        })?;

        let pattern: HapticPattern =
            serde_json::from_str(&contents).map_err(|err| HapticsError::PatternInvalid {
                identifier: identifier.to_string(),
                reason: err.to_string(),
            })?;

        pattern
            .validate(self.max_duration_ms)
            .map_err(|reason| HapticsError::PatternInvalid {
                identifier: identifier.to_string(),
                reason,
            })?;

        log::debug!(
            "[Haptics] Loaded pattern '{}' from {:?}: {} segments, {}ms",
            identifier,
            path,
            pattern.segment_count(),
            pattern.total_duration_ms()
        );

        Ok(pattern)
    }
}
