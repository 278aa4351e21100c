// Haptics error types and constants

use crate::error::ErrorCode;
use flutter_rust_bridge::frb;
use log::error;
use std::fmt;

/// Haptics error code constants exposed to Dart via FFI
///
/// These errors never cross the public trigger API (which degrades to
/// `false`/no-op), but the codes are shared with Dart so host logs and
/// diagnostics speak the same numbers.
///
/// Error code range: 3001-3008
#[frb(unignore)]
pub struct HapticsErrorCodes {}

#[frb]
impl HapticsErrorCodes {
    /// Platform backend could not be constructed
    pub const BACKEND_INIT_FAILED: i32 = 3001;

    /// Android context was not initialized before the backend was created
    pub const CONTEXT_NOT_INITIALIZED: i32 = 3002;

    /// Mutex guarding the haptics service was poisoned
    pub const LOCK_POISONED: i32 = 3003;

    /// A JNI call into the Android framework failed
    pub const JNI_CALL_FAILED: i32 = 3004;

    /// Custom pattern resource could not be found
    pub const PATTERN_NOT_FOUND: i32 = 3005;

    /// Custom pattern resource could not be parsed or validated
    pub const PATTERN_INVALID: i32 = 3006;

    /// Vibration playback could not be started
    pub const PLAYBACK_FAILED: i32 = 3007;

    /// Device has no usable vibrator
    pub const UNSUPPORTED: i32 = 3008;

    /// Get BACKEND_INIT_FAILED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn backend_init_failed() -> i32 {
        Self::BACKEND_INIT_FAILED
    }

    /// Get CONTEXT_NOT_INITIALIZED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn context_not_initialized() -> i32 {
        Self::CONTEXT_NOT_INITIALIZED
    }

    /// Get LOCK_POISONED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn lock_poisoned() -> i32 {
        Self::LOCK_POISONED
    }

    /// Get JNI_CALL_FAILED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn jni_call_failed() -> i32 {
        Self::JNI_CALL_FAILED
    }

    /// Get PATTERN_NOT_FOUND error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn pattern_not_found() -> i32 {
        Self::PATTERN_NOT_FOUND
    }

    /// Get PATTERN_INVALID error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn pattern_invalid() -> i32 {
        Self::PATTERN_INVALID
    }

    /// Get PLAYBACK_FAILED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn playback_failed() -> i32 {
        Self::PLAYBACK_FAILED
    }

    /// Get UNSUPPORTED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn unsupported() -> i32 {
        Self::UNSUPPORTED
    }
}

/// Log a haptics error with structured context
///
/// Every internal failure passes through here before it is collapsed into
/// the `false`/no-op result the public API reports.
pub fn log_haptics_error(err: &HapticsError, context: &str) {
    error!(
        "Haptics error in {}: code={}, component=HapticFeedback, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Haptics-related errors
///
/// Error code range: 3001-3008
#[derive(Debug, Clone, PartialEq)]
pub enum HapticsError {
    /// Platform backend could not be constructed
    BackendInitFailed { reason: String },

    /// Android context was not initialized before backend construction
    ContextNotInitialized,

    /// Mutex guarding the service was poisoned
    LockPoisoned { component: String },

    /// JNI call failed
    JniCallFailed { method: String, reason: String },

    /// Custom pattern resource could not be resolved
    PatternNotFound { identifier: String },

    /// Custom pattern resource was found but is not a valid pattern
    PatternInvalid { identifier: String, reason: String },

    /// Playback could not be started
    PlaybackFailed { reason: String },

    /// Device has no usable vibrator
    Unsupported,
}

impl ErrorCode for HapticsError {
    fn code(&self) -> i32 {
        match self {
            HapticsError::BackendInitFailed { .. } => HapticsErrorCodes::BACKEND_INIT_FAILED,
            HapticsError::ContextNotInitialized => HapticsErrorCodes::CONTEXT_NOT_INITIALIZED,
            HapticsError::LockPoisoned { .. } => HapticsErrorCodes::LOCK_POISONED,
            HapticsError::JniCallFailed { .. } => HapticsErrorCodes::JNI_CALL_FAILED,
            HapticsError::PatternNotFound { .. } => HapticsErrorCodes::PATTERN_NOT_FOUND,
            HapticsError::PatternInvalid { .. } => HapticsErrorCodes::PATTERN_INVALID,
            HapticsError::PlaybackFailed { .. } => HapticsErrorCodes::PLAYBACK_FAILED,
            HapticsError::Unsupported => HapticsErrorCodes::UNSUPPORTED,
        }
    }

    fn message(&self) -> String {
        match self {
            HapticsError::BackendInitFailed { reason } => {
                format!("Haptic backend initialization failed: {}", reason)
            }
            HapticsError::ContextNotInitialized => {
                "Android context not initialized. Call HapticFeedback.initAndroidContext() first."
                    .to_string()
            }
            HapticsError::LockPoisoned { component } => {
                format!("Lock poisoned on {}", component)
            }
            HapticsError::JniCallFailed { method, reason } => {
                format!("JNI call {} failed: {}", method, reason)
            }
            HapticsError::PatternNotFound { identifier } => {
                format!("Haptic pattern not found: {}", identifier)
            }
            HapticsError::PatternInvalid { identifier, reason } => {
                format!("Haptic pattern {} is invalid: {}", identifier, reason)
            }
            HapticsError::PlaybackFailed { reason } => {
                format!("Haptic playback failed: {}", reason)
            }
            HapticsError::Unsupported => "Device has no vibrator".to_string(),
        }
    }
}

impl fmt::Display for HapticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HapticsError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for HapticsError {}

impl From<std::io::Error> for HapticsError {
    fn from(err: std::io::Error) -> Self {
        HapticsError::PlaybackFailed {
            reason: err.to_string(),
        }
    }
}

#[cfg(target_os = "android")]
impl From<jni::errors::Error> for HapticsError {
    fn from(err: jni::errors::Error) -> Self {
        HapticsError::JniCallFailed {
            method: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}
