// Public API for flutter_rust_bridge integration
// This module provides the process-wide haptics service as synchronous FFI functions

#![allow(dead_code)] // FFI functions are called from Dart, not detected by Rust analyzer

use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::context::HapticsContext;

mod types;

pub use types::FeedbackKind;

// Re-export error code constants for FFI exposure
pub use crate::error::HapticsErrorCodes;

/// Global HapticsContext instance - the process-wide haptics service
///
/// Built lazily on first access with the platform configuration. Building
/// the context does not initialize the backend; the host must call
/// [`init`] once during startup and [`dispose`] once during shutdown.
static HAPTICS: Lazy<HapticsContext> = Lazy::new(HapticsContext::new);

/// Get the version of the haptics core
#[flutter_rust_bridge::frb(sync)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initialize the haptics service
///
/// Constructs the backend compiled into this build. Calling it again while
/// initialized returns `true` without rebuilding anything.
///
/// # Returns
/// * `true` - Service is initialized
/// * `false` - Backend construction failed; the service stays uninitialized
#[flutter_rust_bridge::frb(sync)]
pub fn init() -> bool {
    HAPTICS.init()
}

/// Whether `init()` has succeeded and `dispose()` has not been called since
#[flutter_rust_bridge::frb(sync)]
pub fn is_initialized() -> bool {
    HAPTICS.is_initialized()
}

/// Whether this device can produce haptic feedback
///
/// Always `false` before `init()`.
#[flutter_rust_bridge::frb(sync)]
pub fn is_supported() -> bool {
    HAPTICS.is_supported()
}

/// Name of the active backend (`"null"`, `"android-vibrator"`), or `None`
/// before `init()`
#[flutter_rust_bridge::frb(sync)]
pub fn backend_name() -> Option<String> {
    HAPTICS.backend_name().map(str::to_string)
}

/// Trigger light haptic feedback
#[flutter_rust_bridge::frb(sync)]
pub fn trigger_light() {
    HAPTICS.trigger_light()
}

/// Trigger medium haptic feedback
#[flutter_rust_bridge::frb(sync)]
pub fn trigger_medium() {
    HAPTICS.trigger_medium()
}

/// Trigger heavy haptic feedback
#[flutter_rust_bridge::frb(sync)]
pub fn trigger_heavy() {
    HAPTICS.trigger_heavy()
}

/// Trigger selection feedback
#[flutter_rust_bridge::frb(sync)]
pub fn trigger_selection() {
    HAPTICS.trigger_selection()
}

/// Trigger feedback of the given kind
///
/// Same contract as the named trigger functions: fire-and-forget, no-op
/// before `init()` or on devices without a vibrator.
#[flutter_rust_bridge::frb(sync)]
pub fn trigger(kind: FeedbackKind) {
    HAPTICS.trigger(kind)
}

/// Play a custom haptic pattern by identifier
///
/// `pattern` is either an absolute path to a pattern file or a name looked
/// up (with `.json` appended when it has no extension) in the pattern search
/// directories. On Android, relative search directories are resolved under
/// the app files directory; use [`set_pattern_search_dirs`] to point at
/// patterns stored elsewhere.
///
/// # Returns
/// * `true` - Playback was started
/// * `false` - Not initialized, no pattern support, or the pattern could
///   not be found, parsed or played
#[flutter_rust_bridge::frb(sync)]
pub fn trigger_custom(pattern: String) -> bool {
    HAPTICS.trigger_custom(&pattern)
}

/// Replace the directories searched for custom pattern names
///
/// Applies to the next `init()`; call it before `init()` or after
/// `dispose()`.
#[flutter_rust_bridge::frb(sync)]
pub fn set_pattern_search_dirs(dirs: Vec<String>) {
    HAPTICS.set_pattern_search_dirs(dirs.into_iter().map(PathBuf::from).collect())
}

/// Release the backend and return to the uninitialized state
///
/// Safe to call multiple times.
#[flutter_rust_bridge::frb(sync)]
pub fn dispose() {
    HAPTICS.dispose()
}
