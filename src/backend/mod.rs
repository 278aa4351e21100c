//! Platform backends behind the haptics service.
//!
//! Exactly one backend is compiled into a build. The service only ever
//! holds a `Box<dyn HapticBackend>` returned by [`platform_backend`], so it
//! never learns which variant it is talking to.

use crate::api::FeedbackKind;
use crate::config::HapticsConfig;
use crate::error::HapticsError;

pub mod pattern;

pub use pattern::{HapticPattern, PatternLoader};

/// Capability contract implemented by every platform backend.
///
/// None of these operations may fail or panic. A device without a vibrator
/// reports `false` from [`is_supported`](HapticBackend::is_supported) and
/// turns every trigger into a no-op.
pub trait HapticBackend: Send {
    /// Short identifier of the backend variant, for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this device (not just this platform) can vibrate.
    fn is_supported(&self) -> bool;

    fn trigger_light(&self);
    fn trigger_medium(&self);
    fn trigger_heavy(&self);
    fn trigger_selection(&self);

    /// Load and start the named pattern.
    ///
    /// Returns `true` once playback has been initiated, `false` if the
    /// pattern cannot be found, parsed or started.
    fn trigger_custom(&self, pattern: &str) -> bool;

    fn trigger(&self, kind: FeedbackKind) {
        match kind {
            FeedbackKind::Light => self.trigger_light(),
            FeedbackKind::Medium => self.trigger_medium(),
            FeedbackKind::Heavy => self.trigger_heavy(),
            FeedbackKind::Selection => self.trigger_selection(),
        }
    }
}

/// Constructor signature used by the service to build its backend.
pub type BackendFactory =
    Box<dyn Fn(&HapticsConfig) -> Result<Box<dyn HapticBackend>, HapticsError> + Send + Sync>;

cfg_if::cfg_if! {
    if #[cfg(target_os = "android")] {
        mod android;
        pub use android::{install_android_context, AndroidVibratorBackend};

        /// Name of the backend compiled into this build.
        pub const PLATFORM_BACKEND: &str = AndroidVibratorBackend::NAME;

        /// Build the backend selected for this target.
        pub fn platform_backend(
            config: &HapticsConfig,
        ) -> Result<Box<dyn HapticBackend>, HapticsError> {
            Ok(Box::new(AndroidVibratorBackend::new(config.clone())?))
        }
    } else {
        mod null;
        pub use null::NullBackend;

        /// Name of the backend compiled into this build.
        pub const PLATFORM_BACKEND: &str = NullBackend::NAME;

        /// Build the backend selected for this target.
        pub fn platform_backend(
            _config: &HapticsConfig,
        ) -> Result<Box<dyn HapticBackend>, HapticsError> {
            Ok(Box::new(NullBackend::new()))
        }
    }
}
