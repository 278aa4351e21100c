//! Integration tests for the haptics service
//!
//! These tests validate the public lifecycle contract across the crate:
//! - Safe defaults before `init()` and after `dispose()`
//! - Idempotent `init()` and `dispose()`
//! - Delegation to the platform backend
//!
//! Note: These tests exercise the desktop build, where the null backend is
//! compiled in.

use std::sync::Mutex;

use haptic_feedback::api;
use haptic_feedback::api::FeedbackKind;
use haptic_feedback::backend::HapticBackend;
use haptic_feedback::config::HapticsConfig;
use haptic_feedback::context::HapticsContext;
use haptic_feedback::error::HapticsError;

/// Serializes tests that touch the process-wide service
static GLOBAL_SERVICE: Mutex<()> = Mutex::new(());

fn lock_global() -> std::sync::MutexGuard<'static, ()> {
    GLOBAL_SERVICE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scenario A: fresh service reports uninitialized
#[test]
fn test_fresh_context_is_uninitialized() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    assert!(!context.is_initialized());
}

/// Calls before init never fail and return their defaults
#[test]
fn test_calls_before_init_are_safe() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    for kind in FeedbackKind::ALL {
        context.trigger(kind);
    }
    context.trigger_light();
    context.trigger_medium();
    context.trigger_heavy();
    context.trigger_selection();
    assert!(!context.is_supported());
    assert!(!context.trigger_custom("missing.pattern"));
    assert!(!context.is_initialized());
}

/// Scenario B: init succeeds and is observable
#[test]
fn test_init_marks_initialized() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    assert!(context.init());
    assert!(context.is_initialized());
}

/// Calling init twice is indistinguishable from calling it once
#[test]
fn test_double_init_is_idempotent() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    assert!(context.init());
    let supported = context.is_supported();
    let backend = context.backend_name();

    assert!(context.init());
    assert!(context.is_initialized());
    assert_eq!(context.is_supported(), supported);
    assert_eq!(context.backend_name(), backend);
}

/// Scenario C: backend without hardware reports unsupported, triggers are no-ops
#[cfg(not(target_os = "android"))]
#[test]
fn test_unsupported_backend_triggers_are_noops() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    assert!(context.init());
    assert!(!context.is_supported());
    context.trigger_heavy();
    assert!(context.is_initialized());
}

/// Scenario D: missing custom pattern reports failure
#[test]
fn test_missing_custom_pattern_returns_false() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    assert!(context.init());
    assert!(!context.trigger_custom("missing.pattern"));
}

/// Scenario E: dispose twice is harmless
#[test]
fn test_double_dispose() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    context.init();
    context.dispose();
    assert!(!context.is_initialized());
    context.dispose();
    assert!(!context.is_initialized());
}

/// init(); dispose(); is observably the same as never calling init()
#[test]
fn test_init_dispose_round_trip() {
    let fresh = HapticsContext::with_config(HapticsConfig::default());
    let cycled = HapticsContext::with_config(HapticsConfig::default());
    cycled.init();
    cycled.dispose();

    assert_eq!(fresh.is_initialized(), cycled.is_initialized());
    assert_eq!(fresh.is_supported(), cycled.is_supported());
    assert_eq!(fresh.backend_name(), cycled.backend_name());
    assert_eq!(
        fresh.trigger_custom("missing.pattern"),
        cycled.trigger_custom("missing.pattern")
    );
}

/// isInitialized tracks the most recent init/dispose across a sequence
#[test]
fn test_state_follows_call_sequence() {
    let context = HapticsContext::with_config(HapticsConfig::default());
    let steps = [true, true, false, true, false, false, true];
    for init in steps {
        if init {
            assert!(context.init());
        } else {
            context.dispose();
        }
        assert_eq!(context.is_initialized(), init);
    }
}

/// Backend whose heavy trigger panics while the service lock is held
struct PanickingBackend;

impl HapticBackend for PanickingBackend {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn trigger_light(&self) {}

    fn trigger_medium(&self) {}

    fn trigger_heavy(&self) {
        panic!("vibrator driver crashed");
    }

    fn trigger_selection(&self) {}

    fn trigger_custom(&self, _pattern: &str) -> bool {
        true
    }
}

/// A panicking backend call neither drops the backend nor blocks re-init
#[test]
fn test_service_recovers_after_backend_panic() {
    let context = HapticsContext::with_factory(
        HapticsConfig::default(),
        Box::new(
            |_config: &HapticsConfig| -> Result<Box<dyn HapticBackend>, HapticsError> {
                Ok(Box::new(PanickingBackend))
            },
        ),
    );
    assert!(context.init());

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        context.trigger_heavy();
    }));
    assert!(result.is_err());

    assert!(context.is_initialized());
    assert!(context.is_supported());
    assert_eq!(context.backend_name(), Some("panicking"));

    context.dispose();
    assert!(!context.is_initialized());
    assert!(context.init());
    assert!(context.is_initialized());
    assert!(context.trigger_custom("any"));
}

/// The free-function API drives the process-wide service
#[cfg(not(target_os = "android"))]
#[test]
fn test_global_api_lifecycle() {
    let _guard = lock_global();

    api::dispose();
    assert!(!api::is_initialized());
    assert!(!api::is_supported());
    assert!(!api::trigger_custom("missing.pattern".to_string()));

    assert!(api::init());
    assert!(api::is_initialized());
    assert_eq!(api::backend_name().as_deref(), Some("null"));
    api::trigger_light();
    api::trigger_medium();
    api::trigger_heavy();
    api::trigger_selection();
    api::trigger(FeedbackKind::Selection);
    assert!(!api::trigger_custom("missing.pattern".to_string()));

    api::dispose();
    api::dispose();
    assert!(!api::is_initialized());
}

/// The global service can be shared across threads
#[cfg(not(target_os = "android"))]
#[test]
fn test_global_api_from_multiple_threads() {
    let _guard = lock_global();

    assert!(api::init());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                for kind in FeedbackKind::ALL {
                    api::trigger(kind);
                }
                api::is_initialized()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("trigger thread panicked"));
    }
    api::dispose();
    assert!(!api::is_initialized());
}
