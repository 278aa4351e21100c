// HapticsContext: owner of the haptics service state
// Holds the lifecycle state and the single active backend behind one lock

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, RwLock};

use crate::api::FeedbackKind;
use crate::backend::{self, BackendFactory, HapticBackend};
use crate::config::HapticsConfig;
use crate::error::{log_haptics_error, HapticsError};

/// HapticsContext: lifecycle state machine for haptic feedback
///
/// States are Uninitialized (`backend == None`) and Initialized
/// (`backend == Some`), so a backend exists exactly when the service is
/// initialized. Every operation has a safe default for the Uninitialized
/// state and none of them fail: internal errors are logged and collapsed
/// into that default.
pub struct HapticsContext {
    backend: Mutex<Option<Box<dyn HapticBackend>>>,
    config: RwLock<HapticsConfig>,
    factory: BackendFactory,
}

impl HapticsContext {
    /// Create a context using the platform configuration and backend
    pub fn new() -> Self {
        Self::with_config(HapticsConfig::load_platform())
    }

    /// Create a context for the platform backend with explicit configuration
    pub fn with_config(config: HapticsConfig) -> Self {
        Self::with_factory(config, Box::new(backend::platform_backend))
    }

    /// Create a context with a custom backend constructor
    ///
    /// The factory runs on the first successful `init()` only.
    pub fn with_factory(config: HapticsConfig, factory: BackendFactory) -> Self {
        Self {
            backend: Mutex::new(None),
            config: RwLock::new(config),
            factory,
        }
    }

    /// Snapshot of the configuration the next backend will be built with
    pub fn config(&self) -> HapticsConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the directories searched for custom pattern identifiers
    ///
    /// Takes effect on the next `init()` that constructs a backend; an
    /// already initialized backend keeps its loader until `dispose()`.
    pub fn set_pattern_search_dirs(&self, dirs: Vec<PathBuf>) {
        log::info!("[Haptics] Pattern search directories set to {:?}", dirs);
        self.config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .patterns
            .search_dirs = dirs;
    }

    /// Acquire the backend lock, recovering from poisoning
    ///
    /// A panic while the lock was held leaves the `Option` itself intact, so
    /// the poison flag is logged as `HapticsError::LockPoisoned` and cleared.
    /// The backend stays owned and later calls (including `init()`) behave
    /// as if the panic never happened.
    fn lock_backend(&self, operation: &str) -> MutexGuard<'_, Option<Box<dyn HapticBackend>>> {
        self.backend.lock().unwrap_or_else(|poisoned| {
            let err = HapticsError::LockPoisoned {
                component: "haptics_backend".to_string(),
            };
            log_haptics_error(&err, operation);
            self.backend.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Run `f` against the active backend, or return `default` when the
    /// service is not initialized
    fn with_backend<T>(
        &self,
        operation: &str,
        default: T,
        f: impl FnOnce(&dyn HapticBackend) -> T,
    ) -> T {
        match self.lock_backend(operation).as_deref() {
            Some(backend) => f(backend),
            None => default,
        }
    }

    /// Initialize the haptics service
    ///
    /// Idempotent: a second call returns `true` without rebuilding the
    /// backend. Returns `false` if the backend cannot be constructed, in
    /// which case the service stays uninitialized.
    pub fn init(&self) -> bool {
        let mut guard = self.lock_backend("init");

        if guard.is_some() {
            return true;
        }

        match (self.factory)(&self.config()) {
            Ok(backend) => {
                log::info!(
                    "[Haptics] Initialized with '{}' backend (supported: {})",
                    backend.name(),
                    backend.is_supported()
                );
                *guard = Some(backend);
                true
            }
            Err(err) => {
                log_haptics_error(&err, "init");
                false
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.with_backend("is_initialized", false, |_| true)
    }

    /// Whether the active backend can produce feedback on this device
    ///
    /// Always `false` before `init()`.
    pub fn is_supported(&self) -> bool {
        self.with_backend("is_supported", false, |backend| backend.is_supported())
    }

    /// Name of the active backend, `None` when not initialized
    pub fn backend_name(&self) -> Option<&'static str> {
        self.with_backend("backend_name", None, |backend| Some(backend.name()))
    }

    /// Forward a feedback request to the backend
    ///
    /// No-op before `init()`. Does not consult `is_supported()`; the
    /// backend degrades unsupported requests itself.
    pub fn trigger(&self, kind: FeedbackKind) {
        self.with_backend(kind.as_str(), (), |backend| backend.trigger(kind));
    }

    pub fn trigger_light(&self) {
        self.with_backend("trigger_light", (), |backend| backend.trigger_light());
    }

    pub fn trigger_medium(&self) {
        self.with_backend("trigger_medium", (), |backend| backend.trigger_medium());
    }

    pub fn trigger_heavy(&self) {
        self.with_backend("trigger_heavy", (), |backend| backend.trigger_heavy());
    }

    pub fn trigger_selection(&self) {
        self.with_backend("trigger_selection", (), |backend| backend.trigger_selection());
    }

    /// Play a named custom pattern
    ///
    /// Returns `false` before `init()`, otherwise whatever the backend
    /// reports. The identifier is passed through unmodified. Absolute paths
    /// are read directly; relative identifiers are looked up in the pattern
    /// search directories (on Android, relative directories live under the
    /// app files directory).
    pub fn trigger_custom(&self, pattern: &str) -> bool {
        self.with_backend("trigger_custom", false, |backend| {
            backend.trigger_custom(pattern)
        })
    }

    /// Release the backend and return to the uninitialized state
    ///
    /// Safe to call any number of times.
    pub fn dispose(&self) {
        let mut guard = self.lock_backend("dispose");
        if let Some(backend) = guard.take() {
            log::info!("[Haptics] Disposed '{}' backend", backend.name());
        }
    }
}

impl Default for HapticsContext {
    fn default() -> Self {
        Self::new()
    }
}
