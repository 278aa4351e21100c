use super::HapticBackend;

/// Backend for platforms without any haptics subsystem.
///
/// Reports no support, ignores every trigger and never plays custom
/// patterns. This is the normal backend on desktop targets, not an error
/// state.
#[derive(Debug, Default)]
pub struct NullBackend {
    _unit: (),
}

impl NullBackend {
    pub const NAME: &'static str = "null";

    pub fn new() -> Self {
        Self { _unit: () }
    }
}

impl HapticBackend for NullBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn trigger_light(&self) {}

    fn trigger_medium(&self) {}

    fn trigger_heavy(&self) {}

    fn trigger_selection(&self) {}

    fn trigger_custom(&self, pattern: &str) -> bool {
        log::debug!("[Haptics] Ignoring custom pattern '{}' on null backend", pattern);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FeedbackKind;

    #[test]
    fn test_null_backend_reports_unsupported() {
        let backend = NullBackend::new();
        assert!(!backend.is_supported());
        assert_eq!(backend.name(), "null");
    }

    #[test]
    fn test_null_backend_triggers_are_noops() {
        let backend = NullBackend::new();
        for kind in FeedbackKind::ALL {
            backend.trigger(kind);
        }
        backend.trigger_heavy();
        assert!(!backend.is_supported());
    }

    #[test]
    fn test_null_backend_never_plays_custom_patterns() {
        let backend = NullBackend::new();
        assert!(!backend.trigger_custom("missing.pattern"));
        assert!(!backend.trigger_custom(""));
    }
}
