//! Android backend driving the `Vibrator` system service over JNI.
//!
//! The JavaVM and application `Context` are handed over once through
//! `HapticFeedback.initAndroidContext(Context)` and kept for the life of the
//! process. Every JNI call runs inside its own local reference frame so
//! repeated triggers from a long-lived attached thread do not accumulate
//! local references.

use std::path::PathBuf;

use jni::objects::{GlobalRef, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};
use once_cell::sync::OnceCell;

use crate::api::FeedbackKind;
use crate::config::HapticsConfig;
use crate::error::{log_haptics_error, HapticsError};

use super::{HapticBackend, HapticPattern, PatternLoader};

const VIBRATOR_SERVICE: &str = "vibrator";
const VIBRATION_EFFECT_CLASS: &str = "android/os/VibrationEffect";

/// `VibrationEffect.DEFAULT_AMPLITUDE`
const DEFAULT_AMPLITUDE: i32 = -1;

/// `repeat` argument of `createWaveform` meaning "play once"
const NO_REPEAT: i32 = -1;

const LOCAL_FRAME_CAPACITY: i32 = 16;

/// JavaVM and application Context received from the host app
struct AndroidHandles {
    vm: JavaVM,
    context: GlobalRef,
}

static ANDROID_HANDLES: OnceCell<AndroidHandles> = OnceCell::new();

/// Store the JavaVM and application `Context` for backend construction.
///
/// The first successful call wins; later calls are no-ops and return `Ok`.
pub fn install_android_context(env: &JNIEnv, context: &JObject) -> Result<(), HapticsError> {
    if ANDROID_HANDLES.get().is_some() {
        log::info!("[AndroidHaptics] Android context already initialized");
        return Ok(());
    }

    let vm = env
        .get_java_vm()
        .map_err(|err| jni_error("GetJavaVM", err))?;
    let context = env
        .new_global_ref(context)
        .map_err(|err| jni_error("NewGlobalRef", err))?;

    if ANDROID_HANDLES.set(AndroidHandles { vm, context }).is_ok() {
        log::info!("[AndroidHaptics] Android context initialized");
    }
    Ok(())
}

pub struct AndroidVibratorBackend {
    vm: &'static JavaVM,
    vibrator: GlobalRef,
    has_vibrator: bool,
    has_amplitude_control: bool,
    config: HapticsConfig,
    patterns: PatternLoader,
}

impl AndroidVibratorBackend {
    pub const NAME: &'static str = "android-vibrator";

    /// Look up the `Vibrator` service and cache its capabilities.
    ///
    /// Relative pattern search directories are resolved under the app files
    /// directory.
    ///
    /// # Errors
    /// - `ContextNotInitialized` if `initAndroidContext` has not been called
    /// - `JniCallFailed` if the service lookup or capability queries fail
    pub fn new(config: HapticsConfig) -> Result<Self, HapticsError> {
        let handles = ANDROID_HANDLES
            .get()
            .ok_or(HapticsError::ContextNotInitialized)?;
        let vm = &handles.vm;
        let context = handles.context.as_obj();

        let vibrator = run_jni(vm, "getSystemService", |env| {
            let name = env.new_string(VIBRATOR_SERVICE)?;
            let service = env
                .call_method(
                    context,
                    "getSystemService",
                    "(Ljava/lang/String;)Ljava/lang/Object;",
                    &[JValue::Object(&name)],
                )?
                .l()?;
            if service.is_null() {
                return Err(jni::errors::Error::NullPtr("vibrator service"));
            }
            env.new_global_ref(service)
        })?;

        let has_vibrator = run_jni(vm, "hasVibrator", |env| {
            env.call_method(&vibrator, "hasVibrator", "()Z", &[])?.z()
        })?;

        // hasAmplitudeControl only exists from API 26; older devices fall
        // back to duration-only vibration
        let has_amplitude_control = run_jni(vm, "hasAmplitudeControl", |env| {
            env.call_method(&vibrator, "hasAmplitudeControl", "()Z", &[])?
                .z()
        })
        .unwrap_or_else(|err| {
            log_haptics_error(&err, "AndroidVibratorBackend::new");
            false
        });

        let patterns = match files_dir(vm, context) {
            Ok(root) => PatternLoader::new(&config.patterns.anchored_at(&root)),
            Err(err) => {
                log_haptics_error(&err, "AndroidVibratorBackend::new");
                PatternLoader::new(&config.patterns)
            }
        };

        tracing::info!(
            has_vibrator,
            has_amplitude_control,
            "[AndroidHaptics] Vibrator service acquired"
        );

        Ok(Self {
            vm,
            vibrator,
            has_vibrator,
            has_amplitude_control,
            config,
            patterns,
        })
    }

    fn amplitude(&self, requested: u8) -> i32 {
        if self.has_amplitude_control {
            // createOneShot rejects 0; the weakest real vibration is 1
            i32::from(requested.max(1))
        } else {
            DEFAULT_AMPLITUDE
        }
    }

    fn play_kind(&self, kind: FeedbackKind) {
        if !self.has_vibrator {
            return;
        }

        let shot = self.config.intensities.for_kind(kind);
        let amplitude = self.amplitude(shot.amplitude);
        let result = run_jni(self.vm, "createOneShot", |env| {
            let effect = env
                .call_static_method(
                    VIBRATION_EFFECT_CLASS,
                    "createOneShot",
                    "(JI)Landroid/os/VibrationEffect;",
                    &[
                        JValue::Long(shot.duration_ms as i64),
                        JValue::Int(amplitude),
                    ],
                )?
                .l()?;
            vibrate(env, &self.vibrator, &effect)
        });

        if let Err(err) = result {
            log_haptics_error(&err, kind.as_str());
        }
    }

    fn play_pattern(&self, pattern: &HapticPattern) -> Result<(), HapticsError> {
        let timings: Vec<i64> = pattern
            .timings_ms
            .iter()
            .map(|&t| i64::try_from(t).unwrap_or(i64::MAX))
            .collect();
        let amplitudes: Vec<i32> = pattern
            .amplitudes
            .iter()
            .map(|&a| match a {
                0 => 0,
                _ if self.has_amplitude_control => i32::from(a),
                _ => DEFAULT_AMPLITUDE,
            })
            .collect();

        run_jni(self.vm, "createWaveform", |env| {
            let len = timings.len() as i32;
            let timing_array = env.new_long_array(len)?;
            env.set_long_array_region(&timing_array, 0, &timings)?;
            let amplitude_array = env.new_int_array(len)?;
            env.set_int_array_region(&amplitude_array, 0, &amplitudes)?;

            let effect = env
                .call_static_method(
                    VIBRATION_EFFECT_CLASS,
                    "createWaveform",
                    "([J[II)Landroid/os/VibrationEffect;",
                    &[
                        JValue::Object(&timing_array),
                        JValue::Object(&amplitude_array),
                        JValue::Int(NO_REPEAT),
                    ],
                )?
                .l()?;
            vibrate(env, &self.vibrator, &effect)
        })
    }
}

impl HapticBackend for AndroidVibratorBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_supported(&self) -> bool {
        self.has_vibrator
    }

    fn trigger_light(&self) {
        self.play_kind(FeedbackKind::Light);
    }

    fn trigger_medium(&self) {
        self.play_kind(FeedbackKind::Medium);
    }

    fn trigger_heavy(&self) {
        self.play_kind(FeedbackKind::Heavy);
    }

    fn trigger_selection(&self) {
        self.play_kind(FeedbackKind::Selection);
    }

    fn trigger_custom(&self, pattern: &str) -> bool {
        if !self.has_vibrator {
            log_haptics_error(&HapticsError::Unsupported, "trigger_custom");
            return false;
        }

        let result = self
            .patterns
            .load(pattern)
            .and_then(|waveform| self.play_pattern(&waveform));

        match result {
            Ok(()) => true,
            Err(err) => {
                log_haptics_error(&err, "trigger_custom");
                false
            }
        }
    }
}

/// `Context.getFilesDir().getAbsolutePath()`
fn files_dir(vm: &JavaVM, context: &JObject) -> Result<PathBuf, HapticsError> {
    run_jni(vm, "getFilesDir", |env| {
        let dir = env
            .call_method(context, "getFilesDir", "()Ljava/io/File;", &[])?
            .l()?;
        if dir.is_null() {
            return Err(jni::errors::Error::NullPtr("files dir"));
        }
        let path = env
            .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])?
            .l()?;
        let path: String = env.get_string(&JString::from(path))?.into();
        Ok(PathBuf::from(path))
    })
}

fn vibrate(env: &mut JNIEnv, vibrator: &GlobalRef, effect: &JObject) -> jni::errors::Result<()> {
    env.call_method(
        vibrator,
        "vibrate",
        "(Landroid/os/VibrationEffect;)V",
        &[JValue::Object(effect)],
    )?
    .v()
}

/// Run `f` on an attached JNI environment inside a local reference frame.
///
/// A pending Java exception is described to logcat and cleared so the next
/// call starts from a clean environment.
fn run_jni<T, F>(vm: &JavaVM, method: &'static str, f: F) -> Result<T, HapticsError>
where
    F: FnOnce(&mut JNIEnv) -> jni::errors::Result<T>,
{
    let mut env = vm
        .attach_current_thread()
        .map_err(|err| jni_error("AttachCurrentThread", err))?;

    let result = env.with_local_frame(LOCAL_FRAME_CAPACITY, f);
    result.map_err(|err| {
        if env.exception_check().unwrap_or(false) {
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }
        jni_error(method, err)
    })
}

fn jni_error(method: &str, err: jni::errors::Error) -> HapticsError {
    HapticsError::JniCallFailed {
        method: method.to_string(),
        reason: err.to_string(),
    }
}
