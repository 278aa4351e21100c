// Haptic Feedback Core - cross-platform haptics service
// One stable API dispatching to the backend compiled in for the target platform

// Module declarations
pub mod api;
pub mod backend;
pub mod config;
pub mod context;
pub mod error;

// Re-exports for convenience
pub use api::*;

#[cfg(target_os = "android")]
use log::info;

/// Initialize Android logging
///
/// Routes `tracing` events and `log` records to logcat.
#[cfg(target_os = "android")]
fn init_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    match tracing_android::layer("HapticFeedback") {
        Ok(layer) => {
            let _ = tracing_subscriber::registry().with(layer).try_init();
        }
        Err(err) => eprintln!("HapticFeedback: failed to create logcat layer: {}", err),
    }
}

/// JNI_OnLoad is called when the native library is loaded by Android
#[cfg(target_os = "android")]
#[no_mangle]
pub extern "system" fn JNI_OnLoad(
    _vm: jni::JavaVM,
    _reserved: *mut std::ffi::c_void,
) -> jni::sys::jint {
    init_logging();

    info!("JNI_OnLoad called - haptics library loaded");

    jni::sys::JNI_VERSION_1_6
}

/// Hand the application Context to the native side
///
/// Called from `com.hapticfeedback.HapticFeedback.initAndroidContext(Context)`
/// before `init()`. This is the only way the vibrator backend receives the
/// JavaVM and Context; repeated calls keep the first values.
#[cfg(target_os = "android")]
#[no_mangle]
pub extern "system" fn Java_com_hapticfeedback_HapticFeedback_initAndroidContext(
    env: jni::JNIEnv,
    _class: jni::objects::JClass,
    context: jni::objects::JObject,
) -> jni::sys::jboolean {
    match backend::install_android_context(&env, &context) {
        Ok(()) => jni::sys::JNI_TRUE,
        Err(err) => {
            error::log_haptics_error(&err, "initAndroidContext");
            jni::sys::JNI_FALSE
        }
    }
}
