// Error types for the haptic feedback core
//
// This module defines the internal error type for backend and service
// operations, with error codes suitable for FFI communication. Public
// trigger and query functions never return these; they log them and fall
// back to the documented safe default.

mod haptics;

pub use haptics::{log_haptics_error, HapticsError, HapticsErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the FFI boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
