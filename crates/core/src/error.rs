//! Error types for the bootstrap core.
//!
//! Acquisition and normalization never fail: an unsupported backend is a
//! `None` context and an unsupported extension is a `None` extension. The
//! errors here cover the configuration surface and calls made through the
//! context's function members.

use thiserror::Error;

/// Errors produced while configuring the bootstrap layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// A recognized defaults key was given a value of the wrong JSON type.
    #[error("defaults type mismatch for '{key}': expected {expected}, got {got}")]
    DefaultsTypeMismatch {
        key: String,
        expected: String,
        got: String,
    },

    /// A defaults merge was given something other than a JSON object.
    #[error("defaults must be a JSON object, got {0}")]
    DefaultsNotObject(String),

    /// A context kind identifier was not recognized.
    #[error("unknown context kind: {0}")]
    UnknownContextKind(String),

    /// Context creation attributes could not be parsed.
    #[error("invalid context attributes: {0}")]
    InvalidAttributes(String),
}

/// Errors produced when invoking a function member of a context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// No function with this name exists on the context.
    #[error("no function named '{0}' on the context")]
    UnknownFunction(String),

    /// The extension a trampoline forwards to is no longer alive.
    #[error("receiver of '{0}' has been released")]
    ReceiverReleased(String),

    /// The host reported a failure while executing the call.
    #[error("host call failed: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_type_mismatch_includes_all_fields() {
        let err = BootstrapError::DefaultsTypeMismatch {
            key: "addExtensionsToContext".into(),
            expected: "bool".into(),
            got: "string".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("addExtensionsToContext"), "missing key in: {msg}");
        assert!(msg.contains("bool"), "missing expected type in: {msg}");
        assert!(msg.contains("string"), "missing got type in: {msg}");
    }

    #[test]
    fn unknown_context_kind_includes_name() {
        let err = BootstrapError::UnknownContextKind("webgpu".into());
        assert!(err.to_string().contains("webgpu"));
    }

    #[test]
    fn host_error_carries_host_message() {
        let err = CallError::Host("INVALID_OPERATION".into());
        assert!(err.to_string().contains("INVALID_OPERATION"));
    }

    #[test]
    fn receiver_released_names_the_function() {
        let err = CallError::ReceiverReleased("bindVertexArray".into());
        assert!(err.to_string().contains("bindVertexArray"));
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BootstrapError>();
        assert_send_sync::<CallError>();
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<BootstrapError>();
        assert_std_error::<CallError>();
    }
}
