//! Error types shared across the ondas engine.

use thiserror::Error;

/// Errors surfaced by the synthesis and analysis engine.
///
/// Every failure is scoped to the single setter or `generate()` call that
/// triggered it; nothing here is fatal to the host process, and no error is
/// retried internally.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration that cannot produce a valid result
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the violated invariant.
        reason: String,
    },

    /// A waveform/window/noise name outside the supported set
    #[error("unsupported {class} '{name}' (supported: {supported})")]
    UnsupportedKind {
        /// Kind class being parsed ("waveform", "window", "noise", ...).
        class: &'static str,
        /// The rejected input.
        name: String,
        /// Comma-separated list of accepted names.
        supported: String,
    },

    /// A parameter update rejected without changing any state
    #[error("rejected update: {param} = {value} (must be > 0)")]
    RejectedUpdate {
        /// Name of the rejected parameter.
        param: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A declared but unimplemented feature
    #[error("not implemented: {feature}")]
    NotImplemented {
        /// Name of the missing feature.
        feature: &'static str,
    },
}

impl EngineError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an unsupported-kind error for a rejected name.
    pub fn unsupported_kind(
        class: &'static str,
        name: impl Into<String>,
        supported: impl Into<String>,
    ) -> Self {
        EngineError::UnsupportedKind {
            class,
            name: name.into(),
            supported: supported.into(),
        }
    }

    /// Create a rejected-update error.
    pub fn rejected_update(param: &'static str, value: f64) -> Self {
        EngineError::RejectedUpdate { param, value }
    }

    /// Create a not-implemented error.
    pub fn not_implemented(feature: &'static str) -> Self {
        EngineError::NotImplemented { feature }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let err = EngineError::invalid_config("sample rate must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: sample rate must be positive"
        );
    }

    #[test]
    fn unsupported_kind_display_names_input_and_set() {
        let err = EngineError::unsupported_kind("noise", "violet", "white, pink, brown");
        let msg = err.to_string();
        assert!(msg.contains("violet"), "got: {msg}");
        assert!(msg.contains("white, pink, brown"), "got: {msg}");
    }

    #[test]
    fn rejected_update_display() {
        let err = EngineError::rejected_update("signal frequency", -2.0);
        assert_eq!(
            err.to_string(),
            "rejected update: signal frequency = -2 (must be > 0)"
        );
    }

    #[test]
    fn not_implemented_display() {
        let err = EngineError::not_implemented("pink noise");
        assert_eq!(err.to_string(), "not implemented: pink noise");
    }
}
