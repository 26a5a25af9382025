//! Error types
//!
//! Only configuration can fail. Runtime ticks never return errors: physics
//! edge cases such as zero hits or self-collision are filtered where they
//! occur.

use std::path::PathBuf;

/// Errors raised while loading or validating tuning data.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing a config file failed.
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file contents are not valid JSON for the expected shape.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Fail unless `value` is finite.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not finite")))
    }
}

/// Fail unless `value` is finite and within `[min, max]`.
pub(crate) fn ensure_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(ConfigError::invalid(
            field,
            format!("{value} is outside [{min}, {max}]"),
        ));
    }
    Ok(())
}

/// Fail unless `value` is finite and not negative.
pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} is negative")));
    }
    Ok(())
}
