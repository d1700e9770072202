//! Error types for widget construction and theme loading.

use thiserror::Error;

/// Errors raised while constructing widgets or layouts.
///
/// Construction fails fast: invalid numbers are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    #[error("Invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f64, max: f64 },
    #[error("Invalid size {width}x{height}: dimensions must be finite and non-negative")]
    InvalidSize { width: f64, height: f64 },
    #[error("Value {value} is outside [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },
    #[error("Invalid {name}: {value} must be finite and non-negative")]
    InvalidSpacing { name: &'static str, value: f64 },
}

/// Result type for widget construction.
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors raised while loading a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Checks a width/height pair.
pub(crate) fn check_size(width: f64, height: f64) -> WidgetResult<()> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(WidgetError::InvalidSize { width, height })
    }
}

/// Checks a spacing or padding amount.
pub(crate) fn check_spacing(name: &'static str, value: f64) -> WidgetResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WidgetError::InvalidSpacing { name, value })
    }
}
