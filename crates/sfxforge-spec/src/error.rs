//! Error types for descriptor validation and processing.

use thiserror::Error;

/// Error codes for descriptor validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Descriptor errors (E001-E009)
    /// E001: Duration is not a positive finite number
    InvalidDuration,
    /// E002: Frequency is not a positive finite number
    InvalidFrequency,
    /// E003: Note sequence is present but empty
    EmptyNotes,
    /// E004: A note frequency is not a positive finite number
    InvalidNote,
    /// E005: Filename is empty or has an unsupported extension
    InvalidFilename,
    /// E006: Filename is not a plain file name (separators, '..', drive letters)
    UnsafeFilename,
    /// E007: Duration is longer than a sound may be
    DurationTooLong,

    // Catalog errors (E010-E013)
    /// E010: Catalog contains no descriptors
    EmptyCatalog,
    /// E011: Two descriptors share a filename
    DuplicateFilename,
    /// E012: Descriptor edition does not match the catalog edition
    EditionMismatch,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => "E001",
            ErrorCode::InvalidFrequency => "E002",
            ErrorCode::EmptyNotes => "E003",
            ErrorCode::InvalidNote => "E004",
            ErrorCode::InvalidFilename => "E005",
            ErrorCode::UnsafeFilename => "E006",
            ErrorCode::DurationTooLong => "E007",
            ErrorCode::EmptyCatalog => "E010",
            ErrorCode::DuplicateFilename => "E011",
            ErrorCode::EditionMismatch => "E012",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for descriptor validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Missing description
    MissingDescription,
    /// W002: Missing usage notes
    MissingUsage,
    /// W003: Wave type is ignored because the chip channel decides the waveform
    IgnoredWaveType,
    /// W004: Both notes and frequency are set; notes win
    IgnoredFrequency,
    /// W005: Frequency above the Nyquist limit of the default sample rate
    AboveNyquist,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MissingDescription => "W001",
            WarningCode::MissingUsage => "W002",
            WarningCode::IgnoredWaveType => "W003",
            WarningCode::IgnoredFrequency => "W004",
            WarningCode::AboveNyquist => "W005",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "sounds\[3\].duration").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a field path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for descriptor and catalog operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Catalog validation failed with one or more errors.
    #[error("catalog validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// A descriptor cannot drive any generator.
    #[error("invalid descriptor '{filename}': {reason}")]
    InvalidDescriptor {
        /// Filename of the offending descriptor.
        filename: String,
        /// Why the descriptor was rejected.
        reason: String,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates an invalid descriptor error.
    pub fn invalid_descriptor(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            filename: filename.into(),
            reason: reason.into(),
        }
    }
}

/// Result of descriptor or catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Folds another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.ok &= other.ok;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so that callers can report
/// stable error codes without depending on the backend's concrete type.
pub trait BackendError: std::error::Error {
    /// Stable error code such as "AUDIO_001".
    fn code(&self) -> &'static str;

    /// Human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping related errors (e.g. "audio").
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::InvalidDuration.code(), "E001");
        assert_eq!(ErrorCode::EmptyNotes.code(), "E003");
        assert_eq!(ErrorCode::UnsafeFilename.code(), "E006");
        assert_eq!(ErrorCode::DurationTooLong.code(), "E007");
        assert_eq!(ErrorCode::DuplicateFilename.code(), "E011");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::MissingDescription.code(), "W001");
        assert_eq!(WarningCode::IgnoredWaveType.code(), "W003");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::InvalidDuration, "must be positive");
        assert_eq!(err.to_string(), "E001: must be positive");

        let err_with_path = ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            "must be positive",
            "sounds[2].frequency",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E002: must be positive (at sounds[2].frequency)"
        );
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        let mut other = ValidationResult::success();
        other.add_error(ValidationError::new(ErrorCode::EmptyNotes, "no notes"));
        other.add_warning(ValidationWarning::new(
            WarningCode::MissingUsage,
            "no usage",
        ));
        result.merge(other);

        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_invalid_descriptor_display() {
        let err = SpecError::invalid_descriptor("click.mp3", "duration must be positive");
        assert_eq!(
            err.to_string(),
            "invalid descriptor 'click.mp3': duration must be positive"
        );
    }
}
