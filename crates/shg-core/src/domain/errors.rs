use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ComputeResult<T> = Result<T, ShgError>;

/// Failure classes of the pipeline, each with a stable process exit code.
///
/// `InputValidationError` covers malformed tables and configuration
/// (format errors), `IoSystemError` covers unreadable inputs and unwritable
/// outputs, `ComputationError` covers physically invalid parameters or grids
/// (domain errors). There is no retry or fallback path for any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShgErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl ShgErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShgError {
    category: ShgErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl ShgError {
    pub fn new(
        category: ShgErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ShgErrorCategory::InputValidationError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ShgErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ShgErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ShgErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> ShgErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for ShgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.label(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for ShgError {}

#[cfg(test)]
mod tests {
    use super::{ShgError, ShgErrorCategory};

    #[test]
    fn exit_code_mapping_is_stable() {
        assert_eq!(ShgErrorCategory::InputValidationError.exit_code(), 2);
        assert_eq!(ShgErrorCategory::IoSystemError.exit_code(), 3);
        assert_eq!(ShgErrorCategory::ComputationError.exit_code(), 4);
        assert_eq!(ShgErrorCategory::InternalError.exit_code(), 5);
    }

    #[test]
    fn error_renders_diagnostic_and_fatal_lines() {
        let error = ShgError::input_validation(
            "INPUT.SPECTRUM_SHAPE",
            "table 'zzz' has 3 rows, expected 1200",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.SPECTRUM_SHAPE] table 'zzz' has 3 rows, expected 1200"
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 2");
    }

    #[test]
    fn display_includes_category_and_placeholder() {
        let error = ShgError::io_system("IO.SPECTRUM_READ", "no such file");
        assert_eq!(
            error.to_string(),
            "IoSystemError [IO.SPECTRUM_READ] no such file"
        );
    }
}
