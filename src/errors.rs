use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::services::ServiceError;

/// Rejections raised while turning raw operator input into domain values.
///
/// The `Display` text is exactly what the terminal shows the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description cannot be empty.")]
    EmptyDescription,
    #[error("Category cannot be empty.")]
    EmptyCategory,
    #[error("Amount cannot be empty.")]
    EmptyAmount,
    #[error("Invalid amount. Please enter a number.")]
    InvalidAmount,
    #[error("Amount cannot be negative.")]
    NegativeAmount,
    #[error("Please enter a choice.")]
    EmptyChoice,
    #[error("Please enter a valid number.")]
    InvalidChoice,
    #[error("Please enter a number between 1 and 4.")]
    ChoiceOutOfRange,
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub type CliResult<T> = Result<T, CliError>;
