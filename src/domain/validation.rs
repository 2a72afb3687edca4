//! Pure validators for raw operator input.
//!
//! Each function receives the line exactly as typed and reports either the
//! parsed value or the [`ValidationError`] to show. Whether a rejection
//! re-prompts or aborts is left to the caller.

use crate::errors::ValidationError;

/// Menu entries offered by the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense = 1,
    ViewExpenses = 2,
    ViewSummary = 3,
    Exit = 4,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::ViewSummary,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| *choice as i64 == number)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::ViewExpenses => "View All Expenses",
            MenuChoice::ViewSummary => "View Summary",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn description(raw: &str) -> Result<String, ValidationError> {
    non_empty(raw, ValidationError::EmptyDescription)
}

pub fn category(raw: &str) -> Result<String, ValidationError> {
    non_empty(raw, ValidationError::EmptyCategory)
}

/// Parses a non-negative, finite amount.
pub fn amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }
    let value: f64 = strip_digit_separators(trimmed)
        .ok_or(ValidationError::InvalidAmount)?
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidAmount);
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(value)
}

pub fn menu_choice(raw: &str) -> Result<MenuChoice, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyChoice);
    }
    let number: i64 = strip_digit_separators(trimmed)
        .ok_or(ValidationError::InvalidChoice)?
        .parse()
        .map_err(|_| ValidationError::InvalidChoice)?;
    MenuChoice::from_number(number).ok_or(ValidationError::ChoiceOutOfRange)
}

/// Removes `_` digit separators such as `1_000`. Returns `None` when an
/// underscore is not surrounded by digits.
fn strip_digit_separators(raw: &str) -> Option<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut stripped = String::with_capacity(raw.len());
    for (index, ch) in chars.iter().enumerate() {
        if *ch != '_' {
            stripped.push(*ch);
            continue;
        }
        let before = index.checked_sub(1).and_then(|prev| chars.get(prev));
        let after = chars.get(index + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(stripped)
}

fn non_empty(raw: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}
