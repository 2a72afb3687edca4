use crate::cli::output;
use crate::domain::validation::MenuChoice;

const MAIN_MENU_TITLE: &str = "What would you like to do?";

pub const CHOICE_PROMPT: &str = "Choose an option: ";

pub fn lines() -> Vec<String> {
    std::iter::once(MAIN_MENU_TITLE.to_string())
        .chain(
            MenuChoice::ALL
                .iter()
                .map(|choice| format!("{}. {}", choice.number(), choice.label())),
        )
        .collect()
}

pub fn show() {
    lines().into_iter().for_each(output::line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_four_numbered_options() {
        assert_eq!(
            lines(),
            [
                "What would you like to do?",
                "1. Add Expense",
                "2. View All Expenses",
                "3. View Summary",
                "4. Exit",
            ]
        );
    }
}
