use std::io;

use crate::cli::commands;
use crate::cli::input::{prompt_until_valid, EditorSource, LineSource, Prompted, ScriptSource};
use crate::cli::menus::main_menu::{self, CHOICE_PROMPT};
use crate::cli::output::{self, OutputPreferences};
use crate::config::{Config, ConfigManager};
use crate::domain::validation::{self, MenuChoice};
use crate::domain::ExpenseStore;
use crate::errors::{CliError, CliResult};

/// Set to any value to read commands from stdin without the line editor.
pub const SCRIPT_MODE_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

const WELCOME_MESSAGE: &str = "Welcome to the Personal Finance Tracker!";
const FAREWELL_MESSAGE: &str = "Goodbye!";

/// Consecutive failed loop iterations after which the input is treated as
/// gone, the same as a cancellation at the menu.
const MAX_CONSECUTIVE_FAILURES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Loads configuration, installs logging and output preferences, then runs
/// one session against the terminal (or stdin in script mode).
pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let config = ConfigManager::from_env().load()?;
    crate::init_with_filter(config.log_filter.as_deref());
    apply_config(&config, mode);
    tracing::info!(?mode, "starting expense tracker");

    match mode {
        CliMode::Interactive => {
            let mut source = EditorSource::new()?;
            run_session(&mut source);
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut source = ScriptSource::new(stdin.lock());
            run_session(&mut source);
        }
    }
    Ok(())
}

fn apply_config(config: &Config, mode: CliMode) {
    let mut prefs = OutputPreferences::from_config(config);
    if mode == CliMode::Script {
        prefs.plain_mode = true;
    }
    output::set_preferences(prefs);
}

/// Runs the welcome, menu and dispatch loop until the operator exits,
/// cancels at the menu, or input fails repeatedly. Returns the session's
/// store, which is otherwise discarded.
pub fn run_session(source: &mut dyn LineSource) -> ExpenseStore {
    let mut store = ExpenseStore::new();
    output::line(WELCOME_MESSAGE);
    output::blank_line();

    let mut failures = 0;
    loop {
        match step(&mut store, source) {
            Ok(LoopControl::Continue) => failures = 0,
            Ok(LoopControl::Exit) => break,
            Err(err) => {
                report_error(err);
                failures += 1;
                if failures >= MAX_CONSECUTIVE_FAILURES {
                    tracing::warn!(failures, "input keeps failing, ending session");
                    output::info("Exiting program...");
                    break;
                }
            }
        }
    }

    output::line(FAREWELL_MESSAGE);
    tracing::info!(
        categories = store.category_count(),
        expenses = store.expense_count(),
        "session ended"
    );
    store
}

fn step(store: &mut ExpenseStore, source: &mut dyn LineSource) -> CliResult<LoopControl> {
    main_menu::show();
    let choice = match prompt_until_valid(source, CHOICE_PROMPT, validation::menu_choice)? {
        Prompted::Value(choice) => choice,
        Prompted::Cancelled => {
            output::info("Exiting program...");
            MenuChoice::Exit
        }
    };
    output::blank_line();
    dispatch(choice, store, source)
}

fn dispatch(
    choice: MenuChoice,
    store: &mut ExpenseStore,
    source: &mut dyn LineSource,
) -> CliResult<LoopControl> {
    tracing::debug!(?choice, "dispatching menu choice");
    match choice {
        MenuChoice::AddExpense => commands::add_expense(store, source)?,
        MenuChoice::ViewExpenses => commands::view_expenses(store)?,
        MenuChoice::ViewSummary => commands::view_summary(store)?,
        MenuChoice::Exit => return Ok(LoopControl::Exit),
    }
    Ok(LoopControl::Continue)
}

fn report_error(err: CliError) {
    tracing::warn!(error = %err, "command loop recovered from error");
    output::error(format!("An unexpected error occurred: {err}"));
    output::info("Please try again.");
}
