//! Line sources and the validated prompt loops built on top of them.
//!
//! A [`LineSource`] yields one line per prompt or reports that the operator
//! cancelled. Interactive sessions read through `rustyline`, where Ctrl-C and
//! Ctrl-D both cancel. Script sessions read stdin line by line, where end of
//! input or a literal [`CANCEL_TOKEN`] line cancels.

use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::output;
use crate::errors::{CliResult, ValidationError};

/// Script-mode line that stands in for an interrupt.
pub const CANCEL_TOKEN: &str = "<CANCEL>";

/// Result of a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Cancelled,
}

/// Result of a prompt: a value, or the operator cancelled while it was open.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> CliResult<ReadOutcome>;
}

/// Interactive terminal input backed by a `rustyline` editor.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> CliResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> CliResult<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Ok(ReadOutcome::Cancelled)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Line-by-line input from any buffered reader, used for script mode.
pub struct ScriptSource<R> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> ScriptSource<R> {
    /// Echoes each prompt on its own line so transcripts stay readable.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: true,
        }
    }

    pub fn silent(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: false,
        }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> CliResult<ReadOutcome> {
        if self.echo_prompts {
            let mut stdout = io::stdout();
            writeln!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(ReadOutcome::Cancelled);
        }
        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.trim() == CANCEL_TOKEN {
            return Ok(ReadOutcome::Cancelled);
        }
        Ok(ReadOutcome::Line(line.to_string()))
    }
}

/// Reads one line and validates it. A rejection is handed back to the caller,
/// which decides whether to abort.
pub fn prompt_once<T>(
    source: &mut dyn LineSource,
    prompt: &str,
    validate: impl Fn(&str) -> Result<T, ValidationError>,
) -> CliResult<Prompted<Result<T, ValidationError>>> {
    match source.read_line(prompt)? {
        ReadOutcome::Line(raw) => Ok(Prompted::Value(validate(&raw))),
        ReadOutcome::Cancelled => Ok(Prompted::Cancelled),
    }
}

/// Re-prompts, printing each rejection, until `validate` accepts the input
/// or the operator cancels.
pub fn prompt_until_valid<T>(
    source: &mut dyn LineSource,
    prompt: &str,
    validate: impl Fn(&str) -> Result<T, ValidationError>,
) -> CliResult<Prompted<T>> {
    loop {
        match prompt_once(source, prompt, &validate)? {
            Prompted::Value(Ok(value)) => return Ok(Prompted::Value(value)),
            Prompted::Value(Err(err)) => {
                tracing::debug!(prompt, error = %err, "input rejected");
                output::error(err);
            }
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        }
    }
}
