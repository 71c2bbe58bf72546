//! Line command parsing.
//!
//! # Responsibility
//! - Map one stdin line to a screen command.
//!
//! # Invariants
//! - Text after `draft ` / `add ` is kept verbatim; trimming belongs to core.

use mytodo_core::TodoId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const HELP_TEXT: &str = "\
commands:
  draft <text>   set the input field
  add [text]     press Add (optionally setting the input first)
  del <row|id>   press Delete on a row number or item id
  list           redraw the screen
  json           print items as JSON
  help           show this help
  quit | exit    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Draft(String),
    Add(Option<String>),
    Delete(DeleteTarget),
    List,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// 1-based row number as rendered.
    Row(usize),
    Id(TodoId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    BadRow(String),
    BadId(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::BadRow(value) => write!(f, "no row `{value}`"),
            Self::BadId(value) => write!(f, "not a row number or item id: `{value}`"),
        }
    }
}

impl Error for CommandError {}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let line = line.trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };

    let command = match word {
        "draft" => Command::Draft(rest.unwrap_or_default().to_string()),
        "add" => Command::Add(rest.map(str::to_string)),
        "del" | "delete" => Command::Delete(parse_target(rest)?),
        "list" => Command::List,
        "json" => Command::Json,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_target(rest: Option<&str>) -> Result<DeleteTarget, CommandError> {
    let value = rest
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(CommandError::MissingArgument("del"))?;

    if value.bytes().all(|byte| byte.is_ascii_digit()) {
        return match value.parse::<usize>() {
            Ok(row) if row > 0 => Ok(DeleteTarget::Row(row)),
            _ => Err(CommandError::BadRow(value.to_string())),
        };
    }

    Uuid::parse_str(value)
        .map(DeleteTarget::Id)
        .map_err(|_| CommandError::BadId(value.to_string()))
}
