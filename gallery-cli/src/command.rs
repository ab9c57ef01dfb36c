//! Interactive command parsing.

use gallery_lib::model::RecordId;
use thiserror::Error;

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  page <n>          go to page n
  next | prev       go to the next / previous page
  reload            fetch the current page again
  select <id...>    check exactly these rows on this page (none clears the page)
  toggle <id>       flip one row on this page
  all | none        check / uncheck every row on this page
  first <n>         select the first n records, filled as pages are visited
  show              print the current page
  status            print the selection
  help              print this help
  quit              exit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Page(u32),
    Next,
    Prev,
    Reload,
    Select(Vec<RecordId>),
    Toggle(RecordId),
    SelectAll,
    ClearAll,
    /// Raw count; validated by the selection layer.
    First(String),
    Show,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a record id")]
    InvalidId(String),
    #[error("'{0}' is not a page number")]
    InvalidPage(String),
}

impl Command {
    /// Parses a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "page" | "p" => {
                let raw = first_arg(&rest, "page", "a page number")?;
                let page = raw
                    .parse::<u32>()
                    .ok()
                    .filter(|p| *p > 0)
                    .ok_or_else(|| CommandError::InvalidPage(raw.to_string()))?;
                Self::Page(page)
            }
            "next" | "n" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "reload" | "r" => Self::Reload,
            "select" | "s" => Self::Select(parse_ids(&rest)?),
            "toggle" | "t" => {
                let raw = first_arg(&rest, "toggle", "a record id")?;
                Self::Toggle(parse_id(raw)?)
            }
            "all" => Self::SelectAll,
            "none" => Self::ClearAll,
            "first" | "f" => Self::First(first_arg(&rest, "first", "a count")?.to_string()),
            "show" | "ls" => Self::Show,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn first_arg<'a>(
    rest: &[&'a str],
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    rest.first()
        .copied()
        .ok_or(CommandError::MissingArgument { command, expected })
}

/// Accepts ids separated by whitespace and/or commas.
fn parse_ids(words: &[&str]) -> Result<Vec<RecordId>, CommandError> {
    words
        .iter()
        .flat_map(|w| w.split(','))
        .filter(|w| !w.is_empty())
        .map(parse_id)
        .collect()
}

fn parse_id(raw: &str) -> Result<RecordId, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
