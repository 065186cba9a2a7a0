//! Parsing of stdin lines into session events.
//!
//! A line starting with `:` is a command; anything else is the new value of
//! the search input. Start a line with `::` to type text that begins with a
//! colon.

use anyhow::{anyhow, bail, Result};
use typeahead_core::Key;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the input text.
    Input(String),
    /// A navigation key.
    Key(Key),
    Submit,
    Focus,
    /// Click outside the input.
    Blur,
    /// Click the n-th suggestion (1-based).
    PickSuggestion(usize),
    /// Click the n-th history entry (1-based).
    PickHistory(usize),
    /// Click the popular query at this rank.
    PickPopular(usize),
    Help,
    Quit,
}

pub const HELP: &str = "\
Type text to edit the search input. Commands:
  :down :up :enter :esc   navigate suggestions
  :submit                 search the input and clear it
  :focus :blur            focus the input / click outside it
  :pick N                 search the N-th suggestion
  :history N              search the N-th history entry
  :popular N              search the popular query ranked N
  :help :quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Command::Input(line.to_string()));
        };
        if rest.starts_with(':') {
            return Ok(Command::Input(rest.to_string()));
        }

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            bail!("too many arguments to :{}", name);
        }

        let command = match name {
            "down" => Command::Key(Key::Down),
            "up" => Command::Key(Key::Up),
            "enter" => Command::Key(Key::Enter),
            "esc" | "escape" => Command::Key(Key::Escape),
            "submit" => Command::Submit,
            "focus" => Command::Focus,
            "blur" => Command::Blur,
            "pick" => Command::PickSuggestion(position(name, arg)?),
            "history" => Command::PickHistory(position(name, arg)?),
            "popular" => Command::PickPopular(position(name, arg)?),
            "help" | "?" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => bail!("unknown command :{} (try :help)", other),
        };

        if arg.is_some() && !matches!(
            command,
            Command::PickSuggestion(_) | Command::PickHistory(_) | Command::PickPopular(_)
        ) {
            bail!(":{} takes no argument", name);
        }
        Ok(command)
    }
}

/// Parse a 1-based position argument.
fn position(name: &str, arg: Option<&str>) -> Result<usize> {
    let raw = arg.ok_or_else(|| anyhow!(":{} needs a number", name))?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => bail!(":{} expects a number starting at 1, got {:?}", name, raw),
    }
}
