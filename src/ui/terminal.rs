//! Line-oriented terminal front-end.
//!
//! Reads commands from any `BufRead` and writes to any `Write`, so the same
//! loop drives stdin/stdout in the binary and in-memory buffers in tests.
//!
//! ## Commands
//!
//! - `add`: prompts for name and number, then submits the form
//! - `remove <name>`: drops every player with that name
//! - `list`: prints the roster
//! - `json`: prints the roster as JSON
//! - `help`
//! - `quit` / `exit` (EOF also ends the session)
//!
//! The roster is printed again after every dispatch. A store subscription
//! flags the change; the loop does the printing.

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tracing::{info, warn};

use super::form::{PlayerForm, NAME_LABEL, NUMBER_LABEL, SUBMIT_LABEL};
use super::render::{render_json, render_roster};
use crate::core::{remove_player, AppState, NumberRange};
use crate::store::{players_selector, Store};

/// Prompt shown before each command.
pub const PROMPT: &str = "> ";

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove(String),
    List,
    Json,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// ```
    /// use roster::ui::Command;
    ///
    /// assert_eq!(Command::parse("remove Damian Lillard"), Command::Remove("Damian Lillard".into()));
    /// assert_eq!(Command::parse("  "), Command::Empty);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "add" => Command::Add,
            "remove" | "rm" => Command::Remove(rest.to_string()),
            "list" | "ls" => Command::List,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(head.to_string()),
        }
    }
}

/// One interactive session against a store.
pub struct Session<'a, R, W> {
    store: &'a mut Store,
    range: NumberRange,
    input: R,
    output: W,
    changed: Rc<Cell<bool>>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session. The form enforces `range` on submitted numbers.
    pub fn new(store: &'a mut Store, range: NumberRange, input: R, output: W) -> Self {
        Self {
            store,
            range,
            input,
            output,
            changed: Rc::new(Cell::new(false)),
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(mut self) -> io::Result<()> {
        let flag = Rc::clone(&self.changed);
        let subscription = self.store.subscribe(move |_: &AppState| flag.set(true));
        info!(players = self.roster_len(), "session started");

        let result = self.run_loop();

        self.store.unsubscribe(subscription);
        info!(
            players = self.roster_len(),
            dispatched = self.store.dispatch_count(),
            "session ended"
        );
        result
    }

    fn run_loop(&mut self) -> io::Result<()> {
        render_roster(&mut self.output, players_selector(self.store.state()))?;

        loop {
            let Some(line) = self.prompt(PROMPT)? else {
                break;
            };

            match Command::parse(&line) {
                Command::Add => {
                    if !self.add()? {
                        break;
                    }
                }
                Command::Remove(name) => self.remove(&name)?,
                Command::List => {
                    render_roster(&mut self.output, players_selector(self.store.state()))?;
                }
                Command::Json => {
                    render_json(&mut self.output, players_selector(self.store.state()))?;
                }
                Command::Help => self.help()?,
                Command::Quit => break,
                Command::Empty => {}
                Command::Unknown(word) => {
                    writeln!(self.output, "unknown command {word:?}, try `help`")?;
                }
            }

            if self.changed.replace(false) {
                render_roster(&mut self.output, players_selector(self.store.state()))?;
            }
        }

        self.output.flush()
    }

    /// Fill in and submit the form. Returns false if input ended mid-form.
    fn add(&mut self) -> io::Result<bool> {
        let mut form = PlayerForm::default();

        let Some(name) = self.prompt(&format!("{NAME_LABEL} "))? else {
            return Ok(false);
        };
        form.name = name;

        let Some(number) = self.prompt(&format!("{NUMBER_LABEL} "))? else {
            return Ok(false);
        };
        form.number = number;

        match form.submit(self.range) {
            Ok(action) => self.store.dispatch(action),
            Err(err) => {
                warn!(error = %err, "{SUBMIT_LABEL} rejected");
                writeln!(self.output, "error: {err}")?;
            }
        }
        Ok(true)
    }

    fn remove(&mut self, name: &str) -> io::Result<()> {
        if name.is_empty() {
            return writeln!(self.output, "usage: remove <name>");
        }
        if !players_selector(self.store.state()).contains_name(name) {
            writeln!(self.output, "no player named {name:?}")?;
        }
        self.store.dispatch(remove_player(name));
        Ok(())
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "commands:")?;
        writeln!(self.output, "  add             {SUBMIT_LABEL} (number {})", self.range)?;
        writeln!(self.output, "  remove <name>   remove every player with that name")?;
        writeln!(self.output, "  list            show the roster")?;
        writeln!(self.output, "  json            show the roster as JSON")?;
        writeln!(self.output, "  quit            leave")
    }

    /// Print `prompt` and read one line, without its line ending.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn roster_len(&self) -> usize {
        players_selector(self.store.state()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("add"), Command::Add);
        assert_eq!(Command::parse("ADD"), Command::Add);
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("ls"), Command::List);
        assert_eq!(Command::parse("json"), Command::Json);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".into()));
    }

    #[test]
    fn test_parse_remove_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("  remove   Michael Jordan  "),
            Command::Remove("Michael Jordan".into())
        );
        assert_eq!(Command::parse("remove"), Command::Remove(String::new()));
    }
}
