//! Rendering the roster as text.

use std::io::{self, Write};

use crate::core::Roster;

/// Heading printed above the list.
pub const HEADING: &str = "Players:";

/// One line per player, `#<number> - <name>`, in roster order.
#[must_use]
pub fn player_lines(roster: &Roster) -> Vec<String> {
    roster.iter().map(ToString::to_string).collect()
}

/// Write the heading and the player list to `out`.
pub fn render_roster<W: Write>(out: &mut W, roster: &Roster) -> io::Result<()> {
    writeln!(out, "{HEADING}")?;
    for line in player_lines(roster) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Write the roster as a JSON array.
pub fn render_json<W: Write>(out: &mut W, roster: &Roster) -> io::Result<()> {
    serde_json::to_writer(&mut *out, roster)?;
    writeln!(out)
}
