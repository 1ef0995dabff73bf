//! The new-player entry form.
//!
//! Holds the raw text of both inputs. On submission it checks the required
//! name, parses the number and enforces the configured range, then produces
//! an add request. This is the only place input gets validated; the store
//! accepts whatever it is handed.

use crate::core::{add_player, NumberRange, Player, RosterAction};
use crate::error::FormError;

/// Label on the submit control.
pub const SUBMIT_LABEL: &str = "Add Player";

/// Label on the name input.
pub const NAME_LABEL: &str = "Player Name:";

/// Label on the number input.
pub const NUMBER_LABEL: &str = "Player Number:";

/// Raw form inputs.
///
/// ```
/// use roster::core::{NumberRange, Player, RosterAction};
/// use roster::ui::PlayerForm;
///
/// let form = PlayerForm::new("LeBron James", "23");
/// let action = form.submit(NumberRange::default()).unwrap();
/// assert_eq!(action, RosterAction::Add(Player::new("LeBron James", 23)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerForm {
    pub name: String,
    pub number: String,
}

impl PlayerForm {
    /// Create a form with both fields filled in.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Build the player the inputs describe.
    ///
    /// The name is kept verbatim apart from surrounding whitespace; the
    /// number is trimmed and parsed as a base-10 integer.
    pub fn to_player(&self, range: NumberRange) -> Result<Player, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let raw = self.number.trim();
        let number: i64 = raw
            .parse()
            .map_err(|_| FormError::InvalidNumber(raw.to_string()))?;

        if !range.contains(number) {
            return Err(FormError::NumberOutOfRange {
                value: number,
                min: range.min,
                max: range.max,
            });
        }

        Ok(Player::new(name, number))
    }

    /// Package the inputs into an add request.
    pub fn submit(&self, range: NumberRange) -> Result<RosterAction, FormError> {
        self.to_player(range).map(add_player)
    }

    /// Clear both inputs.
    pub fn reset(&mut self) {
        self.name.clear();
        self.number.clear();
    }
}
