//! Card values and their canonical identifiers.
//!
//! A `Card` is the 4-tuple of attribute values. A `CardId` is the same card
//! packed into one byte: the attribute indices read as a base-3 number,
//! count most significant. The mapping is a bijection over `0..81`, so the
//! two can be converted freely and compared by value.
//!
//! ```
//! use set_engine::cards::{Card, CardId, Color, Count, Shading, Symbol};
//!
//! let card = Card::new(Count::Two, Shading::Solid, Color::Red, Symbol::Oval);
//! assert_eq!(card.id().raw(), 27);
//! assert_eq!(card.to_string(), "2 solid red oval");
//! assert_eq!(CardId::new(27).unwrap().card(), card);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Shading, Symbol};
use crate::error::{Result, SetError};

/// Number of distinct cards.
pub const DECK_SIZE: usize = 81;

/// Canonical card identifier in `0..81`.
///
/// The only way to obtain one is through a range check, so every `CardId`
/// names a real card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(pub(crate) u8);

impl CardId {
    /// Create an ID, rejecting anything outside `0..81`.
    pub fn new(raw: u32) -> Result<Self> {
        if (raw as usize) < DECK_SIZE {
            Ok(Self(raw as u8))
        } else {
            Err(SetError::UnknownCard(raw))
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All 81 IDs in ascending order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }

    /// Decode into attribute values.
    #[must_use]
    pub fn card(self) -> Card {
        let raw = self.0 as usize;
        Card {
            count: Count::ALL[raw / 27],
            shading: Shading::ALL[raw / 9 % 3],
            color: Color::ALL[raw / 3 % 3],
            symbol: Symbol::ALL[raw % 3],
        }
    }
}

impl TryFrom<u8> for CardId {
    type Error = SetError;

    fn try_from(raw: u8) -> Result<Self> {
        Self::new(u32::from(raw))
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> u8 {
        id.0
    }
}

impl FromStr for CardId {
    type Err = SetError;

    /// Parses the decimal form sent by clients, e.g. `"17"`.
    fn from_str(s: &str) -> Result<Self> {
        let raw: u32 = s.trim().parse().map_err(|_| SetError::Parse {
            kind: "card id",
            value: s.to_string(),
        })?;
        Self::new(raw)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable card: one value for each of the four attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub count: Count,
    pub shading: Shading,
    pub color: Color,
    pub symbol: Symbol,
}

impl Card {
    #[must_use]
    pub const fn new(count: Count, shading: Shading, color: Color, symbol: Symbol) -> Self {
        Self {
            count,
            shading,
            color,
            symbol,
        }
    }

    /// Build a card from attribute indices in `Attribute::ALL` order.
    ///
    /// Returns `None` if any index is 3 or more.
    #[must_use]
    pub fn from_indices(indices: [u8; 4]) -> Option<Self> {
        Some(Self {
            count: Count::from_index(indices[0])?,
            shading: Shading::from_index(indices[1])?,
            color: Color::from_index(indices[2])?,
            symbol: Symbol::from_index(indices[3])?,
        })
    }

    /// Index (0-2) of this card's value for `attribute`.
    #[must_use]
    pub const fn attribute(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Count => self.count.index(),
            Attribute::Shading => self.shading.index(),
            Attribute::Color => self.color.index(),
            Attribute::Symbol => self.symbol.index(),
        }
    }

    /// All four attribute indices in `Attribute::ALL` order.
    #[must_use]
    pub const fn indices(&self) -> [u8; 4] {
        [
            self.count.index(),
            self.shading.index(),
            self.color.index(),
            self.symbol.index(),
        ]
    }

    /// Canonical identifier of this card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        let [count, shading, color, symbol] = self.indices();
        CardId(count * 27 + shading * 9 + color * 3 + symbol)
    }
}

impl From<CardId> for Card {
    fn from(id: CardId) -> Self {
        id.card()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.shading, self.color, self.symbol)
    }
}

impl FromStr for Card {
    type Err = SetError;

    /// Parses the face text, `"<count> <shading> <color> <symbol>"`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [count, shading, color, symbol] = parts.as_slice() else {
            return Err(SetError::Parse {
                kind: "card",
                value: s.to_string(),
            });
        };
        Ok(Self {
            count: count.parse()?,
            shading: shading.parse()?,
            color: color.parse()?,
            symbol: symbol.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_bijection() {
        for id in CardId::all() {
            assert_eq!(id.card().id(), id);
        }
        assert_eq!(CardId::all().count(), DECK_SIZE);
    }

    #[test]
    fn test_id_layout() {
        let first = CardId::new(0).unwrap().card();
        assert_eq!(first, Card::new(Count::One, Shading::Solid, Color::Red, Symbol::Oval));

        let last = CardId::new(80).unwrap().card();
        assert_eq!(
            last,
            Card::new(Count::Three, Shading::Empty, Color::Purple, Symbol::Squiggle)
        );

        let card = Card::new(Count::One, Shading::Striped, Color::Green, Symbol::Diamond);
        assert_eq!(card.id().raw(), 9 + 3 + 1);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(CardId::new(81), Err(SetError::UnknownCard(81)));
        assert!(CardId::try_from(200u8).is_err());
    }

    #[test]
    fn test_parse_card_id() {
        assert_eq!("17".parse::<CardId>().unwrap().raw(), 17);
        assert_eq!(" 0 ".parse::<CardId>().unwrap().raw(), 0);
        assert_eq!("81".parse::<CardId>(), Err(SetError::UnknownCard(81)));
        assert!(matches!(
            "seven".parse::<CardId>(),
            Err(SetError::Parse { kind: "card id", .. })
        ));
    }

    #[test]
    fn test_card_id_serde_is_checked() {
        let id = CardId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<CardId>("42").unwrap(), id);
        assert!(serde_json::from_str::<CardId>("81").is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let card = Card::new(Count::Three, Shading::Empty, Color::Green, Symbol::Squiggle);
        assert_eq!(card.to_string(), "3 empty green squiggle");
        assert_eq!("3 empty green squiggle".parse::<Card>(), Ok(card));
        assert_eq!("3 open green squiggle".parse::<Card>(), Ok(card));
        assert_eq!(format!("{}", card.id()), "Card(77)");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "1 solid red".parse::<Card>(),
            Err(SetError::Parse { kind: "card", .. })
        ));
        assert!(matches!(
            "1 solid blue oval".parse::<Card>(),
            Err(SetError::Parse { kind: "color", .. })
        ));
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(
            Card::from_indices([1, 0, 2, 1]),
            Some(Card::new(Count::Two, Shading::Solid, Color::Purple, Symbol::Diamond))
        );
        assert_eq!(Card::from_indices([0, 3, 0, 0]), None);
    }

    #[test]
    fn test_attribute_lookup() {
        let card = Card::new(Count::Two, Shading::Empty, Color::Red, Symbol::Diamond);
        assert_eq!(card.attribute(Attribute::Count), 1);
        assert_eq!(card.attribute(Attribute::Shading), 2);
        assert_eq!(card.attribute(Attribute::Color), 0);
        assert_eq!(card.attribute(Attribute::Symbol), 1);
        assert_eq!(card.indices(), [1, 2, 0, 1]);
    }
}
