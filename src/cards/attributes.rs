//! The four card attributes and their three values each.
//!
//! Every attribute is a closed enum with exactly three variants, so a card
//! with an out-of-domain value cannot be constructed. Each enum carries:
//!
//! - `ALL`: the variants in their stable enumeration order
//! - `index()` / `from_index()`: position in that order (0, 1, 2)
//! - `Display` / `FromStr`: the labels used on card faces and over the wire

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SetError;

/// Declares one three-valued attribute enum plus its conversions.
///
/// The `ALL` array is typed `[Self; 3]`, so a fourth variant fails to compile.
macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All values in enumeration order.
            pub const ALL: [$name; 3] = [$($name::$variant),+];

            /// Position of this value in `ALL`.
            #[must_use]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Value at `index` in `ALL`, if in range.
            #[must_use]
            pub fn from_index(index: u8) -> Option<Self> {
                Self::ALL.get(index as usize).copied()
            }

            /// Label printed on the card face.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = SetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let text = s.trim();
                $(
                    if text.eq_ignore_ascii_case($label) $(|| text.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err(SetError::Parse {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

attribute_enum! {
    /// How many symbols are printed on the card.
    Count, "count" {
        One = "1" | "one",
        Two = "2" | "two",
        Three = "3" | "three",
    }
}

attribute_enum! {
    /// Fill of the symbols.
    Shading, "shading" {
        Solid = "solid",
        Striped = "striped",
        /// Outline only. Older card databases call this "open".
        Empty = "empty" | "open",
    }
}

attribute_enum! {
    Color, "color" {
        Red = "red",
        Green = "green",
        Purple = "purple",
    }
}

attribute_enum! {
    Symbol, "symbol" {
        Oval = "oval",
        Diamond = "diamond",
        Squiggle = "squiggle",
    }
}

impl Count {
    /// Numeric value (1-3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.index() + 1
    }
}

/// Names one of the four attributes, for per-attribute checks and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Count,
    Shading,
    Color,
    Symbol,
}

impl Attribute {
    /// All attributes in card-index order (most significant first).
    pub const ALL: [Attribute; 4] = [
        Attribute::Count,
        Attribute::Shading,
        Attribute::Color,
        Attribute::Symbol,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Count => "count",
            Attribute::Shading => "shading",
            Attribute::Color => "color",
            Attribute::Symbol => "symbol",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
