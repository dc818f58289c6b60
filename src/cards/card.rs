//! Cards as seen by callers.
//!
//! A `Card` is either a real card (one value per attribute) or a blank
//! placeholder for an empty field slot. Blanks carry no attributes and never
//! take part in a match.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

/// Attribute values of one card.
///
/// SmallVec keeps the common 3-4 attribute case off the heap.
pub type CardAttrs = SmallVec<[u8; 4]>;

/// A card, or a blank for an empty slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Attribute values, each in `0..num_attr_vals`. Empty for blanks.
    pub attrs: CardAttrs,

    /// True if no card occupies this slot.
    pub blank: bool,
}

impl Card {
    /// Create a card from its attribute values.
    #[must_use]
    pub fn new(attrs: &[u8]) -> Self {
        Self {
            attrs: CardAttrs::from_slice(attrs),
            blank: false,
        }
    }

    /// The blank placeholder.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            attrs: CardAttrs::new(),
            blank: true,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Attribute values (empty for blanks).
    #[must_use]
    pub fn attrs(&self) -> &[u8] {
        &self.attrs
    }

    /// Value of attribute `j`, or `None` for blanks and out-of-range `j`.
    #[must_use]
    pub fn attr(&self, j: usize) -> Option<u8> {
        self.attrs.get(j).copied()
    }
}

impl Default for Card {
    /// The blank placeholder; a real card always has attributes.
    fn default() -> Self {
        Self::blank()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.blank {
            return write!(f, "[ ]");
        }
        write!(f, "[")?;
        for (i, v) in self.attrs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
