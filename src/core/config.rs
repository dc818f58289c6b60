//! Game configuration.
//!
//! A `MatchConfig` fixes the dimensions of a game: how many attributes each
//! card has, how many values each attribute takes, and how the field is sized.
//! The match size is always `num_attr_vals`: a match is a group of cards in
//! which every attribute is either uniform or takes every value once.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Largest supported number of values per attribute.
///
/// The values seen in each dimension of a candidate are tracked as bits of a
/// `u64`.
pub const MAX_ATTR_VALS: u32 = 64;

/// Largest supported universe, in cards.
///
/// Every card is generated up front and every field is scanned exhaustively,
/// so larger games are not playable.
pub const MAX_UNIVERSE_SIZE: u32 = 1 << 20;

/// Dimensions of a match game.
///
/// ## Usage
///
/// ```
/// use trigo::core::MatchConfig;
///
/// let config = MatchConfig::standard();
/// assert_eq!(config.universe_size(), Some(81));
/// assert_eq!(config.match_size(), 3);
///
/// let big = MatchConfig::new(4, 4, 16, 4).with_field_size(20);
/// assert_eq!(big.field_size, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Attributes per card.
    pub num_attrs: u32,

    /// Distinct values per attribute; also the number of cards in a match.
    pub num_attr_vals: u32,

    /// Nominal number of field slots.
    pub field_size: u32,

    /// Slots added whenever the field holds no match and cards remain.
    pub field_expand: u32,
}

impl MatchConfig {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(num_attrs: u32, num_attr_vals: u32, field_size: u32, field_expand: u32) -> Self {
        Self {
            num_attrs,
            num_attr_vals,
            field_size,
            field_expand,
        }
    }

    /// The classic game: 4 attributes with 3 values each (81 cards),
    /// 12 slots, expanding by 3.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(4, 3, 12, 3)
    }

    /// Set the nominal field size.
    #[must_use]
    pub fn with_field_size(mut self, field_size: u32) -> Self {
        self.field_size = field_size;
        self
    }

    /// Set the expansion step.
    #[must_use]
    pub fn with_field_expand(mut self, field_expand: u32) -> Self {
        self.field_expand = field_expand;
        self
    }

    /// Number of cards in a match.
    #[must_use]
    pub fn match_size(&self) -> usize {
        self.num_attr_vals as usize
    }

    /// Number of cards in the universe, or `None` if it overflows `u32`.
    #[must_use]
    pub fn universe_size(&self) -> Option<u32> {
        self.num_attr_vals.checked_pow(self.num_attrs)
    }

    /// Check that every dimension is usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.num_attrs == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "num_attrs must be positive",
            });
        }
        if self.num_attr_vals == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "num_attr_vals must be positive",
            });
        }
        if self.num_attr_vals > MAX_ATTR_VALS {
            return Err(EngineError::InvalidConfig {
                reason: "num_attr_vals must be at most 64",
            });
        }
        if self.field_size == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "field_size must be positive",
            });
        }
        if self.field_expand == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "field_expand must be positive",
            });
        }
        if !self.universe_size().is_some_and(|size| size <= MAX_UNIVERSE_SIZE) {
            return Err(EngineError::UniverseTooLarge {
                num_attrs: self.num_attrs,
                num_attr_vals: self.num_attr_vals,
            });
        }
        Ok(())
    }

    /// Whether `len` is a field length this config can produce.
    #[must_use]
    pub fn is_valid_field_len(&self, len: usize) -> bool {
        let base = self.field_size as usize;
        len >= base && (len - base) % self.field_expand as usize == 0
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard() {
        let config = MatchConfig::standard();
        assert_eq!(config, MatchConfig::new(4, 3, 12, 3));
        assert_eq!(config.universe_size(), Some(81));
        assert_eq!(config.match_size(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(MatchConfig::default(), MatchConfig::standard());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::standard().with_field_size(9).with_field_expand(6);
        assert_eq!(config.field_size, 9);
        assert_eq!(config.field_expand, 6);
        assert_eq!(config.num_attrs, 4);
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        assert!(matches!(
            MatchConfig::new(0, 3, 12, 3).validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(matches!(
            MatchConfig::new(4, 0, 12, 3).validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(matches!(
            MatchConfig::new(4, 3, 0, 3).validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(matches!(
            MatchConfig::new(4, 3, 12, 0).validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_too_many_values() {
        assert!(MatchConfig::new(1, 64, 64, 1).validate().is_ok());
        assert!(matches!(
            MatchConfig::new(1, 65, 65, 1).validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_huge_universe() {
        let config = MatchConfig::new(40, 3, 12, 3);
        assert_eq!(config.universe_size(), None);
        assert!(matches!(
            config.validate(),
            Err(EngineError::UniverseTooLarge { num_attrs: 40, num_attr_vals: 3 })
        ));
    }

    #[test]
    fn test_validate_caps_universe_size() {
        // 2^20 cards is the largest accepted universe
        assert!(MatchConfig::new(20, 2, 12, 2).validate().is_ok());
        assert!(MatchConfig::new(10, 4, 12, 4).validate().is_ok());

        // Fits in u32 but is far too large to generate
        let config = MatchConfig::new(5, 64, 1, 1);
        assert_eq!(config.universe_size(), Some(1 << 30));
        assert!(matches!(
            config.validate(),
            Err(EngineError::UniverseTooLarge { num_attrs: 5, num_attr_vals: 64 })
        ));
        assert!(MatchConfig::new(21, 2, 12, 2).validate().is_err());
    }

    #[test]
    fn test_valid_field_len() {
        let config = MatchConfig::standard();
        assert!(config.is_valid_field_len(12));
        assert!(config.is_valid_field_len(15));
        assert!(config.is_valid_field_len(21));
        assert!(!config.is_valid_field_len(11));
        assert!(!config.is_valid_field_len(13));
    }

    #[test]
    fn test_config_serde() {
        let config = MatchConfig::new(3, 4, 16, 4);
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
