//! Engine snapshots for save/restore.
//!
//! The snapshot holds the configuration scalars, the deck and field contents,
//! the matches-found counter and the RNG position. The universe is not stored:
//! it is regenerated from the configuration on restore.
//!
//! This is a same-version round trip. There is no versioning or migration.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRngState, MatchConfig};

/// Complete mutable state of a `MatchEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub config: MatchConfig,

    /// Undealt cards, front first.
    pub deck: Vec<u32>,

    /// Field slots; `None` is an empty slot.
    pub field: Vec<Option<u32>>,

    pub matches_found: u32,

    pub rng: GameRngState,
}

impl EngineState {
    /// Encode as an opaque byte blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(EngineError::Encode)
    }

    /// Decode a blob produced by `to_bytes`.
    ///
    /// Only decodes; see `validate` for the invariant checks.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(EngineError::Decode)
    }

    /// Check that this snapshot describes a reachable engine state.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.config.validate()?;

        if !self.config.is_valid_field_len(self.field.len()) {
            return Err(EngineError::CorruptState {
                reason: "field length is not field_size plus a multiple of field_expand",
            });
        }

        // validate() guarantees the universe size fits
        let universe = self.config.universe_size().unwrap_or(0) as usize;
        let mut seen = vec![false; universe];
        let cards = self.deck.iter().chain(self.field.iter().flatten());
        for &card in cards {
            let Some(slot) = seen.get_mut(card as usize) else {
                return Err(EngineError::CorruptState {
                    reason: "card index outside the universe",
                });
            };
            if *slot {
                return Err(EngineError::CorruptState {
                    reason: "card appears more than once",
                });
            }
            *slot = true;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EngineState {
        EngineState {
            config: MatchConfig::new(2, 3, 3, 3),
            deck: vec![4, 5, 6, 7, 8],
            field: vec![Some(0), None, Some(2), Some(3), None, Some(1)],
            matches_found: 2,
            rng: GameRngState {
                seed: 9,
                word_pos: 40,
            },
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let state = sample();
        let bytes = state.to_bytes().unwrap();
        assert_eq!(EngineState::from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn test_json_round_trip() {
        let state = sample();
        let json = serde_json::to_string(&state).unwrap();
        let back: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_valid_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_truncated_bytes() {
        let bytes = sample().to_bytes().unwrap();
        let result = EngineState::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(EngineError::Decode(_))));
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(EngineState::from_bytes(&[]).is_err());
        assert!(EngineState::from_bytes(&[0xff; 3]).is_err());
    }

    #[test]
    fn test_rejects_bad_field_length() {
        let mut state = sample();
        state.field.push(None);
        assert!(matches!(state.validate(), Err(EngineError::CorruptState { .. })));
    }

    #[test]
    fn test_rejects_unknown_card() {
        let mut state = sample();
        state.deck.push(9);
        assert!(matches!(state.validate(), Err(EngineError::CorruptState { .. })));
    }

    #[test]
    fn test_rejects_duplicate_card() {
        let mut state = sample();
        state.field[1] = Some(4);
        assert!(matches!(state.validate(), Err(EngineError::CorruptState { .. })));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut state = sample();
        state.config.field_expand = 0;
        assert!(matches!(state.validate(), Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rejects_oversized_universe() {
        let mut state = sample();
        state.config = MatchConfig::new(5, 64, 1, 1);
        state.deck = vec![0];
        state.field = vec![Some(1)];
        assert!(matches!(state.validate(), Err(EngineError::UniverseTooLarge { .. })));
    }
}
