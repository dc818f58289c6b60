//! The match engine: deck, field, and match detection.
//!
//! ## Field layout
//!
//! The field is a row of slots. The first `field_size` slots are the base
//! region; when the field holds no match and cards remain in the deck, it
//! grows by `field_expand` slots at a time. Its length is always
//! `field_size + k * field_expand`.
//!
//! ## Turn protocol
//!
//! Callers resolve a found match with `remove` followed by `deal`. `remove`
//! only empties slots; `deal` compacts the expanded region, refills empty
//! slots, and grows the field until a match exists or the deck runs out.

use smallvec::SmallVec;

use crate::cards::{Card, Universe};
use crate::core::{EngineError, GameRng, MatchConfig};

use super::combinations::{Candidate, Combinations};
use super::rules;
use super::state::EngineState;

/// A single game: the card universe, the shuffled deck, and the field.
///
/// ## Usage
///
/// ```
/// use trigo::engine::MatchEngine;
///
/// let mut engine = MatchEngine::standard_with_seed(42);
/// engine.deal();
/// assert!(engine.num_matches() >= 1);
///
/// let found = engine.find_match().unwrap();
/// assert!(engine.is_match(&found));
///
/// engine.remove(&found);
/// engine.deal();
/// assert_eq!(engine.matches_found(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    universe: Universe,
    /// Undealt cards, front first.
    deck: Vec<u32>,
    /// `None` is an empty slot.
    field: Vec<Option<u32>>,
    matches_found: u32,
    rng: GameRng,
}

impl MatchEngine {
    /// Create a shuffled game with an entropy-seeded RNG.
    ///
    /// Panics if the configuration is invalid (see `MatchConfig::validate`).
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create a shuffled game with a deterministic RNG.
    ///
    /// Panics if the configuration is invalid.
    #[must_use]
    pub fn with_seed(config: MatchConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a shuffled game, reporting an invalid configuration as an error.
    pub fn try_new(config: MatchConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(config, GameRng::from_entropy()))
    }

    /// The classic 81-card game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(MatchConfig::standard())
    }

    /// The classic 81-card game with a deterministic RNG.
    #[must_use]
    pub fn standard_with_seed(seed: u64) -> Self {
        Self::with_seed(MatchConfig::standard(), seed)
    }

    fn with_rng(config: MatchConfig, rng: GameRng) -> Self {
        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        Self::build(config, rng)
    }

    fn build(config: MatchConfig, rng: GameRng) -> Self {
        let mut engine = Self {
            config,
            universe: Universe::generate(config.num_attrs, config.num_attr_vals),
            deck: Vec::new(),
            field: Vec::new(),
            matches_found: 0,
            rng,
        };
        engine.shuffle();
        engine
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Number of cards in the universe.
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.universe.len()
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Current number of field slots, empty or not.
    #[must_use]
    pub fn field_len(&self) -> usize {
        self.field.len()
    }

    /// Number of field slots holding a card.
    #[must_use]
    pub fn occupied_slots(&self) -> usize {
        self.field.iter().filter(|slot| slot.is_some()).count()
    }

    /// Matches removed since the last shuffle.
    #[must_use]
    pub fn matches_found(&self) -> u32 {
        self.matches_found
    }

    /// True when the deck is empty and the field holds no match.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.find_match().is_none()
    }

    /// Card `index` of the universe, or a blank if out of range.
    #[must_use]
    pub fn card(&self, index: usize) -> Card {
        self.universe.card(index)
    }

    /// Card in field slot `slot`, or a blank if out of range or empty.
    #[must_use]
    pub fn field_card(&self, slot: usize) -> Card {
        match self.field.get(slot) {
            Some(Some(card)) => self.card(*card as usize),
            _ => Card::blank(),
        }
    }

    /// Snapshot of every field slot, blanks for empty ones.
    #[must_use]
    pub fn field(&self) -> Vec<Card> {
        (0..self.field.len()).map(|slot| self.field_card(slot)).collect()
    }

    // === Mutation ===

    /// Refill and shuffle the deck and clear the field.
    ///
    /// Any previously held slot indices now refer to empty slots.
    pub fn shuffle(&mut self) {
        self.deck = self.rng.permutation(self.universe.len() as u32);
        self.field = vec![None; self.config.field_size as usize];
        self.matches_found = 0;
    }

    /// Empty the slots of a found match.
    ///
    /// `slots` must hold exactly `num_attr_vals` distinct indices; anything
    /// else is rejected without touching the field and returns false.
    /// Out-of-range indices are ignored. `matches_found` counts an accepted
    /// remove only if it emptied at least one occupied slot. The field is not
    /// compacted or refilled until the next `deal`.
    pub fn remove(&mut self, slots: &[usize]) -> bool {
        if !self.is_candidate_shape(slots) {
            return false;
        }
        let mut cleared = false;
        for &slot in slots {
            if let Some(entry) = self.field.get_mut(slot) {
                cleared |= entry.take().is_some();
            }
        }
        if cleared {
            self.matches_found += 1;
        }
        true
    }

    /// Deal cards into empty slots, growing the field until a match is
    /// available or the deck is empty.
    pub fn deal(&mut self) {
        self.tidy_field();
        self.add_cards();
        while self.find_match().is_none() && !self.deck.is_empty() {
            self.expand_field();
            self.add_cards();
        }
    }

    /// Add `field_expand` empty slots.
    fn expand_field(&mut self) {
        let len = self.field.len() + self.config.field_expand as usize;
        self.field.resize(len, None);
    }

    /// Move cards from the expanded region into empty base slots, then shrink
    /// the expanded region to the smallest multiple of `field_expand` that
    /// still holds the rest.
    fn tidy_field(&mut self) {
        let base = self.config.field_size as usize;
        if self.field.len() <= base {
            return;
        }

        let extra = self.field.split_off(base);
        let mut leftover = Vec::new();
        let mut free = 0;
        for card in extra.into_iter().flatten() {
            match self.field[free..].iter().position(Option::is_none) {
                Some(offset) => {
                    free += offset;
                    self.field[free] = Some(card);
                }
                None => {
                    free = base;
                    leftover.push(Some(card));
                }
            }
        }

        let step = self.config.field_expand as usize;
        let extra_len = leftover.len().div_ceil(step) * step;
        leftover.resize(extra_len, None);
        self.field.extend(leftover);
    }

    /// Fill empty slots from the front of the deck.
    fn add_cards(&mut self) {
        let mut drawn = 0;
        for slot in self.field.iter_mut().filter(|slot| slot.is_none()) {
            let Some(&card) = self.deck.get(drawn) else {
                break;
            };
            *slot = Some(card);
            drawn += 1;
        }
        self.deck.drain(..drawn);
    }

    // === Matching ===

    /// Whether the cards in `candidate` slots form a match.
    ///
    /// False if the candidate does not name exactly `num_attr_vals` distinct
    /// slots, or if any slot is out of range or empty.
    #[must_use]
    pub fn is_match(&self, candidate: &[usize]) -> bool {
        if !self.is_candidate_shape(candidate) {
            return false;
        }
        let mut cards: SmallVec<[&Card; 4]> = SmallVec::new();
        for &slot in candidate {
            let Some(card) = self
                .field
                .get(slot)
                .copied()
                .flatten()
                .and_then(|c| self.universe.get(c as usize))
            else {
                return false;
            };
            cards.push(card);
        }
        rules::is_match(cards, self.config.num_attrs as usize, self.config.num_attr_vals)
    }

    /// Exactly `num_attr_vals` slots, none repeated.
    fn is_candidate_shape(&self, slots: &[usize]) -> bool {
        slots.len() == self.config.match_size()
            && slots
                .iter()
                .enumerate()
                .all(|(i, slot)| !slots[..i].contains(slot))
    }

    /// Every matching slot combination on the field, in lexicographic order.
    pub fn iter_matches(&self) -> impl Iterator<Item = Candidate> + '_ {
        Combinations::new(self.field.len(), self.config.match_size())
            .filter(move |candidate| self.is_match(candidate))
    }

    /// Every matching slot combination on the field.
    #[must_use]
    pub fn matches(&self) -> Vec<Candidate> {
        self.iter_matches().collect()
    }

    /// The first matching slot combination, if any.
    #[must_use]
    pub fn find_match(&self) -> Option<Candidate> {
        self.iter_matches().next()
    }

    /// Number of matches on the field.
    #[must_use]
    pub fn num_matches(&self) -> usize {
        self.iter_matches().count()
    }

    // === Persistence ===

    /// Capture the full mutable state.
    #[must_use]
    pub fn snapshot(&self) -> EngineState {
        EngineState {
            config: self.config,
            deck: self.deck.clone(),
            field: self.field.clone(),
            matches_found: self.matches_found,
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    pub fn from_snapshot(state: EngineState) -> Result<Self, EngineError> {
        state.validate()?;
        let EngineState {
            config,
            deck,
            field,
            matches_found,
            rng,
        } = state;
        Ok(Self {
            config,
            universe: Universe::generate(config.num_attrs, config.num_attr_vals),
            deck,
            field,
            matches_found,
            rng: GameRng::from_state(&rng),
        })
    }

    /// Serialize the full mutable state to an opaque blob.
    pub fn state(&self) -> Result<Vec<u8>, EngineError> {
        self.snapshot().to_bytes()
    }

    /// Rebuild an engine from a blob produced by `state`.
    pub fn from_state(bytes: &[u8]) -> Result<Self, EngineError> {
        Self::from_snapshot(EngineState::from_bytes(bytes)?)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::standard()
    }
}
