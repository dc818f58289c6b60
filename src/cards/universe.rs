//! The card universe: every attribute combination, generated once.
//!
//! Cards are enumerated in mixed-radix order with attribute 0 as the least
//! significant digit: attribute `j` of card `i` is
//! `(i / num_attr_vals^j) % num_attr_vals`.

use super::card::{Card, CardAttrs};

/// All cards of a game, indexed `0..len`.
///
/// ## Example
///
/// ```
/// use trigo::cards::Universe;
///
/// let universe = Universe::generate(4, 3);
/// assert_eq!(universe.len(), 81);
/// assert_eq!(universe.card(1).attrs(), &[1, 0, 0, 0]);
/// assert_eq!(universe.card(3).attrs(), &[0, 1, 0, 0]);
/// assert!(universe.card(81).is_blank());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe {
    cards: Vec<Card>,
}

impl Universe {
    /// Enumerate all `num_attr_vals ^ num_attrs` cards.
    ///
    /// Callers validate the dimensions first (see `MatchConfig::validate`).
    #[must_use]
    pub fn generate(num_attrs: u32, num_attr_vals: u32) -> Self {
        let num_cards = (0..num_attrs).fold(1usize, |n, _| n * num_attr_vals as usize);
        let vals = num_attr_vals as usize;

        let cards = (0..num_cards)
            .map(|i| {
                let mut div = 1usize;
                let attrs: CardAttrs = (0..num_attrs)
                    .map(|_| {
                        let v = (i / div) % vals;
                        div *= vals;
                        v as u8
                    })
                    .collect();
                Card { attrs, blank: false }
            })
            .collect();

        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a card by index, or a blank if out of range.
    #[must_use]
    pub fn card(&self, index: usize) -> Card {
        self.get(index).cloned().unwrap_or_else(Card::blank)
    }

    /// Iterate over all cards in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_size() {
        let universe = Universe::generate(4, 3);
        assert_eq!(universe.len(), 81);
        assert!(!universe.is_empty());
    }

    #[test]
    fn test_mixed_radix_order() {
        let universe = Universe::generate(4, 3);
        assert_eq!(universe.card(0).attrs(), &[0, 0, 0, 0]);
        assert_eq!(universe.card(2).attrs(), &[2, 0, 0, 0]);
        assert_eq!(universe.card(5).attrs(), &[2, 1, 0, 0]);
        assert_eq!(universe.card(27).attrs(), &[0, 0, 0, 1]);
        assert_eq!(universe.card(80).attrs(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_all_cards_distinct() {
        let universe = Universe::generate(3, 4);
        assert_eq!(universe.len(), 64);

        let distinct: HashSet<_> = universe.iter().map(|c| c.attrs().to_vec()).collect();
        assert_eq!(distinct.len(), 64);

        for card in universe.iter() {
            assert_eq!(card.attrs().len(), 3);
            assert!(card.attrs().iter().all(|&v| v < 4));
        }
    }

    #[test]
    fn test_out_of_range_is_blank() {
        let universe = Universe::generate(2, 2);
        assert_eq!(universe.len(), 4);
        assert!(universe.get(4).is_none());
        assert!(universe.card(4).is_blank());
    }

    #[test]
    fn test_single_value_universe() {
        let universe = Universe::generate(5, 1);
        assert_eq!(universe.len(), 1);
        assert_eq!(universe.card(0).attrs(), &[0, 0, 0, 0, 0]);
    }
}
