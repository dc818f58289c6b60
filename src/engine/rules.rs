//! The match rule.
//!
//! A group of `num_attr_vals` cards is a match when, in every attribute
//! dimension, the cards either all agree or together take every possible
//! value exactly once. With 3 values this is the classic Set rule.

use smallvec::{smallvec, SmallVec};

use crate::cards::Card;

/// Check whether `cards` form a match among `num_attr_vals`-valued attributes.
///
/// Returns false if the group size is not `num_attr_vals`, if any card is
/// blank, or if any attribute value is out of range. `num_attr_vals` must be
/// at most 64.
#[must_use]
pub fn is_match<'a, I>(cards: I, num_attrs: usize, num_attr_vals: u32) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    // One bit per value seen, per dimension
    let mut seen: SmallVec<[u64; 4]> = smallvec![0; num_attrs];
    let mut count = 0usize;

    for card in cards {
        if card.is_blank() || card.attrs().len() != num_attrs {
            return false;
        }
        for (mask, &v) in seen.iter_mut().zip(card.attrs()) {
            if u32::from(v) >= num_attr_vals {
                return false;
            }
            *mask |= 1u64 << v;
        }
        count += 1;
    }

    if count != num_attr_vals as usize {
        return false;
    }

    let all_values = if num_attr_vals >= 64 {
        u64::MAX
    } else {
        (1u64 << num_attr_vals) - 1
    };
    seen.iter().all(|&mask| mask.count_ones() == 1 || mask == all_values)
}
