//! Segment-relocation neighbor operator.
//!
//! Cuts a contiguous run of items out of the sequence and reinserts it
//! somewhere else. Covers swaps of adjacent items (length-1 segments moved
//! by one slot), single-item insertion moves, and block moves in one
//! operator.
//!
//! # Guarantee
//!
//! For any sequence with at least two unequal items, [`perturb`] returns an
//! arrangement different from its input. Sequences of length 0 or 1, and
//! sequences whose items are all equal, have no other arrangement and are
//! returned unchanged.

use crate::rng::RandomSource;

/// Whole-move redraws attempted before falling back to a deterministic shift.
///
/// A redraw is only needed when duplicates make a relocation reproduce the
/// input, or when the drawn segment spans the whole sequence.
pub const MAX_REDRAWS: usize = 32;

/// Returns a neighbor of `sequence` produced by relocating a random segment.
///
/// # Algorithm
///
/// 1. `start` uniform in `[0, len)`
/// 2. `length` uniform in `[1, len - start]`
/// 3. Remove `sequence[start..start + length]`, leaving a remainder of
///    `len - length` items
/// 4. Target uniform over the insertion points `[0, len - length]`,
///    excluding `start` (which would rebuild the input)
/// 5. Insert the segment at the target
///
/// If the segment covers the whole sequence, or duplicates make the result
/// equal the input, the move is redrawn (at most [`MAX_REDRAWS`] times).
/// After that the first item that differs from its right neighbor is moved
/// one slot right.
///
/// # Draws
///
/// Each attempt draws `index(len)`, `index(len - start)` and, unless the
/// segment spans everything, `index(len - length)`.
///
/// # Complexity
/// O(n) per attempt
pub fn perturb<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: RandomSource + ?Sized,
{
    if sequence.windows(2).all(|w| w[0] == w[1]) {
        return sequence.to_vec();
    }

    for _ in 0..MAX_REDRAWS {
        if let Some(candidate) = relocate_random_segment(sequence, rng) {
            if candidate.as_slice() != sequence {
                return candidate;
            }
        }
    }

    shift_first_distinct(sequence)
}

/// Moves `sequence[start..start + length]` so that it begins at `target`
/// within the remainder left after removing it.
///
/// `target == start` reproduces the input.
///
/// Callers keep `1 <= length`, `start + length <= len` and
/// `target <= len - length`; the asserts guard those bounds.
pub(crate) fn relocate<T: Clone>(sequence: &[T], start: usize, length: usize, target: usize) -> Vec<T> {
    let len = sequence.len();
    assert!(length >= 1, "segment must not be empty");
    assert!(start + length <= len, "segment out of bounds");
    assert!(target <= len - length, "target {target} beyond remainder");

    let end = start + length;
    let remainder = sequence[..start].iter().chain(&sequence[end..]);

    let mut out = Vec::with_capacity(len);
    out.extend(remainder.clone().take(target).cloned());
    out.extend_from_slice(&sequence[start..end]);
    out.extend(remainder.skip(target).cloned());
    out
}

/// One random relocation. `None` when the segment is the whole sequence.
fn relocate_random_segment<T, R>(sequence: &[T], rng: &mut R) -> Option<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let len = sequence.len();
    let start = rng.index(len);
    let length = 1 + rng.index(len - start);
    let remainder_len = len - length;
    if remainder_len == 0 {
        return None;
    }

    // remainder_len + 1 insertion points, minus the original one
    let raw = rng.index(remainder_len);
    let target = if raw >= start { raw + 1 } else { raw };
    Some(relocate(sequence, start, length, target))
}

fn shift_first_distinct<T: Clone + PartialEq>(sequence: &[T]) -> Vec<T> {
    sequence
        .windows(2)
        .position(|w| w[0] != w[1])
        .map_or_else(|| sequence.to_vec(), |i| relocate(sequence, i, 1, i + 1))
}
