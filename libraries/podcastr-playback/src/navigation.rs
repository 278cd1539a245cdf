//! Navigation policy for next/previous
//!
//! Sequential moves step to the adjacent index. Shuffle only affects the
//! forward direction: "next" picks a uniformly random index (the current one
//! included), while "previous" always steps back by one.

use rand::Rng;

/// Whether a forward move is possible
///
/// Shuffle makes "next" available anywhere in a queue of two or more
/// episodes; a single-episode queue never has a next.
pub fn has_next(current: usize, len: usize, shuffling: bool) -> bool {
    (shuffling && len > 1) || current + 1 < len
}

/// Whether a backward move is possible
pub fn has_previous(current: usize, len: usize) -> bool {
    current > 0 && current < len
}

/// Pick the index "next" moves to, or None when blocked
pub fn next_index<R: Rng + ?Sized>(
    current: usize,
    len: usize,
    shuffling: bool,
    rng: &mut R,
) -> Option<usize> {
    if shuffling {
        // Repeats allowed, including landing on the current index
        if len > 1 {
            Some(rng.gen_range(0..len))
        } else {
            None
        }
    } else if current + 1 < len {
        Some(current + 1)
    } else {
        None
    }
}

/// Pick the index "previous" moves to, or None when blocked
pub fn previous_index(current: usize, len: usize) -> Option<usize> {
    has_previous(current, len).then(|| current - 1)
}
