//! Picking one professor out of a result list

use crate::types::{FullProfessor, PartialProfessor, Professor};

/// Anything with a rating count to rank by
pub trait Rated {
    fn num_ratings(&self) -> u32;
}

impl Rated for Professor {
    fn num_ratings(&self) -> u32 {
        Professor::num_ratings(self)
    }
}

impl Rated for FullProfessor {
    fn num_ratings(&self) -> u32 {
        self.num_ratings
    }
}

impl Rated for PartialProfessor {
    fn num_ratings(&self) -> u32 {
        self.num_ratings
    }
}

/// The item with the most ratings
///
/// Single pass, no sorting. A candidate replaces the current best only
/// when strictly greater, so ties keep the earliest item.
pub fn most_rated<T, I>(items: I) -> Option<T>
where
    T: Rated,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<T> = None;
    for item in items {
        if best
            .as_ref()
            .is_none_or(|current| item.num_ratings() > current.num_ratings())
        {
            best = Some(item);
        }
    }
    best
}
