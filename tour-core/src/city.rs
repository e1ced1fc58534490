//! City identifier.

use std::fmt;

/// Dense zero-based city handle, assigned by [`Tour::add_city`](crate::Tour::add_city)
/// in first-seen order. Ids are never reused or renumbered.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CityId(usize);

impl CityId {
    pub(crate) fn new(index: usize) -> Self {
        CityId(index)
    }

    /// Position of this city in its tour.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
