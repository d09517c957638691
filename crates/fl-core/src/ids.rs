//! Agent identifier.

use std::fmt;

/// Index of a boid in SoA storage.  Also serves as the exclusion handle that
/// keeps an agent out of its own neighbor context.
///
/// Ids are assigned densely from zero by `AgentStoreBuilder` and never reused,
/// so `.index()` is always a valid index into every SoA `Vec` of the store
/// that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
