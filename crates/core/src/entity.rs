//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identity value. Two entities with equal ids are the same record even if
    /// their other attributes differ.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identity.
    ///
    /// Returned by value: identities may be derived from attributes (e.g. a
    /// case-folded name) rather than stored.
    fn id(&self) -> Self::Id;
}
