//! Entity trait: identity across runs.

/// Entity marker + minimal interface.
///
/// Records in this system are identified by name: two entities with the same
/// name are indistinguishable to a lookup.
pub trait Entity {
    /// Returns the name the entity is stored and looked up under.
    fn name(&self) -> &str;
}
