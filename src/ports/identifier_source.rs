use crate::BeverageId;

/// Supplies identifiers for freshly brewed beverages.
pub trait IdentifierSource {
    /// Returns the next identifier. Values may repeat.
    fn next_id(&mut self) -> BeverageId;
}
