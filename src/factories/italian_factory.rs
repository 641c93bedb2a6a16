// src/factories/italian_factory.rs

use crate::{
    Beverage, BeverageFactory, IdentifierSource, ShopStyle, identifiers::IdentifierGenerator,
};
use tracing::debug;

/// Factory for the Italian-style shop: every beverage it brews is an Espresso.
#[derive(Debug, Clone)]
pub struct ItalianFactory<S = IdentifierGenerator> {
    ids: S,
}

impl ItalianFactory {
    /// Creates a factory drawing identifiers from OS entropy.
    pub fn new() -> Self {
        Self::with_source(IdentifierGenerator::new())
    }
}

impl Default for ItalianFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdentifierSource> ItalianFactory<S> {
    pub fn with_source(ids: S) -> Self {
        Self { ids }
    }
}

impl<S: IdentifierSource> BeverageFactory for ItalianFactory<S> {
    fn style(&self) -> ShopStyle {
        ShopStyle::Italian
    }

    fn create_beverage(&mut self) -> Beverage {
        let beverage = Beverage::new(self.ids.next_id(), self.style().beverage_kind());
        debug!(
            id = %beverage.id(),
            kind = %beverage.kind(),
            brewed_at = %beverage.brewed_at(),
            "brewed beverage"
        );
        beverage
    }
}
