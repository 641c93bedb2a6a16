// src/factories/american_factory.rs

use crate::{
    Beverage, BeverageFactory, IdentifierSource, ShopStyle, identifiers::IdentifierGenerator,
};
use tracing::debug;

/// Factory for the American-style shop: every beverage it brews is a Latte.
#[derive(Debug, Clone)]
pub struct AmericanFactory<S = IdentifierGenerator> {
    ids: S,
}

impl AmericanFactory {
    /// Creates a factory drawing identifiers from OS entropy.
    pub fn new() -> Self {
        Self::with_source(IdentifierGenerator::new())
    }
}

impl Default for AmericanFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdentifierSource> AmericanFactory<S> {
    pub fn with_source(ids: S) -> Self {
        Self { ids }
    }
}

impl<S: IdentifierSource> BeverageFactory for AmericanFactory<S> {
    fn style(&self) -> ShopStyle {
        ShopStyle::American
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
