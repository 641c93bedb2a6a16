// src/factories/mod.rs

mod american_factory;
mod italian_factory;

pub use american_factory::AmericanFactory;
pub use italian_factory::ItalianFactory;

use crate::{BeverageFactory, GeneratorConfig, ShopStyle, identifiers::IdentifierGenerator};

/// Builds the factory for a shop style.
///
/// Each factory gets its own identifier generator, seeded from the
/// configuration when a seed is set.
pub fn factory_for(style: ShopStyle, generator: &GeneratorConfig) -> Box<dyn BeverageFactory> {
    let ids = IdentifierGenerator::from_seed(generator.seed);
    match style {
        ShopStyle::Italian => Box::new(ItalianFactory::with_source(ids)),
        ShopStyle::American => Box::new(AmericanFactory::with_source(ids)),
    }
}
