// src/ports/mod.rs

pub use beverage_factory::BeverageFactory;
pub use identifier_source::IdentifierSource;

pub mod beverage_factory;
pub mod identifier_source;
