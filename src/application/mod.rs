mod coffee_shop;
mod factory_registry;

pub use coffee_shop::{CoffeeShop, PROMPT, SessionReport};
pub use factory_registry::{FactoryRegistry, RegistrySlot};
