use crate::{Beverage, BeverageFactory, ShopStyle};
use tracing::{debug, info};

/// Holder of the one factory a shop brews with.
///
/// A registry can only be built around a factory, so there is no unbound
/// registry to create beverages from.
pub struct FactoryRegistry {
    factory: Box<dyn BeverageFactory>,
}

impl FactoryRegistry {
    pub fn new(factory: Box<dyn BeverageFactory>) -> Self {
        Self { factory }
    }

    /// Returns the style of the bound factory.
    pub fn style(&self) -> ShopStyle {
        self.factory.style()
    }

    /// Brews a beverage with the bound factory.
    pub fn create_beverage(&mut self) -> Beverage {
        self.factory.create_beverage()
    }
}

/// Caller-owned slot that holds at most one `FactoryRegistry`.
///
/// The first factory handed to [`RegistrySlot::get_instance`] is bound for
/// the lifetime of the slot. Later factories are dropped.
#[derive(Default)]
pub struct RegistrySlot {
    registry: Option<FactoryRegistry>,
}

impl RegistrySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry, binding `factory` if nothing is bound yet.
    ///
    /// # Arguments
    /// * `factory` - Factory to bind; ignored once the slot is bound
    ///
    /// # Returns
    /// * `&mut FactoryRegistry` - The registry holding the first bound factory
    pub fn get_instance(&mut self, factory: Box<dyn BeverageFactory>) -> &mut FactoryRegistry {
        match self.registry.as_ref() {
            Some(bound) => debug!(
                bound = %bound.style(),
                ignored = %factory.style(),
                "registry already bound, ignoring factory"
            ),
            None => info!(style = %factory.style(), "bound factory registry"),
        }

        self.registry
            .get_or_insert_with(|| FactoryRegistry::new(factory))
    }

    pub fn is_bound(&self) -> bool {
        self.registry.is_some()
    }

    /// Returns the bound registry, if any.
    pub fn get(&mut self) -> Option<&mut FactoryRegistry> {
        self.registry.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BeverageKind;
    use crate::factories::{AmericanFactory, ItalianFactory};

    #[test]
    fn test_new_slot_is_unbound() {
        let mut slot = RegistrySlot::new();
        assert!(!slot.is_bound());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_first_factory_wins() {
        let mut slot = RegistrySlot::new();

        let registry = slot.get_instance(Box::new(ItalianFactory::new()));
        assert_eq!(registry.style(), ShopStyle::Italian);

        let registry = slot.get_instance(Box::new(AmericanFactory::new()));
        assert_eq!(registry.style(), ShopStyle::Italian);

        for _ in 0..5 {
            assert_eq!(registry.create_beverage().kind(), BeverageKind::Espresso);
        }
        assert!(slot.is_bound());
    }

    #[test]
    fn test_rebinding_with_same_style_keeps_first_stream() {
        use crate::identifiers::testing::ScriptedIds;

        let mut slot = RegistrySlot::new();
        slot.get_instance(Box::new(AmericanFactory::with_source(ScriptedIds::new(&[
            10, 20,
        ]))));
        let registry = slot.get_instance(Box::new(AmericanFactory::with_source(
            ScriptedIds::new(&[999]),
        )));

        assert_eq!(registry.create_beverage().id().get(), 10);
        assert_eq!(registry.create_beverage().id().get(), 20);
    }

    #[test]
    fn test_registry_delegates_to_factory() {
        let mut registry = FactoryRegistry::new(Box::new(AmericanFactory::new()));

        let beverage = registry.create_beverage();
        assert_eq!(beverage.kind(), BeverageKind::Latte);
        assert_eq!(registry.style(), ShopStyle::American);
    }
}
