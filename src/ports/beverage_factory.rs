use crate::{Beverage, ShopStyle};

/// Abstract factory for beverages.
///
/// Each implementation brews exactly one kind of beverage, fixed by the
/// shop style it was built for.
pub trait BeverageFactory {
    fn style(&self) -> ShopStyle;

    /// Brews a new beverage with a freshly drawn identifier.
    fn create_beverage(&mut self) -> Beverage;
}
