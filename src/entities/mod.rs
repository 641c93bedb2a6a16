pub mod beverage;
pub mod session;

pub use beverage::*;
pub use session::*;
