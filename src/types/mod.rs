//! Type definitions

pub mod autolift;
pub mod bracket;
pub mod driver;
pub mod flight;
pub mod plan;
pub mod shift;

pub use autolift::*;
pub use bracket::*;
pub use driver::*;
pub use flight::*;
pub use plan::*;
pub use shift::*;
