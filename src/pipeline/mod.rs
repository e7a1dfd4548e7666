//! Pipeline module - range detection, discretization and the three scorers

pub mod accumulated;
pub mod discretize;
pub mod driver;
pub mod error;
pub mod kullback;
pub mod loader;
pub mod matrix;
pub mod precision;
pub mod range;
pub mod shannon;

pub use accumulated::*;
pub use discretize::*;
pub use driver::*;
pub use error::*;
pub use kullback::*;
pub use loader::*;
pub use matrix::*;
pub use precision::*;
pub use range::*;
pub use shannon::*;
