pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use validation::*;
