pub mod error;
pub mod geometry;
pub mod heart;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{CakeformError, Result};
pub use heart::{build_heart, BuildHeart};
