pub mod config;
pub mod mask;
pub mod coverage;
pub mod allocate;
pub mod emit;
pub mod report;

pub use geometry::{Dssd, Point, RatioVec, Vector};
pub use units::todo::Solidf32;
