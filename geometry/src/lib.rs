mod point;
mod vector;
mod dssd;

pub use point::Point;
pub use vector::{Vector, RatioVec};
pub use dssd::Dssd;
