//! Math module: points, vectors, unit directions and frames.
//!
//! Double-precision value types built on glam's `DVec3`. Render matrices
//! are produced from these by the `transform` module.

mod direction;
mod frame;
mod point;
mod vector;

pub use direction::Direction;
pub use frame::Frame;
pub use point::Point;
pub use vector::Vector;
