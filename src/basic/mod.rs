pub use dir::Dir;
pub use point::Point;
pub use pos::{BoardDim, Pos};

pub mod board;
mod dir;
mod point;
mod pos;
