pub mod matrix;
pub mod stack;

pub use matrix::Matrix4;
pub use stack::TransformStack;
