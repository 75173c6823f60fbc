/// Dispatch of binary operators.
pub mod core;
/// Matrix products and division.
pub mod matmul;
/// Exponentiation.
pub mod power;
/// Addition with scalar broadcasting.
pub mod scalar;
