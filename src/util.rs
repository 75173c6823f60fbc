/// Numeric conversion helpers.
///
/// Safe conversions between `f64` and the integer types the value layer needs
/// (exponents, factorial arguments, loop counters). Every function returns a
/// `Result` that is `Ok` only when the conversion is exact.
pub mod num;
/// Stack growth for deeply nested input.
///
/// Parsing and evaluation recurse once per nesting level; these helpers grow
/// the stack on demand so that deep but well-formed input cannot overflow it.
pub mod stack;
