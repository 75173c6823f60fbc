/// Complex number support.
///
/// Defines the `ComplexNumber` scalar used for every number in the language,
/// with checked division, powers, and the factorial (gamma function for
/// non-integers). Also parses the numeric literals delimited by the lexer.
pub mod complex;
/// Dense matrices of complex numbers.
///
/// Provides construction from rows and blocks, matrix product, inversion by
/// Gauss–Jordan elimination and integer powers.
pub mod matrix;

pub mod core;
