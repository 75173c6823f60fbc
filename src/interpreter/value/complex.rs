use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_u64_checked, u64_to_f64_checked, usize_to_f64_checked},
};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit `i`.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// Largest argument whose factorial is finite in double precision.
const MAX_FACTORIAL: u64 = 170;

/// Represents a complex number with real and imaginary parts.
///
/// This is the scalar of the language; real numbers are complex numbers with a
/// zero imaginary part.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (0.0, 0.0) => write!(f, "0"),
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Parses a numeric literal already delimited by the lexer.
    ///
    /// Accepted forms are decimal integers and reals (`12`, `3.5`, `.5`, `1.`,
    /// `2e-3`), any of those followed by the imaginary unit (`2i`, `.5i`), and
    /// the bare imaginary unit `i`. The whole slice must be consumed.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::complex::ComplexNumber;
    ///
    /// assert_eq!(ComplexNumber::parse_literal("2.5"), Some(ComplexNumber::new(2.5, 0.0)));
    /// assert_eq!(ComplexNumber::parse_literal("3i"), Some(ComplexNumber::new(0.0, 3.0)));
    /// assert_eq!(ComplexNumber::parse_literal("i"), Some(ComplexNumber::new(0.0, 1.0)));
    /// assert_eq!(ComplexNumber::parse_literal("1.2.3"), None);
    /// ```
    #[must_use]
    pub fn parse_literal(text: &str) -> Option<Self> {
        if text == "i" {
            return Some(I);
        }
        let (digits, imaginary) = match text.strip_suffix('i') {
            Some(digits) => (digits, true),
            None => (text, false),
        };
        if digits.is_empty() || digits == "." {
            return None;
        }
        let number: f64 = digits.parse().ok()?;
        if !number.is_finite() {
            return None;
        }
        Some(if imaginary {
                 Self::new(0.0, number)
             } else {
                 Self::new(number, 0.0)
             })
    }

    /// Returns `true` when the imaginary part is zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }

    /// Returns `true` when both parts are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns the reciprocal (1/z) of the complex number.
    pub fn checked_recip(self) -> EvalResult<Self> {
        if self.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(ONE / self)
    }

    /// Divides by `rhs`, failing on a zero divisor.
    pub fn checked_div(self, rhs: Self) -> EvalResult<Self> {
        if rhs.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Raises the complex number to an integer power.
    ///
    /// Uses exponentiation by squaring so integral powers of integers stay
    /// exact, with overflow and division-by-zero checks.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::complex::{ComplexNumber, ONE};
    /// let c = ComplexNumber::new(2.0, 0.0);
    /// assert_eq!(c.checked_powi(0).unwrap(), ONE);
    /// assert_eq!(c.checked_powi(9).unwrap(), ComplexNumber::new(512.0, 0.0));
    /// assert_eq!(c.checked_powi(-1).unwrap(), ComplexNumber::new(0.5, 0.0));
    /// ```
    pub fn checked_powi(self, exp: i64) -> EvalResult<Self> {
        if exp == 0 {
            return Ok(ONE);
        }

        if self.is_zero() && exp < 0 {
            return Err(RuntimeError::DivisionByZero);
        }

        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result *= base;
                if !result.is_finite() {
                    return Err(RuntimeError::Overflow);
                }
            }
            n /= 2;
            if n > 0 {
                base = base * base;
                if !base.is_finite() {
                    return Err(RuntimeError::Overflow);
                }
            }
        }

        if exp < 0 {
            result = result.checked_recip()?;
        }

        Ok(result)
    }

    /// Raises the complex number to a complex power (principal branch).
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(4.0, 0.0);
    /// let res = c.checked_pow(ComplexNumber::new(0.5, 0.0)).unwrap();
    /// assert!((res.real - 2.0).abs() < 1e-10);
    /// assert!(res.imaginary.abs() < 1e-10);
    /// ```
    pub fn checked_pow(self, exp: Self) -> EvalResult<Self> {
        if exp.is_real() && exp.real.fract() == 0.0 && exp.real.abs() < 9.0e15 {
            #[allow(clippy::cast_possible_truncation)]
            return self.checked_powi(exp.real as i64);
        }

        if self.is_zero() {
            return if exp.real > 0.0 {
                Ok(ZERO)
            } else {
                Err(RuntimeError::DivisionByZero)
            };
        }

        let result = if self.is_real() && self.real > 0.0 && exp.is_real() {
            Self::from(self.real.powf(exp.real))
        } else {
            (exp * self.ln()).exp()
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(RuntimeError::Overflow)
        }
    }

    /// Returns the exponential of the complex number.
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the natural logarithm (principal branch).
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }

    /// Computes the factorial of a real, non-negative value.
    ///
    /// Integral arguments are multiplied out exactly; fractional arguments use
    /// `Γ(x + 1)`.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::complex::ComplexNumber;
    ///
    /// assert_eq!(ComplexNumber::from(5.0).factorial().unwrap(), ComplexNumber::from(120.0));
    /// assert!(ComplexNumber::from(-1.0).factorial().is_err());
    /// assert!(ComplexNumber::new(1.0, 1.0).factorial().is_err());
    /// ```
    pub fn factorial(self) -> EvalResult<Self> {
        if !self.is_real() {
            return Err(RuntimeError::ExpectedReal { context: "factorial",
                                                    value:   self.to_string(), });
        }
        let x = self.real;

        if x.fract() != 0.0 {
            return euler_gamma(x + 1.0).map(Self::from);
        }

        if x < 0.0 {
            return Err(RuntimeError::InvalidArgument { details: format!("factorial is not defined for negative integer {x}") });
        }

        let n = f64_to_u64_checked(x)?;
        if n > MAX_FACTORIAL {
            return Err(RuntimeError::Overflow);
        }

        let mut result = 1.0;
        for k in 2..=n {
            result *= u64_to_f64_checked(k)?;
        }
        Ok(Self::from(result))
    }

    fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }
}

/// Computes the gamma function Γ(z) using the Lanczos approximation.
///
/// Uses the standard 9-term coefficients (`g = 7`); for `z < 0.5` the
/// reflection formula `Γ(z) = π / (sin(πz) * Γ(1 − z))` is applied.
///
/// # Example
/// ```
/// use seqcalc::interpreter::value::complex::euler_gamma;
///
/// let g = euler_gamma(5.0).unwrap();
/// assert!((g - 24.0).abs() < 1e-10);
///
/// let half = euler_gamma(0.5).unwrap();
/// assert!((half - std::f64::consts::PI.sqrt()).abs() < 1e-10);
/// ```
pub fn euler_gamma(z: f64) -> EvalResult<f64> {
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        let sine = (std::f64::consts::PI * z).sin();
        if sine == 0.0 {
            return Err(RuntimeError::InvalidArgument { details: format!("gamma has a pole at {z}") });
        }
        return Ok(std::f64::consts::PI / (sine * euler_gamma(1.0 - z)?));
    }

    let z_minus_1 = z - 1.0;
    let mut x = COEFFS[0];
    for (i, &c) in COEFFS.iter().enumerate().skip(1) {
        x += c / (z_minus_1 + usize_to_f64_checked(i)?);
    }
    let t = z_minus_1 + G + 0.5;

    let result = std::f64::consts::TAU.sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x;
    if result.is_finite() {
        Ok(result)
    } else {
        Err(RuntimeError::Overflow)
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::AddAssign for ComplexNumber {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imaginary += rhs.imaginary;
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.imaginary == 0.0 {
            return Self { real:      self.real / rhs.real,
                          imaginary: self.imaginary / rhs.real, };
        }
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real:      value.into(),
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}
