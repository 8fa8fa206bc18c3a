use num_complex::Complex64;
use num_traits::{One, Zero};
use std::iter::{Product, Sum};

mod ops;

/// A complex number in Cartesian form, `re + im·i`, with `f64` fields
///
/// The arithmetic mirrors a historical value type, including three
/// operations that do not follow field arithmetic:
///
/// * `*=` with a complex operand multiplies componentwise
///   ([`Complex::mul_componentwise`]); the binary `*` is the true product.
/// * `x - z` keeps the imaginary part of `z` instead of negating it
///   ([`Complex::real_sub_keep_imag`]).
/// * `x / z` divides the components of `z` by `x`
///   ([`Complex::real_div_componentwise`]).
///
/// These are kept for behavioral parity and are not a recommended API.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// A constant `Complex` 0.
    pub const ZERO: Self = Complex { re: 0.0, im: 0.0 };

    /// A constant `Complex` 1.
    pub const ONE: Self = Complex { re: 1.0, im: 0.0 };

    /// A constant `Complex` _i_, the imaginary unit.
    pub const I: Self = Complex { re: 0.0, im: 1.0 };

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub const fn from_imag(im: f64) -> Self {
        Complex { re: 0.0, im }
    }

    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Complex::new(r * theta.cos(), r * theta.sin())
    }

    pub fn real(&self) -> f64 {
        self.re
    }

    pub fn imag(&self) -> f64 {
        self.im
    }

    /// Get the magnitude (absolute value) of the complex number
    pub fn magnitude(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Squared magnitude, `re² + im²`
    pub fn norm(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Angle from the positive real axis in `(-π, π]`, `arg(0) == 0`
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// Unary plus
    pub fn pos(self) -> Self {
        self
    }

    /// Check if the complex number contains NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Check if the complex number is infinite
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Check if the complex number is finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn add_complex(&mut self, z: Complex) -> &mut Self {
        self.re += z.re;
        self.im += z.im;
        self
    }

    /// Adds `x` to the real part only
    pub fn add_real(&mut self, x: f64) -> &mut Self {
        self.re += x;
        self
    }

    pub fn sub_complex(&mut self, z: Complex) -> &mut Self {
        self.re -= z.re;
        self.im -= z.im;
        self
    }

    /// Subtracts `x` from the real part only
    pub fn sub_real(&mut self, x: f64) -> &mut Self {
        self.re -= x;
        self
    }

    /// Multiplies field by field, `(a·c, b·d)`. This is what `*=` does with a
    /// complex operand; it is not the complex product.
    pub fn mul_componentwise(&mut self, z: Complex) -> &mut Self {
        self.re *= z.re;
        self.im *= z.im;
        self
    }

    /// Multiplies both fields by `x`
    pub fn scale(&mut self, x: f64) -> &mut Self {
        self.re *= x;
        self.im *= x;
        self
    }

    /// True complex division in place. A zero divisor yields NaN/Inf fields.
    pub fn div_complex(&mut self, z: Complex) -> &mut Self {
        *self = self.div_by_complex(z);
        self
    }

    /// Divides both fields by `x`
    pub fn div_real(&mut self, x: f64) -> &mut Self {
        self.re /= x;
        self.im /= x;
        self
    }

    /// `(a+bi)(c+di) = (ac − bd) + (ad + bc)i`
    pub fn mul_complex(self, z: Complex) -> Complex {
        Complex::new(
            self.re * z.re - self.im * z.im,
            self.re * z.im + self.im * z.re,
        )
    }

    /// `(a+bi)/(c+di) = (ac + bd)/(c² + d²) + (bc − ad)/(c² + d²)i`
    pub fn div_by_complex(self, z: Complex) -> Complex {
        let denom = z.re * z.re + z.im * z.im;
        Complex::new(
            (self.re * z.re + self.im * z.im) / denom,
            (self.im * z.re - self.re * z.im) / denom,
        )
    }

    /// `x - z` as the `-` operator computes it: `(x - re, im)`.
    /// The imaginary part is copied, not negated.
    pub fn real_sub_keep_imag(x: f64, z: Complex) -> Complex {
        Complex::new(x - z.re, z.im)
    }

    /// `x / z` as the `/` operator computes it: `(re / x, im / x)`.
    /// This is not the reciprocal of `z` scaled by `x`.
    pub fn real_div_componentwise(x: f64, z: Complex) -> Complex {
        Complex::new(z.re / x, z.im / x)
    }
}

pub fn magnitude(z: &Complex) -> f64 {
    z.magnitude()
}

pub fn real(z: &Complex) -> f64 {
    z.real()
}

pub fn imag(z: &Complex) -> f64 {
    z.imag()
}

/// Convert polar coordinates `(r, theta)` to a complex number
pub fn polar(r: f64, theta: f64) -> Complex {
    Complex::from_polar(r, theta)
}

/// Polar form with a zero angle, `(r, 0)`
pub fn polar_real(r: f64) -> Complex {
    Complex::from_real(r)
}

pub fn conj(z: &Complex) -> Complex {
    z.conj()
}

pub fn norm(z: &Complex) -> f64 {
    z.norm()
}

pub fn arg(z: &Complex) -> f64 {
    z.arg()
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

// Conversion from f64 (real number)
impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex64> for Complex {
    fn from(num: Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}
