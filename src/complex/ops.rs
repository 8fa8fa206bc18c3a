use super::Complex;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Borrowed variants of a binary operator, forwarded to the owned impl
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl<'a> $imp<$u> for &'a $t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: $u) -> Self::Output {
                $imp::$method(*self, other)
            }
        }

        impl<'a> $imp<&'a $u> for $t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: &'a $u) -> Self::Output {
                $imp::$method(self, *other)
            }
        }

        impl<'a, 'b> $imp<&'a $u> for &'b $t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: &'a $u) -> Self::Output {
                $imp::$method(*self, *other)
            }
        }
    };
}

macro_rules! forward_ref_op_assign {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl<'a> $imp<&'a $u> for $t {
            fn $method(&mut self, other: &'a $u) {
                $imp::$method(self, *other);
            }
        }
    };
}

// Implement basic arithmetic operations
impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, other: f64) -> Self::Output {
        Complex::new(self.re + other, self.im)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Self::Output {
        Complex::new(other.re + self, other.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, other: f64) -> Self::Output {
        Complex::new(self.re - other, self.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Self::Output {
        Complex::real_sub_keep_imag(self, other)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.mul_complex(other)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Complex::new(self.re * other, self.im * other)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Self::Output {
        Complex::new(other.re * self, other.im * self)
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.div_by_complex(other)
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Complex::new(self.re / other, self.im / other)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    fn div(self, other: Complex) -> Self::Output {
        Complex::real_div_componentwise(self, other)
    }
}

forward_ref_binop!(impl Add, add for Complex, Complex);
forward_ref_binop!(impl Add, add for Complex, f64);
forward_ref_binop!(impl Add, add for f64, Complex);
forward_ref_binop!(impl Sub, sub for Complex, Complex);
forward_ref_binop!(impl Sub, sub for Complex, f64);
forward_ref_binop!(impl Sub, sub for f64, Complex);
forward_ref_binop!(impl Mul, mul for Complex, Complex);
forward_ref_binop!(impl Mul, mul for Complex, f64);
forward_ref_binop!(impl Mul, mul for f64, Complex);
forward_ref_binop!(impl Div, div for Complex, Complex);
forward_ref_binop!(impl Div, div for Complex, f64);
forward_ref_binop!(impl Div, div for f64, Complex);

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Complex::new(-self.re, -self.im)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        -*self
    }
}

// Implement assignment operators
impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.add_complex(other);
    }
}

impl AddAssign<f64> for Complex {
    fn add_assign(&mut self, other: f64) {
        self.add_real(other);
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        self.sub_complex(other);
    }
}

impl SubAssign<f64> for Complex {
    fn sub_assign(&mut self, other: f64) {
        self.sub_real(other);
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        self.mul_componentwise(other);
    }
}

impl MulAssign<f64> for Complex {
    fn mul_assign(&mut self, other: f64) {
        self.scale(other);
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, other: Self) {
        self.div_complex(other);
    }
}

impl DivAssign<f64> for Complex {
    fn div_assign(&mut self, other: f64) {
        self.div_real(other);
    }
}

forward_ref_op_assign!(impl AddAssign, add_assign for Complex, Complex);
forward_ref_op_assign!(impl AddAssign, add_assign for Complex, f64);
forward_ref_op_assign!(impl SubAssign, sub_assign for Complex, Complex);
forward_ref_op_assign!(impl SubAssign, sub_assign for Complex, f64);
forward_ref_op_assign!(impl MulAssign, mul_assign for Complex, Complex);
forward_ref_op_assign!(impl MulAssign, mul_assign for Complex, f64);
forward_ref_op_assign!(impl DivAssign, div_assign for Complex, Complex);
forward_ref_op_assign!(impl DivAssign, div_assign for Complex, f64);
