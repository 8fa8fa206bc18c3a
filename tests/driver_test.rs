use cplx::prelude::*;
use float_cmp::*;
use std::f64::consts::PI;

// drives every infix operator over complex and f64 operands
fn f(z: &Complex) -> Complex {
    z * z * z - 3.0 * z * z + 4.0 * z - 2.0
}

fn approx_value(x: f64, y: f64) -> bool {
    approx_eq!(f64, x, y, epsilon = 0.0001)
}

#[test]
fn test_stream_input_and_output() {
    let mut reader = ComplexReader::new("(3, -2)\n");
    let z5 = reader.read_complex().unwrap();
    assert_eq!(z5.real(), 3.0);
    assert_eq!(z5.imag(), -2.0);
    assert_eq!(format!("{}", z5), "(3, -2)");
}

#[test]
fn test_malformed_input_is_reported() {
    let err = "(3, x)".parse::<Complex>().unwrap_err();
    assert!(matches!(err, ParseComplexError::InvalidNumber { position: 4, .. }));
}

#[test]
fn test_compound_operators_with_objects() {
    let z2 = Complex::new(-4.0, 3.0);
    let mut z3 = Complex::default();
    let z4 = z3;

    z3 += z2;
    assert_eq!(z3, z2);
    z3 -= z2;
    assert_eq!(z4, z3);
    z3 *= z2;
    z3 /= z2;
    assert_eq!(z3, z4);
}

#[test]
fn test_compound_operators_with_constants() {
    let mut z3 = Complex::new(0.5, -1.5);
    let (x1, y1) = (z3.real(), z3.imag());
    const C: f64 = 3.0;

    z3 += C;
    assert!(z3.real() == x1 + C && z3.imag() == y1);
    z3 -= C;
    assert!(z3.real() == x1 && z3.imag() == y1);
    z3 *= C;
    assert!(z3.real() == x1 * C && z3.imag() == y1 * C);
    z3 /= C;
    assert!(z3.real() == x1 && z3.imag() == y1);
}

#[test]
fn test_infix_operators_with_objects() {
    let z1 = Complex::new(3.0, 2.0);
    let z2 = Complex::new(-4.0, 3.0);

    assert_eq!(z1 + z2, Complex::new(-1.0, 5.0));
    assert_eq!(z1 - z2, Complex::new(7.0, -1.0));
    assert_eq!(z1 * z2, Complex::new(-18.0, 1.0));
    assert_eq!(z1 / z2, Complex::new(-0.24, -0.68));
}

#[test]
fn test_magnitude_and_accessors() {
    let z1 = Complex::new(2.0, 3.0);
    assert_eq!(z1.real(), 2.0);
    assert_eq!(z1.imag(), 3.0);
    assert_eq!(real(&z1), 2.0);
    assert_eq!(imag(&z1), 3.0);
    assert_eq!(
        z1.magnitude(),
        (z1.real() * z1.real() + z1.imag() * z1.imag()).sqrt()
    );
    assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(norm(&Complex::new(3.0, 4.0)), 25.0);
}

#[test]
fn test_arg() {
    assert_eq!(arg(&Complex::new(1.0, 0.0)), 0.0);
    assert!(approx_value(arg(&Complex::new(0.0, 1.0)), PI / 2.0));
    assert!(approx_value(arg(&Complex::new(-1.0, 0.0)), PI));
    assert_eq!(arg(&Complex::new(0.0, -1.0)), (-1.0f64).atan2(0.0));
}

#[test]
fn test_coordinate_to_polar() {
    let z8 = Complex::new(0.5, 4.0);
    let (r, theta) = (magnitude(&z8), arg(&z8));
    assert!(approx_value(polar(r, theta).real(), 0.5));
    assert!(approx_value(polar(r, theta).imag(), 4.0));

    let z8 = Complex::new(-3.0, 7.0);
    let (r, theta) = (magnitude(&z8), arg(&z8));
    assert!(approx_value(polar(r, theta).real(), -3.0));
    assert!(approx_value(polar(7.61577, 1.97569).imag(), 7.0));

    assert!(approx_value(polar(5.0, PI / 2.0).real(), 0.0));
    assert!(approx_value(polar(5.0, PI / 2.0).imag(), 5.0));
    assert_eq!(polar_real(5.0), Complex::new(5.0, 0.0));
}

#[test]
fn test_chained_calculations() {
    let complex_number = [
        Complex::new(2.0, 3.0),
        Complex::new(-1.0, 1.0),
        Complex::new(1.0, 1.0),
        Complex::new(1.0, -1.0),
        Complex::new(1.0, 0.0),
    ];
    assert_eq!(f(&complex_number[0]), Complex::new(-25.0, -15.0));
    assert_eq!(f(&complex_number[1]), Complex::new(-4.0, 12.0));
    assert_eq!(f(&complex_number[2]), Complex::new(0.0, 0.0));
    assert_eq!(f(&complex_number[3]), Complex::new(0.0, 0.0));
    assert_eq!(f(&complex_number[4]), Complex::new(0.0, 0.0));
}

#[test]
fn test_unary_conj_and_equality() {
    assert_eq!(-Complex::new(2.0, 3.0), Complex::new(-2.0, -3.0));
    assert_eq!(Complex::new(2.0, 3.0).pos(), Complex::new(2.0, 3.0));
    assert_eq!(conj(&Complex::new(2.0, 3.0)), Complex::new(2.0, -3.0));
    assert!(Complex::new(0.0, 0.0) == Complex::new(0.0, 0.0));
    assert!(Complex::new(0.0, 0.0) != Complex::new(1.0, 1.0));
    assert_eq!(Complex::new(2.0, 3.0) * 2.0, Complex::new(4.0, 6.0));
    assert_eq!(Complex::new(6.0, 8.0) / 2.0, Complex::new(3.0, 4.0));
    assert_eq!(
        Complex::new(2.0, 4.0) / Complex::new(1.0, 1.0),
        Complex::new(3.0, 1.0)
    );
}

#[test]
fn test_reading_many_values_sums_them() {
    let text = "(2, 3) (-1, 1) (1, 1) (1, -1) (1, 0)";
    let values: Result<Vec<Complex>, _> = ComplexReader::new(text).collect();
    let values = values.unwrap();
    assert_eq!(values.len(), 5);

    let sum: Complex = values.iter().sum();
    assert_eq!(sum, Complex::new(4.0, 4.0));

    let printed: Vec<String> = values.iter().map(|z| z.to_string()).collect();
    assert_eq!(printed.join(" "), text);
}
