//! Cartesian complex numbers over `f64`.
//!
//! ```
//! use cplx::prelude::*;
//!
//! let z = Complex::new(3.0, 2.0) * Complex::new(-4.0, 3.0);
//! assert_eq!(z, Complex::new(-18.0, 1.0));
//! assert_eq!(norm(&Complex::new(3.0, 4.0)), 25.0);
//! ```
pub mod complex;
pub mod error;
pub mod format;
pub mod prelude;
