//! cplx prelude.
//!
//! This module contains the value type, the free functions over it, and the
//! text reading helpers, so they can be imported as a group.
//!
//! ```
//! use cplx::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::complex::{arg, conj, imag, magnitude, norm, polar, polar_real, real, Complex};

#[doc(no_inline)]
pub use crate::error::ParseComplexError;

#[doc(no_inline)]
pub use crate::format::{parse_complex, ComplexReader, ParseMode};

#[doc(no_inline)]
pub use num_traits::{One, Zero};
