//! Floating-point compatibility API.
//!
//! Most floating-point functions are currently unavailable in `no_std`.
//! This module provides the missing functions using either the `libm` or
//! `micromath` crate, depending on which feature is enabled. As a fallback,
//! it also implements the functions needed by this crate even if none of
//! the features is enabled.
//!
//! The `f32` re-export picks the most accurate implementation available:
//! `std` first, then `libm`, then `micromath`, then the fallback.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabsf as abs;
    pub use libm::sqrtf as sqrt;

    #[inline]
    pub fn recip_sqrt(x: f32) -> f32 {
        1.0 / sqrt(x)
    }
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn abs(x: f32) -> f32 {
        mm::abs(x)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        x * recip_sqrt(x)
    }
    /// Returns the approximate reciprocal of the square root of `x`.
    #[inline]
    pub fn recip_sqrt(x: f32) -> f32 {
        let y = mm::invsqrt(x);
        // Two rounds of Newton's method
        let y = y * (1.5 - 0.5 * x * y * y);
        y * (1.5 - 0.5 * x * y * y)
    }
}

#[cfg(feature = "std")]
pub mod native {
    #[inline]
    pub fn abs(x: f32) -> f32 {
        x.abs()
    }
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline]
    pub fn recip_sqrt(x: f32) -> f32 {
        x.sqrt().recip()
    }
}

pub mod fallback {
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f32) -> f32 {
        f32::from_bits(x.to_bits() & 0x7FFF_FFFF)
    }
    /// Returns the approximate reciprocal of the square root of `x`.
    #[inline]
    pub fn recip_sqrt(x: f32) -> f32 {
        fast_recip_sqrt(x)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        x * recip_sqrt(x)
    }

    /// Returns a fast approximation of the reciprocal square root of `x`.
    #[inline]
    pub fn fast_recip_sqrt(x: f32) -> f32 {
        // https://en.wikipedia.org/wiki/Fast_inverse_square_root
        const MAGIC: u32 = 0x5f37_5a86;
        let y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
        // Two rounds of Newton's method
        let y = y * (1.5 - 0.5 * x * y * y);
        y * (1.5 - 0.5 * x * y * y)
    }
}

#[cfg(feature = "std")]
pub use native as f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;

#[cfg(test)]
mod tests {
    use super::fallback;
    use crate::assert_approx_eq;

    #[test]
    fn fallback_abs() {
        assert_eq!(fallback::abs(0.0), 0.0);
        assert_eq!(fallback::abs(-0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(fallback::abs(-2.5), 2.5);
        assert_eq!(fallback::abs(2.5), 2.5);
    }

    #[test]
    fn fallback_sqrt() {
        assert_approx_eq!(fallback::sqrt(4.0), 2.0, eps = 1e-4);
        assert_approx_eq!(fallback::sqrt(0.5), 0.70710677, eps = 1e-4);
        assert_approx_eq!(fallback::sqrt(1e6), 1e3, eps = 1e-4);
    }

    #[test]
    fn fast_recip_sqrt_close_to_exact() {
        for x in [0.25, 0.5, 1.0, 2.0, 3.0, 100.0] {
            let exact = 1.0 / std_sqrt(x);
            assert_approx_eq!(fallback::fast_recip_sqrt(x), exact, eps = 1e-4);
        }
    }

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        use super::libm;
        assert_eq!(libm::abs(-1.5), 1.5);
        assert_eq!(libm::sqrt(9.0), 3.0);
        assert_approx_eq!(libm::recip_sqrt(4.0), 0.5);
    }

    #[cfg(feature = "mm")]
    #[test]
    fn mm_functions() {
        use super::mm;
        assert_eq!(mm::abs(-1.5), 1.5);
        assert_approx_eq!(mm::sqrt(9.0), 3.0, eps = 1e-4);
        assert_approx_eq!(mm::recip_sqrt(4.0), 0.5, eps = 1e-4);
    }

    #[cfg(feature = "mm")]
    #[test]
    fn mm_recip_sqrt_close_to_exact() {
        use super::mm;
        let mut x = 1e-3;
        while x < 1e3 {
            let exact = 1.0 / std_sqrt(x);
            assert_approx_eq!(mm::recip_sqrt(x), exact, eps = 1e-5);
            assert_approx_eq!(mm::sqrt(x), std_sqrt(x), eps = 1e-5);
            x *= 1.37;
        }
    }

    // Newton's method on the exact value, independent of the features.
    fn std_sqrt(x: f32) -> f32 {
        let mut y = x.max(1.0);
        for _ in 0..32 {
            y = 0.5 * (y + x / y);
        }
        y
    }
}
