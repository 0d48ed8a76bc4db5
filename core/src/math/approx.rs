//! Testing and asserting approximate equality.

use core::iter::zip;

/// Trait for testing approximate equality.
///
/// Floating-point types are only an approximation of real numbers due to
/// their finite precision. A vertex projected onto the unit sphere will
/// rarely have a length of *exactly* one, and the midpoint of two points
/// computed in two different ways may differ in the last bit.
///
/// Two values are considered approximately equal if their absolute
/// difference is less than some small value, "epsilon", scaled by the
/// magnitude of the values being compared, so that the comparison works
/// equally well for small and large values.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon of type `E`.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        use super::float::f32;
        let diff = f32::abs(self - other);
        diff <= *rel_eps * f32::abs(*self).max(1.0)
    }

    fn relative_epsilon() -> Self {
        // Without an exact sqrt, lengths and normals are a bit off
        if cfg!(any(feature = "std", feature = "libm")) {
            1e-6
        } else {
            1e-4
        }
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: ApproxEq<T, E>> ApproxEq<Self, E> for Option<T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, rel_eps),
            (Some(_), None) | (None, Some(_)) => false,
            (None, None) => true,
        }
    }

    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use spherefill_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// Points and vectors can be compared as well:
/// ```
/// # use spherefill_core::{assert_approx_eq, math::{pt3, Point3}};
/// let p: Point3 = pt3(0.1 + 0.2, 0.0, 1.0);
/// assert_approx_eq!(p, pt3(0.3, 0.0, 1.0));
/// ```
/// A custom epsilon can be given:
/// ```
/// # use spherefill_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use spherefill_core::assert_approx_eq;
/// let len = 1.01_f32;
/// assert_approx_eq!(len, 1.0, eps = 0.001, "not on the unit sphere: {len}");
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {

    mod f32 {
        #[test]
        fn approx_eq_zero() {
            assert_approx_eq!(0.0, 0.0);
            assert_approx_eq!(-0.0, 0.0);
            assert_approx_eq!(0.0, -0.0);
        }

        #[test]
        fn approx_eq_near_one() {
            assert_approx_eq!(0.9999999, 1.0);
            assert_approx_eq!(1.0, 1.0000001);
            assert_approx_eq!(-1.0, -1.0000001);
        }

        #[test]
        fn approx_eq_is_relative() {
            assert_approx_eq!(1.0e10, 1.0000001e10);
            assert_approx_eq!(-1.0e10, -1.0000001e10);
        }

        #[test]
        fn approx_eq_custom_epsilon() {
            assert_approx_eq!(0.0, 0.001, eps = 0.01);
            assert_approx_eq!(1.0, 0.999, eps = 0.01);
            assert_approx_eq!(100.0, 99.9, eps = 0.01);
        }

        #[test]
        #[should_panic]
        fn zero_not_approx_eq_to_one() {
            assert_approx_eq!(0.0, 1.0);
        }
        #[test]
        #[should_panic]
        fn one_not_approx_eq_to_1_001() {
            assert_approx_eq!(1.0, 1.001);
        }
        #[test]
        #[should_panic]
        fn nan_not_approx_eq_to_nan() {
            assert_approx_eq!(f32::NAN, f32::NAN);
        }
    }

    mod arrays {
        #[test]
        fn approx_eq_elementwise() {
            assert_approx_eq!([0.1f32 + 0.2, 1.0], [0.3, 1.0]);
        }

        #[test]
        #[should_panic]
        fn one_element_differs() {
            assert_approx_eq!([0.0f32, 1.0, 2.0], [0.0, 1.5, 2.0]);
        }

        #[test]
        fn option() {
            assert_approx_eq!(Some(0.1f32 + 0.2), Some(0.3));
            assert_approx_eq!(None::<f32>, None);
        }
    }
}
