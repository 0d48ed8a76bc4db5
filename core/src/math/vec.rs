//! Real and integer vectors.
//!
//! Vectors are generic over their representation and their *space*, a tag
//! type such as [`Real<3>`] that keeps vectors in different coordinate
//! systems from being mixed by accident.

use core::{
    array,
    fmt::{Debug, Formatter},
    iter::zip,
    marker::PhantomData as Pd,
    ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::{
    ApproxEq, Point,
    space::{Affine, Linear, Real},
};

/// A generic vector type.
///
/// `Repr` is the underlying storage, typically an array of scalars,
/// and `Space` is a tag type denoting the vector space.
#[repr(transparent)]
pub struct Vector<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 3-vector with `f32` components.
pub type Vec3<Basis = ()> = Vector<[f32; 3], Real<3, Basis>>;

/// Returns a real 3-vector with components `x`, `y`, and `z`.
pub const fn vec3<B>(x: f32, y: f32, z: f32) -> Vec3<B> {
    Vector([x, y, z], Pd)
}

impl<R, Sp> Vector<R, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp, const N: usize> Vector<[f32; N], Sp> {
    /// Returns the length (magnitude) of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        super::float::f32::sqrt(self.len_sqr())
    }

    /// Returns the length of `self`, squared.
    ///
    /// Cheaper than [`len`][Self::len] as it avoids the square root.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The zero vector has no direction; passing it is a logic error,
    /// caught by a debug assertion. In release builds the result is NaN.
    ///
    /// # Examples
    /// ```
    /// use spherefill_core::assert_approx_eq;
    /// use spherefill_core::math::{Vec3, vec3};
    ///
    /// let v: Vec3 = vec3(3.0, 0.0, -4.0);
    /// assert_approx_eq!(v.normalize(), vec3(0.6, 0.0, -0.8));
    /// assert_approx_eq!(v.normalize().len(), 1.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sqr = self.len_sqr();
        debug_assert_ne!(len_sqr, 0.0, "cannot normalize a zero vector");
        self.mul(super::float::f32::recip_sqrt(len_sqr))
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use spherefill_core::math::{Vec3, vec3};
    ///
    /// let v: Vec3 = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.dot(&vec3(-2.0, 0.0, 1.0)), 1.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        zip(self.0, other.0).map(|(a, b)| a * b).sum()
    }
}

impl<B> Vec3<B> {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is orthogonal to both inputs and follows the right-hand
    /// rule: x̂ × ŷ = ẑ.
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b] = [self.0, other.0];
        vec3(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        )
    }

    /// Returns the point at displacement `self` from the origin.
    #[inline]
    pub fn to_pt(self) -> Point<[f32; 3], Real<3, B>> {
        Point::new(self.0)
    }
}

impl<Sc, Sp, const N: usize> Affine for Vector<[Sc; N], Sp>
where
    Sc: Linear<Scalar = Sc> + Copy,
{
    type Space = Sp;
    type Diff = Self;
    const DIM: usize = N;

    #[inline]
    fn add(&self, other: &Self) -> Self {
        Self(array::from_fn(|i| self.0[i].add(&other.0[i])), Pd)
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        Self(array::from_fn(|i| self.0[i].sub(&other.0[i])), Pd)
    }
}

impl<Sc, Sp, const N: usize> Linear for Vector<[Sc; N], Sp>
where
    Sc: Linear<Scalar = Sc> + Copy,
{
    type Scalar = Sc;

    #[inline]
    fn zero() -> Self {
        Self(array::from_fn(|_| Sc::zero()), Pd)
    }
    #[inline]
    fn neg(&self) -> Self {
        Self(self.0.map(|c| c.neg()), Pd)
    }
    #[inline]
    fn mul(&self, scalar: Sc) -> Self {
        Self(self.0.map(|c| c.mul(scalar)), Pd)
    }
}

impl<Sc: ApproxEq, Sp, const N: usize> ApproxEq<Self, Sc>
    for Vector<[Sc; N], Sp>
{
    fn approx_eq_eps(&self, other: &Self, eps: &Sc) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> Sc {
        Sc::relative_epsilon()
    }
}

//
// Foreign trait impls
//

// Manual impls of Copy, Clone, Eq, and PartialEq to avoid
// superfluous where Sp: Trait bound

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: Eq, Sp> Eq for Vector<R, Sp> {}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Vector<[Sc; N], Sp> {
    type Output = Sc;
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<R, Sp> AddAssign for Vector<R, Sp>
where
    Self: Linear,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Affine::add(&*self, &rhs);
    }
}

impl<R, Sp> SubAssign for Vector<R, Sp>
where
    Self: Linear,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Affine::sub(&*self, &rhs);
    }
}

impl<R, Sp> MulAssign<<Self as Linear>::Scalar> for Vector<R, Sp>
where
    Self: Linear,
{
    #[inline]
    fn mul_assign(&mut self, rhs: <Self as Linear>::Scalar) {
        *self = Linear::mul(&*self, rhs);
    }
}

impl<R, Sp> Add for Vector<R, Sp>
where
    Self: Linear,
{
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<R, Sp> Sub for Vector<R, Sp>
where
    Self: Linear,
{
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<R, Sp> Mul<<Self as Linear>::Scalar> for Vector<R, Sp>
where
    Self: Linear,
{
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: <Self as Linear>::Scalar) -> Self {
        self *= rhs;
        self
    }
}

/// Scalar-vector multiplication, `k * v`.
impl<Sp, const N: usize> Mul<Vector<[f32; N], Sp>> for f32 {
    type Output = Vector<[f32; N], Sp>;
    #[inline]
    fn mul(self, rhs: Vector<[f32; N], Sp>) -> Self::Output {
        Vector(rhs.0.map(|c| self * c), Pd)
    }
}

impl<R, Sp> Neg for Vector<R, Sp>
where
    Self: Linear,
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Linear::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn vector_addition() {
        let v: Vec3 = vec3(1.0, 2.0, 0.0);
        assert_eq!(v + vec3(-2.0, 1.0, -1.0), vec3(-1.0, 3.0, -1.0));
        assert_eq!(v - vec3(-2.0, 1.0, -1.0), vec3(3.0, 1.0, 1.0));
    }

    #[test]
    fn scalar_multiplication() {
        let v: Vec3 = vec3(1.0, -2.0, 3.0);
        assert_eq!(v * 0.0, vec3(0.0, 0.0, 0.0));
        assert_eq!(v * 3.0, vec3(3.0, -6.0, 9.0));
        assert_eq!(0.5 * v, vec3(0.5, -1.0, 1.5));
    }

    #[test]
    fn negation() {
        let v: Vec3 = vec3(1.0, -2.0, 0.0);
        assert_eq!(-v, vec3(-1.0, 2.0, -0.0));
        assert_eq!(v + -v, Vec3::zero());
    }

    #[test]
    fn dot_product() {
        let v: Vec3 = vec3(0.5, 0.5, 0.0);
        assert_eq!(v.dot(&vec3(-2.0, 2.0, 7.0)), 0.0);
        assert_eq!(vec3::<()>(3.0, 1.0, 2.0).len_sqr(), 14.0);
    }

    #[test]
    fn cross_product() {
        let x: Vec3 = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y), z);
        assert_eq!(z.cross(&y), -x);
    }

    #[test]
    fn length() {
        assert_approx_eq!(vec3::<()>(3.0, 4.0, 0.0).len(), 5.0);
        assert_approx_eq!(vec3::<()>(1.0, 1.0, 1.0).len(), 1.7320508);
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in [
            vec3::<()>(0.0, -1.0, 0.0),
            vec3(0.5, 0.0, 0.5),
            vec3(-1.0, 2.0, -3.0),
            vec3(1e-3, 1e-3, 0.0),
        ] {
            assert_approx_eq!(v.normalize().len(), 1.0);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot normalize a zero vector")]
    fn normalize_zero_vector() {
        let _ = Vec3::<()>::zero().normalize();
    }

    #[test]
    fn to_pt() {
        let v: Vec3 = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.to_pt().to_vec(), v);
    }

    #[test]
    fn debug() {
        assert_eq!(
            alloc::format!("{:?}", vec3::<()>(1.0, -2.0, 3.0)),
            "Vec<R3<()>>[1.0, -2.0, 3.0]"
        );
    }
}
