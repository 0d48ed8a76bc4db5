use core::{
    array,
    fmt::{Debug, Formatter},
    marker::PhantomData as Pd,
    ops::{Add, Index, Sub},
};

use crate::math::{
    ApproxEq,
    space::{Affine, Linear, Real},
    vec::Vector,
};

/// A position in an affine space.
///
/// Unlike vectors, points cannot be added together or scaled; the
/// difference of two points is a [vector][Vector], and a vector can be
/// added to a point to get another point.
#[repr(transparent)]
pub struct Point<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 3-point with `f32` components.
pub type Point3<Basis = ()> = Point<[f32; 3], Real<3, Basis>>;

/// Returns a real 3-point with `x`, `y`, and `z` components.
pub const fn pt3<Sc, B>(x: Sc, y: Sc, z: Sc) -> Point<[Sc; 3], Real<3, B>> {
    Point([x, y, z], Pd)
}

impl<R, Sp> Point<R, Sp> {
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<const N: usize, B> Point<[f32; N], Real<N, B>> {
    /// Returns the vector from the origin to `self`.
    #[inline]
    pub fn to_vec(self) -> Vector<[f32; N], Real<N, B>> {
        Vector::new(self.0)
    }

    /// Returns the point halfway between `self` and `other`.
    ///
    /// Computed as ½(a + b) so that the result is symmetric in its
    /// arguments, bit for bit.
    ///
    /// # Examples
    /// ```
    /// use spherefill_core::math::{pt3, Point3};
    ///
    /// let a: Point3 = pt3(-1.0, 2.0, 0.0);
    /// let b = pt3(3.0, -2.0, 1.0);
    /// assert_eq!(a.midpoint(&b), pt3(1.0, 0.0, 0.5));
    /// assert_eq!(a.midpoint(&b), b.midpoint(&a));
    /// ```
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self(array::from_fn(|i| 0.5 * (self.0[i] + other.0[i])), Pd)
    }

    /// Returns the Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        Affine::sub(self, other).len()
    }
}

impl<R, Sc, B> Point<R, Real<3, B>>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> Sc {
        self.0[2]
    }
}

impl<Sc, Sp, const N: usize> Affine for Point<[Sc; N], Sp>
where
    Sc: Linear<Scalar = Sc> + Copy,
{
    type Space = Sp;
    type Diff = Vector<[Sc; N], Sp>;
    const DIM: usize = N;

    #[inline]
    fn add(&self, other: &Self::Diff) -> Self {
        Self(array::from_fn(|i| self.0[i].add(&other.0[i])), Pd)
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self::Diff {
        Vector::new(array::from_fn(|i| self.0[i].sub(&other.0[i])))
    }
}

impl<Sc: ApproxEq, Sp, const N: usize> ApproxEq<Self, Sc>
    for Point<[Sc; N], Sp>
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
// superfluous where S: Trait bound

impl<R: Copy, S> Copy for Point<R, S> {}

impl<R: Clone, S> Clone for Point<R, S> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, S> Default for Point<R, S> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Point<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Point<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R: Eq, S> Eq for Point<R, S> {}

impl<R: PartialEq, S> PartialEq for Point<R, S> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R, Sp> From<R> for Point<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<R, Sp> Add<<Self as Affine>::Diff> for Point<R, Sp>
where
    Self: Affine,
{
    type Output = Self;

    fn add(self, other: <Self as Affine>::Diff) -> Self {
        Affine::add(&self, &other)
    }
}

impl<R, Sp> Sub for Point<R, Sp>
where
    Self: Affine,
{
    type Output = <Self as Affine>::Diff;

    fn sub(self, other: Self) -> Self::Output {
        Affine::sub(&self, &other)
    }
}
