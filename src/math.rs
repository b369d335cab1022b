//! # Math
//!
//! Generic 2D vectors and the scalar helpers shared by the geometry and particle code.
//!
//! Vectors are plain values. Every operation is closed over the component type, so an integer
//! vector truncates the result of a rotation or normalization instead of widening to a float.

use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use glam::DVec2;
use glam::IVec2;
use glam::Vec2;
use num_traits::Num;
use num_traits::NumCast;
use num_traits::Signed;

use crate::Error;
use crate::Result;

/// # Scalar
///
/// Numeric component type of a [Vector2].
pub trait Scalar: Num + NumCast + Copy + PartialOrd + fmt::Debug {}

impl<T: Num + NumCast + Copy + PartialOrd + fmt::Debug> Scalar for T {}

fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

// Truncates toward zero for integer types; unrepresentable results become zero.
fn from_f64<T: Scalar>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::zero)
}

/// # Vector 2
///
/// A pair of numbers, an x and a y.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Vector2<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

/// Vector with `i32` components.
pub type IVector2 = Vector2<i32>;
/// Vector with `i64` components.
pub type LVector2 = Vector2<i64>;
/// Vector with `f32` components.
pub type FVector2 = Vector2<f32>;
/// Vector with `f64` components.
pub type DVector2 = Vector2<f64>;

impl<T> Vector2<T> {
    /// Returns a vector with the given components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector2<T> {
    /// Returns the zero vector.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Returns a vector of the given length pointing at `degrees` from the positive x-axis.
    pub fn from_angle(degrees: f64, length: T) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let length = to_f64(length);
        Self::new(from_f64(length * cos), from_f64(length * sin))
    }

    /// Returns the length of the vector.
    pub fn distance(self) -> T {
        from_f64(to_f64(self.distance_squared()).sqrt())
    }

    /// Returns the squared length of the vector.
    pub fn distance_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Returns true if both components are zero.
    pub fn is_zero(self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    /// Returns a vector of (approximately) unit length pointing in the same direction.
    ///
    /// Uses [rsqrt], so the length carries a small relative error. The zero vector normalizes to
    /// itself; use [Vector2::try_normalize] to reject it instead.
    pub fn normalize(self) -> Self {
        if self.is_zero() {
            return self;
        }

        let x = to_f64(self.x);
        let y = to_f64(self.y);
        let inverse_length = rsqrt(x * x + y * y);

        Self::new(from_f64(x * inverse_length), from_f64(y * inverse_length))
    }

    /// Returns the normalized vector, or [Error::DegenerateVector] for the zero vector.
    pub fn try_normalize(self) -> Result<Self> {
        if self.is_zero() {
            Err(Error::DegenerateVector)
        } else {
            Ok(self.normalize())
        }
    }

    /// Returns the angle in degrees of the line from the origin to this vector.
    ///
    /// Computed as `atan(y / x)`, so the result is in `[-90, 90]` and vectors in quadrants II and
    /// III report the angle of their opposite. A zero x component yields `±90` or `NaN`.
    pub fn horizontal_angle(self) -> f64 {
        (to_f64(self.y) / to_f64(self.x)).atan().to_degrees()
    }

    /// Returns the vector rotated by `degrees` around `origin`.
    pub fn rotated(self, degrees: f64, origin: DVector2) -> Self {
        let offset = self.as_dvec2() - origin.as_dvec2();
        let rotated = DVec2::from_angle(degrees.to_radians()).rotate(offset) + origin.as_dvec2();

        Self::new(from_f64(rotated.x), from_f64(rotated.y))
    }

    /// Returns the vector scaled by `factor`.
    pub fn scaled(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Returns the component at `index`, `0` for x and `1` for y.
    pub fn get(self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::InvalidIndex { index, len: 2 }),
        }
    }

    /// Returns the component named `axis`, case-insensitive.
    pub fn axis(self, axis: char) -> Result<T> {
        match axis.to_ascii_lowercase() {
            'x' => Ok(self.x),
            'y' => Ok(self.y),
            _ => Err(Error::InvalidAxis(axis)),
        }
    }

    /// Converts the components to another numeric type. Returns `None` if either component
    /// can't be represented.
    pub fn cast<U: Scalar>(self) -> Option<Vector2<U>> {
        Some(Vector2::new(U::from(self.x)?, U::from(self.y)?))
    }

    /// Returns the vector as a `glam` double precision vector.
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(to_f64(self.x), to_f64(self.y))
    }

    /// Returns the nearest integer pixel coordinate.
    pub fn to_pixel(self) -> IVec2 {
        IVec2::new(to_f64(self.x).round() as i32, to_f64(self.y).round() as i32)
    }
}

impl<T: Scalar + Neg<Output = T>> Vector2<T> {
    /// Returns a vector pointing opposite to this one.
    pub fn opposite(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Component-wise product. Use [Vector2::distance_squared] for the dot product with itself.
impl<T: Scalar> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Scalar> MulAssign for Vector2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

impl From<DVec2> for DVector2 {
    fn from(value: DVec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<DVector2> for DVec2 {
    fn from(value: DVector2) -> Self {
        value.as_dvec2()
    }
}

impl From<Vec2> for FVector2 {
    fn from(value: Vec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<FVector2> for Vec2 {
    fn from(value: FVector2) -> Self {
        Vec2::new(value.x, value.y)
    }
}

impl From<IVec2> for IVector2 {
    fn from(value: IVec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<IVector2> for IVec2 {
    fn from(value: IVector2) -> Self {
        IVec2::new(value.x, value.y)
    }
}

impl From<IVector2> for DVector2 {
    fn from(value: IVector2) -> Self {
        Self::new(value.x.into(), value.y.into())
    }
}

/// # Transform
///
/// Position, scale, and rotation of an object on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform<T> {
    /// Position of the transform.
    pub position: Vector2<T>,
    /// Per-axis scale of the transform.
    pub scale: Vector2<T>,
    /// Rotation in degrees.
    pub rotation: f64,
}

/// Fast approximate inverse square root.
///
/// Bit-level first guess refined with two Newton iterations. The relative error is on the order
/// of `1e-9`, good enough for directions but not for exact lengths. Zero, negative, and
/// non-finite input falls back to `1 / sqrt`.
pub fn rsqrt(number: f64) -> f64 {
    const MAGIC: u32 = 0x5f37_59df;

    if number <= 0.0 || !number.is_finite() {
        return 1.0 / number.sqrt();
    }

    // The guess is taken from f32 bits, so bring the input into [1, 4) first. Scaling by 4^-k
    // scales the result by 2^k.
    let shift = (number.log2() / 2.0).floor() as i32;
    let factor = 2f64.powi(-shift);
    let scaled = number * factor * factor;

    let half = scaled * 0.5;
    let mut y: f64 = f32::from_bits(MAGIC - ((scaled as f32).to_bits() >> 1)).into();
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y * 2f64.powi(-shift)
}

/// Clamps `x` to the range `[min, max]`.
pub fn clamp<T: PartialOrd>(x: T, min: T, max: T) -> T {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Wraps `x` back into `[min, max]` the way an angle wraps past a full turn.
///
/// A value past `max` continues from `min`, so `rotation_clamp(9, 2, 6)` is `5`. Only one range
/// width is removed: values more than a full range past `max` stay out of range. Values below
/// `min` are returned unchanged.
pub fn rotation_clamp<T: Scalar + Signed>(x: T, min: T, max: T) -> T {
    let over = (x - min) - (max - min);
    if over > T::zero() {
        min + over
    } else {
        x
    }
}
