use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector / point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit-length direction at `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the 3D cross product.
    #[inline]
    pub fn cross(self, rhs: Vec2) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Polar angle of the vector, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        (self + other) / 2.0
    }
}

impl From<Vec2> for kurbo::Point {
    #[inline]
    fn from(v: Vec2) -> Self {
        kurbo::Point::new(v.x, v.y)
    }
}

impl From<kurbo::Point> for Vec2 {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn cross_sign_follows_rotation() {
        let x = Vec2::new(1.0, 0.0);
        let y = Vec2::new(0.0, 1.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);
    }

    #[test]
    fn from_angle_is_unit_length() {
        let v = Vec2::from_angle(0.7);
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((Vec2::from_angle(FRAC_PI_2).angle() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn converts_through_kurbo_point() {
        let p: kurbo::Point = Vec2::new(1.5, -2.0).into();
        assert_eq!(p, kurbo::Point::new(1.5, -2.0));
        assert_eq!(Vec2::from(p), Vec2::new(1.5, -2.0));
    }

    #[test]
    fn midpoint_is_halfway() {
        assert_eq!(Vec2::new(0.0, 2.0).midpoint(Vec2::new(4.0, 0.0)), Vec2::new(2.0, 1.0));
    }
}
