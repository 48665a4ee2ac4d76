use std::ops::{Mul, Neg};
use units::{radian, ratio_, Angle, Length};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Vector {

    pub fn new(x: Length, y: Length, z: Length) -> Self { Self { x, y, z } }

    pub fn magnitude(&self) -> Length {
        let &Self { x, y, z } = self;
        (x*x + y*y + z*z).sqrt()
    }

    /// Direction of this vector, as a dimensionless unit vector.
    pub fn unit(self) -> RatioVec {
        let m = self.magnitude();
        RatioVec {
            x: ratio_(self.x / m),
            y: ratio_(self.y / m),
            z: ratio_(self.z / m),
        }
    }

}

/// A dimensionless 3-vector: directions, and scale factors along them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioVec {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RatioVec {

    pub fn new(x: f32, y: f32, z: f32) -> Self { Self { x, y, z } }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    pub fn norm(self) -> f32 { self.dot(self).sqrt() }

    pub fn unit(self) -> Self {
        let n = self.norm();
        Self { x: self.x / n, y: self.y / n, z: self.z / n }
    }

    /// Angle between two unit vectors, in [0, pi].
    pub fn angle_to(self, rhs: Self) -> Angle {
        radian(self.dot(rhs).clamp(-1.0, 1.0).acos())
    }

}

impl Neg for RatioVec {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl Mul<Length> for RatioVec {
    type Output = Vector;
    fn mul(self, rhs: Length) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
