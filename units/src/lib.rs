pub use float_eq;
pub use uom;

pub mod todo;

pub mod mmps {

  pub mod f32 {
    use uom::{ISQ, system};
    ISQ!(uom::si, f32, (millimeter, kilogram, picosecond, ampere, kelvin, mole, candela));
  }

}

pub use uom::si::Quantity;
pub use mmps::f32::{Angle, Area, Length, Ratio};

mod units {
  pub use uom::si::{length::{nanometer, millimeter, centimeter},
                    ratio ::ratio,
                    angle ::radian,
  };
}

// Making values from float literals is long-winded in `uom`, so provide some
// pithily-named convenience constructors.

/// Generate a function called NAME which returns QUANTITY by interpreting its
/// argument as UNIT
///
/// wrap!(NAME QUANTITY UNIT);
macro_rules! wrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: f32) -> $quantity { $quantity::new::<units::$unit>(x) }
  };
}

wrap!(cm     Length         centimeter);
wrap!(mm     Length         millimeter);
wrap!(nm     Length          nanometer);
wrap!(ratio  Ratio               ratio);
wrap!(radian Angle              radian);

// Reverse direction of the above.
pub fn mm_(x: Length) -> f32 { x.get::<units::millimeter>() }
pub fn nm_(x: Length) -> f32 { x.get::<units::nanometer> () }

pub fn ratio_ (x: Ratio) -> f32 { x.get::<uom::si::ratio::ratio>() }
pub fn radian_(x: Angle) -> f32 { x.get::<uom::si::angle::radian>() }

#[macro_export]
macro_rules! assert_uom_eq {
  ($unit:ident, $lhs:expr, $rhs:expr, $algo:ident <= $tol:expr) => {
    $crate::float_eq::assert_float_eq!($lhs.get::<$unit>(), $rhs.get::<$unit>(), $algo <= $tol)
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn length_sum_mixes_units() {
    let v = vec![mm(1.0), cm(1.0)];
    let total: Length = v.into_iter().sum();
    use super::units::nanometer;
    assert_uom_eq!(nanometer, total, mm(11.0), ulps <= 1);
  }

  #[test]
  fn nm_roundtrip() {
    use float_eq::assert_float_eq;
    assert_float_eq!(nm_(nm(500.0)), 500.0, ulps <= 1);
    assert_float_eq!(mm_(nm(1.0e6)),   1.0, ulps <= 1);
  }

  #[test]
  fn radians_in_radians_out() {
    use float_eq::assert_float_eq;
    assert_float_eq!(radian_(radian(1.25)), 1.25, ulps <= 1);
  }
}
