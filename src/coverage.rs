//! Per-pixel solid-angle coverage of a detector seen from the emission
//! origin.

use itertools::iproduct;
use ndarray::Array2;
use ordered_float::OrderedFloat;

use geometry::{Dssd, Point};
use units::todo::Solidf32;

use crate::mask::StripMask;

/// Emission-apex solid angles plus the normalization maximum.
///
/// The maximum is taken over *reference*-apex values (the target centre),
/// independent of where the source sits.
pub struct Coverage {
    pub emission: Array2<Solidf32>,
    pub max_reference: Solidf32,
}

/// Fill the solid-angle matrix of `det`, masked by `mask`.
///
/// Pixels are visited row-major, front strip outer, back strip inner.
/// A masked pixel keeps an emission value of zero and is skipped entirely
/// on the reference side, so it can never define the maximum. When every
/// pixel is masked the maximum stays zero.
pub fn coverage(det: &Dssd, mask: &StripMask, emission_origin: Point, reference_origin: Point) -> Coverage {
    let (nf, nb) = (det.front_strip_count(), det.back_strip_count());
    let mut emission = Array2::zeros((nf, nb));
    let mut reference = Vec::with_capacity(nf * nb);
    for (i, j) in iproduct!(0..nf, 0..nb) {
        let (f, b) = (i as u32 + 1, j as u32 + 1);
        if mask.masks(f, b) { continue }
        emission[[i, j]] = det.pixel_solid_angle(f, b, emission_origin);
        reference.push(det.pixel_solid_angle(f, b, reference_origin));
    }
    let max_reference = reference.into_iter().map(OrderedFloat).max()
        .map_or(0.0, OrderedFloat::into_inner);
    Coverage { emission, max_reference }
}
