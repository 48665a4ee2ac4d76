//! Sample production: one position and angle per allocated hit.

use ndarray::Array2;
use rand::Rng;

use geometry::{Dssd, Point};
use units::Angle;
use units::todo::Solidf32;

use crate::coverage::Coverage;

/// One reported hit of one pixel.
#[derive(Clone, Copy, Debug)]
pub struct AngleSample {
    pub front: u32,
    pub back: u32,
    pub angle: Angle,
    pub count: u32,
    pub solid_angle: Solidf32,
    pub position: Point,
}

/// Produce, pixel by pixel in row-major order, exactly as many samples as
/// the allocation grants.
///
/// Each sample draws a fresh position inside its pixel and measures the
/// angle between the inward (negated) detector normal and the direction
/// of the position as seen from the reference origin. Note the asymmetry:
/// solid angles and allocations use the emission origin, the reported
/// direction uses the reference origin. Downstream consumers rely on this
/// convention.
pub fn emit_samples<R: Rng + ?Sized>(
    det: &Dssd,
    coverage: &Coverage,
    allocation: &Array2<u32>,
    reference_origin: Point,
    rng: &mut R,
) -> Vec<AngleSample> {
    let mut samples = Vec::new();
    for ((i, j), &count) in allocation.indexed_iter() {
        let (front, back) = (i as u32 + 1, j as u32 + 1);
        let solid_angle = coverage.emission[[i, j]];
        for _ in 0..count {
            let position = det.uniform_pixel_position(front, back, rng);
            let direction = (position - reference_origin).unit();
            let angle = direction.angle_to(-det.normal());
            samples.push(AngleSample { front, back, angle, count, solid_angle, position });
        }
    }
    samples
}
