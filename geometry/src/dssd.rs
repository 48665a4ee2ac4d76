use rand::Rng;
use units::Length;
use units::todo::Solidf32;
use crate::{Point, RatioVec};

/// A planar double-sided strip detector.
///
/// Front strips are stacked along `front_axis`, back strips along
/// `normal x front_axis`; pixel (f, b) is the intersection of front strip
/// `f` and back strip `b`. Strip indices are 1-based throughout, matching
/// the numbering used in setup and matcher files.
#[derive(Clone, Debug)]
pub struct Dssd {
    name: String,
    centre: Point,
    normal: RatioVec,
    front_axis: RatioVec,
    back_axis: RatioVec,
    front_strips: usize,
    back_strips: usize,
    front_pitch: Length,
    back_pitch: Length,
}

impl Dssd {

    /// `normal` and `front_axis` need not be normalized, but must be
    /// non-zero and non-parallel.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        centre: Point,
        normal: RatioVec,
        front_axis: RatioVec,
        front_strips: usize,
        front_pitch: Length,
        back_strips: usize,
        back_pitch: Length,
    ) -> Self {
        let normal = normal.unit();
        let front_axis = front_axis.unit();
        let back_axis = normal.cross(front_axis);
        Self { name: name.into(), centre, normal, front_axis, back_axis,
               front_strips, back_strips, front_pitch, back_pitch }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn front_strip_count(&self) -> usize { self.front_strips }
    pub fn back_strip_count (&self) -> usize { self.back_strips  }

    pub fn normal(&self) -> RatioVec { self.normal }
    pub fn front_axis(&self) -> RatioVec { self.front_axis }
    pub fn back_axis (&self) -> RatioVec { self.back_axis  }

    /// Solid angle subtended at `apex` by pixel (f, b), in steradians.
    ///
    /// The rectangle is split along a diagonal and each triangle is
    /// evaluated with the Van Oosterom-Strackee formula on the unit
    /// directions from the apex to its corners.
    pub fn pixel_solid_angle(&self, f: u32, b: u32, apex: Point) -> Solidf32 {
        let [c0, c1, c2, c3] = self.pixel_corners(f, b).map(|c| (c - apex).unit());
        triangle_solid_angle(c0, c1, c2) + triangle_solid_angle(c0, c2, c3)
    }

    /// A position drawn uniformly inside pixel (f, b).
    pub fn uniform_pixel_position<R: Rng + ?Sized>(&self, f: u32, b: u32, rng: &mut R) -> Point {
        let (u0, v0) = self.pixel_window(f, b);
        self.plane_point(u0 + self.front_pitch * rng.gen::<f32>(),
                         v0 + self.back_pitch  * rng.gen::<f32>())
    }

    fn pixel_corners(&self, f: u32, b: u32) -> [Point; 4] {
        let (u0, v0) = self.pixel_window(f, b);
        let (u1, v1) = (u0 + self.front_pitch, v0 + self.back_pitch);
        [self.plane_point(u0, v0), self.plane_point(u1, v0),
         self.plane_point(u1, v1), self.plane_point(u0, v1)]
    }

    /// In-plane offsets of the low corner of pixel (f, b) from the centre.
    fn pixel_window(&self, f: u32, b: u32) -> (Length, Length) {
        let u0 = self.front_pitch * (f as f32 - 1.0 - self.front_strips as f32 / 2.0);
        let v0 = self.back_pitch  * (b as f32 - 1.0 - self.back_strips  as f32 / 2.0);
        (u0, v0)
    }

    fn plane_point(&self, u: Length, v: Length) -> Point {
        self.centre + self.front_axis * u + self.back_axis * v
    }

}

fn triangle_solid_angle(r1: RatioVec, r2: RatioVec, r3: RatioVec) -> Solidf32 {
    let numer = r1.dot(r2.cross(r3)).abs();
    let denom = 1.0 + r1.dot(r2) + r2.dot(r3) + r3.dot(r1);
    2.0 * numer.atan2(denom)
}
