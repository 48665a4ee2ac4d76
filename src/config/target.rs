use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use geometry::{Point, RatioVec};
use units::{mm, Length};

/// Target foil description: where the beam stops and decays.
pub struct Target {
    thickness: Length,
    centre: Point,
    normal: RatioVec,
}

/// On-disk target description. Thickness and centre are in mm.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetFile {
    thickness: f32,
    centre: [f32; 3],
    normal: [f32; 3],
}

impl Target {

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let file: TargetFile = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        Ok(file.into())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<TargetFile>(json).map(Into::into)
    }

    pub fn thickness(&self) -> Length { self.thickness }

    pub fn centre(&self) -> Point { self.centre }

    /// Unit normal of the foil.
    pub fn normal(&self) -> RatioVec { self.normal }

}

impl From<TargetFile> for Target {
    fn from(TargetFile { thickness, centre: [x, y, z], normal: [nx, ny, nz] }: TargetFile) -> Self {
        Self {
            thickness: mm(thickness),
            centre: Point::new(mm(x), mm(y), mm(z)),
            normal: RatioVec::new(nx, ny, nz).unit(),
        }
    }
}
