use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use geometry::{Dssd, Point, RatioVec};
use units::mm;

/// The detector registry described by a setup file.
pub struct Setup {
    detectors: Vec<Dssd>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SetupFile {
    detectors: Vec<DssdSpec>,
}

/// On-disk description of one DSSD. Lengths are in mm; the axis triples
/// need not be normalized.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DssdSpec {
    name: String,
    centre: [f32; 3],
    normal: [f32; 3],
    front_axis: [f32; 3],
    front_strips: usize,
    back_strips: usize,
    front_pitch: f32,
    back_pitch: f32,
}

impl Setup {

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let file: SetupFile = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        Ok(file.into())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<SetupFile>(json).map(Into::into)
    }

    /// Look up a detector by name. `None` for unknown names; callers treat
    /// that as fatal.
    pub fn dssd(&self, name: &str) -> Option<&Dssd> {
        self.detectors.iter().find(|d| d.name() == name)
    }

}

impl From<SetupFile> for Setup {
    fn from(file: SetupFile) -> Self {
        let detectors = file.detectors.into_iter().map(
            |DssdSpec { name, centre, normal, front_axis, front_strips, back_strips, front_pitch, back_pitch }| {
                Dssd::new(name,
                          point_mm(centre),
                          direction(normal),
                          direction(front_axis),
                          front_strips, mm(front_pitch),
                          back_strips,  mm(back_pitch))
            }).collect();
        Self { detectors }
    }
}

fn point_mm([x, y, z]: [f32; 3]) -> Point { Point::new(mm(x), mm(y), mm(z)) }

fn direction([x, y, z]: [f32; 3]) -> RatioVec { RatioVec::new(x, y, z) }
