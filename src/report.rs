//! Plain-text reporting: everything human-oriented is a `#` comment, so
//! the stream stays directly plottable.

use std::io::{self, Write};
use std::path::PathBuf;

use geometry::Point;
use units::{mm_, nm_, radian_, Length};

use crate::coverage::Coverage;
use crate::emit::AngleSample;

/// Resolved parameters of one invocation, echoed at the top of the output.
pub struct RunInfo {
    pub timestamp: String,
    pub working_dir: PathBuf,
    pub command: Vec<String>,
    pub setup: PathBuf,
    pub target: PathBuf,
    pub matcher: PathBuf,
    pub implantation: Length,
    pub target_thickness: Length,
    pub iterations: u32,
    pub target_centre: Point,
    pub emission_origin: Point,
    pub reference_origin: Point,
}

pub fn run_header(w: &mut impl Write, info: &RunInfo) -> io::Result<()> {
    writeln!(w, "# {}", info.timestamp)?;
    writeln!(w, "# Output created from within {} with the following command", info.working_dir.display())?;
    writeln!(w, "# {}", info.command.join(" "))?;
    writeln!(w, "# Setup:                 {}", info.setup.display())?;
    writeln!(w, "# Target:                {}", info.target.display())?;
    writeln!(w, "# Matcher:               {}", info.matcher.display())?;
    writeln!(w, "# Implantation depth:    {} nm in target of thickness {} nm",
             nm_(info.implantation), nm_(info.target_thickness))?;
    writeln!(w, "# Nr. of max iterations: {}", info.iterations)?;
    writeln!(w, "# Target centre:         {}", triplet(info.target_centre))?;
    writeln!(w, "# Emission origin:       {}", triplet(info.emission_origin))?;
    writeln!(w, "# Reference origin:      {}", triplet(info.reference_origin))?;
    Ok(())
}

/// The emission-apex matrix: one `#` row per front strip, tab-separated,
/// with the 1-based row index trailing.
pub fn solid_angle_matrix(w: &mut impl Write, name: &str, coverage: &Coverage) -> io::Result<()> {
    writeln!(w, "# Solid angles of pixels of {name}")?;
    writeln!(w, "# Max solid angle is  {}", coverage.max_reference)?;
    write!(w, "# ")?;
    for j in 1..=coverage.emission.ncols() {
        write!(w, "{j}\t")?;
    }
    writeln!(w)?;
    for (i, row) in coverage.emission.rows().into_iter().enumerate() {
        write!(w, "#")?;
        for solid in row {
            write!(w, "{solid}\t")?;
        }
        writeln!(w, " {}", i + 1)?;
    }
    Ok(())
}

/// One tab-separated line per sample, after the column header.
pub fn angle_table(w: &mut impl Write, name: &str, samples: &[AngleSample]) -> io::Result<()> {
    writeln!(w, "# Angle distribution of uniform hits over the detector, weighted by solid angle, for {name}")?;
    writeln!(w, "# FI\tBI\tAngle")?;
    for s in samples {
        writeln!(w, "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                 s.front, s.back, radian_(s.angle), s.count, s.solid_angle,
                 mm_(s.position.x), mm_(s.position.y), mm_(s.position.z))?;
    }
    Ok(())
}

fn triplet(p: Point) -> String {
    format!("({}, {}, {})", mm_(p.x), mm_(p.y), mm_(p.z))
}
