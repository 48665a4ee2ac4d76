// ----------------------------------- CLI -----------------------------------
#[derive(clap::Parser, Debug, Clone)]
#[clap(
    name = "angles",
    about = "Generate per-pixel angular distributions weighted by solid-angle coverage",
    version,
    disable_version_flag = true,
)]
pub struct Cli {

    /// Path to setup file
    #[clap(short, long, default_value = "setup.json")]
    pub setup: PathBuf,

    /// Path to target file
    #[clap(short, long, default_value = "target.json")]
    pub target: PathBuf,

    /// Path to matcher file
    #[clap(short, long, default_value = "matcher.json")]
    pub matcher: PathBuf,

    /// x of the source location in mm [default: target centre x]
    #[clap(short, long)]
    pub xlocation: Option<f32>,

    /// y of the source location in mm [default: target centre y]
    #[clap(short, long)]
    pub ylocation: Option<f32>,

    /// Implantation depth in nm [default: half of the target thickness]
    #[clap(short, long)]
    pub implantation: Option<f32>,

    /// Max number of samples, granted to the most prominent pixel
    #[clap(short = 'n', long, default_value = "100")]
    pub iterations: u32,

    /// Detector(s); separate multiple detectors with ',', e.g. '-d U1,U2,U3'
    #[clap(short, long, required = true, value_delimiter = ',')]
    pub detector: Vec<String>,

    /// Print version
    #[clap(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

}

// ---------------------------------------------------------------------------

// In-pixel positions come from a fixed stream: identical invocations must
// produce byte-identical output.
const SAMPLING_SEED: u64 = 0xD55D;

fn main() -> Result<(), Box<dyn Error>> {

    let args = Cli::parse();

    let setup   = Setup ::from_json_file(&args.setup)?;
    let target  = Target::from_json_file(&args.target)?;
    let matcher = config::matcher::from_json_file(&args.matcher)?;

    // nm on the command line, mm everywhere else
    let implantation = args.implantation.map_or(target.thickness() / 2.0, nm);
    let offset = target.normal() * (target.thickness() / 2.0 - implantation);

    let source = Point::new(
        args.xlocation.map_or(target.centre().x, mm),
        args.ylocation.map_or(target.centre().y, mm),
        target.centre().z,
    );
    let emission_origin  = source          + offset;
    let reference_origin = target.centre() + offset;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    report::run_header(&mut out, &RunInfo {
        timestamp: chrono::Local::now().to_rfc3339(),
        working_dir: env::current_dir()?,
        command: env::args().collect(),
        setup: args.setup.clone(),
        target: args.target.clone(),
        matcher: args.matcher.clone(),
        implantation,
        target_thickness: target.thickness(),
        iterations: args.iterations,
        target_centre: target.centre(),
        emission_origin,
        reference_origin,
    })?;

    let mut rng = StdRng::seed_from_u64(SAMPLING_SEED);
    for name in &args.detector {
        let det = setup.dssd(name).ok_or_else(|| format!("detector {name} is not in the setup"))?;
        let mask = StripMask::from_matcher(&matcher, name)?;
        let coverage = coverage(det, &mask, emission_origin, reference_origin);
        let allocation = allocate(&coverage, args.iterations);
        let samples = emit_samples(det, &coverage, &allocation, reference_origin, &mut rng);
        report::solid_angle_matrix(&mut out, name, &coverage)?;
        report::angle_table(&mut out, name, &samples)?;
    }

    Ok(())
}

// ----- Imports -------------------------------------------------------------
use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use angles::allocate::allocate;
use angles::config::{self, setup::Setup, target::Target};
use angles::coverage::coverage;
use angles::emit::emit_samples;
use angles::mask::StripMask;
use angles::report::{self, RunInfo};
use angles::Point;

use units::{mm, nm};
