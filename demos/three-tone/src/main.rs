use argh::FromArgs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use voxtone::{
    grid::VoxelGrid,
    morph::{threshold_binary, ExecutionStrategy, ToneComposer},
    place::{plan_blocks, Palette, PlaceOptions},
};

#[derive(FromArgs)]
/// Classify a voxel model into fill, wall and pillar tones
struct Args {
    /// path to a JSON grid file ({"size": [d, h, w], "data": [...]}); a
    /// built-in sample house is used when omitted
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// occupancy threshold for continuous grid data (default: 0.8)
    #[argh(option, default = "0.8")]
    threshold: f32,

    /// number of tones: 2 (walls) or 3 (walls and pillars) (default: 3)
    #[argh(option, short = 't', default = "3")]
    tones: u8,

    /// palette: classic, ruins, desert-oasis, modern (default: classic)
    #[argh(option, short = 'p', default = "String::from(\"classic\")")]
    palette: String,

    /// world x of the grid origin
    #[argh(option, default = "0")]
    offset_x: i32,

    /// world z of the grid origin
    #[argh(option, default = "0")]
    offset_y: i32,

    /// skip explicit background blocks in the plan
    #[argh(switch)]
    keep_space: bool,

    /// seed for palette alternatives (default: from entropy)
    #[argh(option)]
    seed: Option<u64>,

    /// write the placement plan as JSON to this path
    #[argh(option)]
    plan_out: Option<PathBuf>,

    /// run single-threaded
    #[argh(switch)]
    serial: bool,
}

#[derive(serde::Deserialize)]
struct GridFile {
    size: [usize; 3],
    data: Vec<f32>,
}

/// A hollow square of walls with taller corner posts.
fn sample_house() -> VoxelGrid<u8> {
    let mut grid = VoxelGrid::<u8>::zeros([7, 7, 4].into());
    for d in 0..7 {
        for h in 0..7 {
            let on_edge = d == 0 || d == 6 || h == 0 || h == 6;
            if !on_edge {
                continue;
            }
            let corner = (d == 0 || d == 6) && (h == 0 || h == 6);
            let top = if corner { 4 } else { 3 };
            for w in 0..top {
                grid.set(d, h, w, 1);
            }
        }
    }
    grid
}

fn load_grid(path: &Path, threshold: f32) -> Result<VoxelGrid<u8>, Box<dyn std::error::Error>> {
    let file: GridFile = serde_json::from_reader(std::fs::File::open(path)?)?;
    let continuous = VoxelGrid::from_shape_vec(file.size.into(), file.data)?;
    let mut binary = VoxelGrid::<u8>::zeros(continuous.size());
    threshold_binary(
        &continuous,
        &mut binary,
        threshold,
        ExecutionStrategy::Serial,
    )?;
    Ok(binary)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let grid = match &args.input {
        Some(path) => load_grid(path, args.threshold)?,
        None => sample_house(),
    };
    log::info!(
        "grid {} with {} occupied cells",
        grid.size(),
        grid.as_slice().iter().filter(|&&v| v != 0).count()
    );

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::Parallel
    };
    let composer = ToneComposer::new(strategy)?;

    let mut tagged = VoxelGrid::<u8>::zeros(grid.size());
    match args.tones {
        2 => composer.two_tone(&grid, &mut tagged)?,
        3 => composer.three_tone(&grid, &mut tagged)?,
        n => return Err(format!("unsupported tone count: {n}").into()),
    }

    println!("{}", tagged.to_ascii_layers());

    if let Some(plan_path) = &args.plan_out {
        let palette = match args.palette.as_str() {
            "classic" => Palette::classic(),
            "ruins" => Palette::ruins(),
            "desert-oasis" => Palette::desert_oasis(),
            "modern" => Palette::modern(),
            other => return Err(format!("unknown palette: {other}").into()),
        };
        let options = PlaceOptions {
            offset_x: args.offset_x,
            offset_y: args.offset_y,
            clear_space: !args.keep_space,
            ..Default::default()
        };
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let blocks = plan_blocks(&tagged, &palette, &options, &mut rng)?;
        serde_json::to_writer_pretty(std::fs::File::create(plan_path)?, &blocks)?;
        println!("wrote {} placements to {}", blocks.len(), plan_path.display());
    }

    Ok(())
}
