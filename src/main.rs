use clap::Parser;
use hashbrown::HashMap;
use std::error::Error;
use std::path::PathBuf;
use voxmap::{Scene, slice};

#[derive(Parser)]
#[command(name = "voxmap", about = "Build a voxel scene from TOML and print it layer by layer")]
struct Cli {
    /// Scene file (.toml)
    scene: PathBuf,
    /// Z layer to print; repeat for several (default: every layer)
    #[arg(long, short, allow_hyphen_values = true)]
    layer: Vec<i32>,
    /// Also print how many cells hold each value
    #[arg(long)]
    tally: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let scene = Scene::from_path(&cli.scene)?;
    log::info!("loaded {} ({} ops)", cli.scene.display(), scene.ops.len());
    let grid = scene.build()?;

    if cli.layer.is_empty() {
        print!("{}", slice::render_all(&grid));
    } else {
        for z in &cli.layer {
            println!("z = {z}");
            print!("{}", slice::render_layer(&grid, *z)?);
        }
    }

    if cli.tally {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in grid.bounds().iter() {
            if let Some(v) = grid.get_at(c).into_present() {
                *counts.entry(v).or_default() += 1;
            }
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_unstable();
        for (v, n) in counts {
            println!("{v} {n}");
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
