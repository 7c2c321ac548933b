//! umbra CLI - grayscale ray caster
//!
//! Renders a scene document to an image, or describes its contents.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

mod output;
mod scene;

#[derive(Parser)]
#[command(name = "umbra")]
#[command(about = "Ray-cast a scene of spheres and planes to a grayscale image", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to an image file
    Render {
        /// Scene document (.json or .toml)
        scene: PathBuf,
        /// Output image (format determined by extension: .png, .jpg)
        #[arg(short, long, default_value = "grayscale.png")]
        output: PathBuf,
    },
    /// Describe the contents of a scene document
    Info {
        /// Scene document (.json or .toml)
        scene: PathBuf,
    },
}

fn setup_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot initialise logging: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Render { scene, output } => render(&scene, &output)?,
        Commands::Info { scene } => show_info(&scene)?,
    }

    Ok(())
}

fn render(input: &Path, output: &Path) -> Result<()> {
    output::output_format(output)?;
    let doc = scene::load_document(input)?;
    let scene = scene::build_scene(&doc)?;

    let (frame, stats) = scene.render_with_stats();
    output::save_frame(&frame, output)?;

    info!(
        hit_pixels = stats.hit_pixels,
        background_pixels = stats.background_pixels,
        "wrote {}",
        output.display()
    );
    println!(
        "Rendered {}x{} to {}",
        frame.width,
        frame.height,
        output.display()
    );
    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let doc = scene::load_document(file)?;

    println!("umbra scene: {}", file.display());
    println!("  Version: {}", doc.version);
    println!("  Shapes: {}", doc.shapes.len());
    println!("  Lights: {}", doc.lights.len());
    println!("  Total brightness: {}", doc.total_brightness());
    println!();
    print!("{}", doc);

    match scene::build_scene(&doc) {
        Ok(scene) => {
            println!();
            print!("{}", scene::describe_scene(&scene));
        }
        Err(e) => println!("\nScene cannot be rendered: {}", e),
    }

    Ok(())
}
