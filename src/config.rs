// Command line options. The curve itself still comes from stdin (or --input).
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "bezier-drag")]
#[command(about = "Draw a Bezier curve and drag its control points with the mouse", long_about = None)]
pub struct Config {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// How close (pixels) a click must be to grab a control point
    #[arg(long, default_value_t = 8.0)]
    pub pick_radius: f32,

    /// Read degree, steps and control points from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Where S saves PNG screenshots
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub screenshot_dir: PathBuf,
}
