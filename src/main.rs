//! Plots timing measurements: reads `size time` pairs from a text file,
//! saves a line + scatter chart of them and shows it in a window.
//!
//! # Usage
//!
//! Without arguments it reads `times.txt`, writes `plot.png` and opens the
//! chart window:
//!
//! ```shell
//! $ time-plot
//! ```
//!
//! *Write an SVG with a caption and labelled points, without a window*
//! ```shell
//! $ time-plot bench/times.txt -o bench/plot.svg -t "insert" --labels --no-show
//! ```
//!
//! To see all options, execute `$ time-plot --help`.

use clap::Parser;
use env_logger::Env;
use log::{debug, warn};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use timings::reader::read_times;
use visualizer::style::{
    parse_color, to_hex, PlotStyle, DEFAULT_COLOR, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_SIZE,
    DEFAULT_SIZE,
};
use visualizer::PlotError;

/// Possible arguments for the executable.
#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub struct Args {
    /// File with one `size time` pair per line.
    #[arg(default_value = "times.txt")]
    pub input: PathBuf,
    /// Where the chart is saved. The extension selects the format:
    /// png, bmp, jpg or svg.
    #[arg(short, long, default_value = "plot.png")]
    pub output: PathBuf,
    /// Color of line and markers as #rrggbb.
    #[arg(short, long, default_value_t = to_hex(DEFAULT_COLOR))]
    pub color: String,
    /// Marker radius in pixels.
    #[arg(long, default_value_t = DEFAULT_MARKER_SIZE)]
    pub marker_size: u32,
    /// Line width in pixels.
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: u32,
    /// Caption above the chart, also used as window title.
    #[arg(short, long)]
    pub title: Option<String>,
    /// Width of image and window in pixels.
    #[arg(long, default_value_t = DEFAULT_SIZE.0)]
    pub width: u32,
    /// Height of image and window in pixels.
    #[arg(long, default_value_t = DEFAULT_SIZE.1)]
    pub height: u32,
    /// Do not draw axes and grid.
    #[arg(long, default_value_t = false)]
    pub no_grid: bool,
    /// Write the time value next to every point.
    #[arg(long, default_value_t = false)]
    pub labels: bool,
    /// Only save the image, do not open a window.
    #[arg(long, default_value_t = false)]
    pub no_show: bool,
    /// Print the measurements as JSON to stdout.
    #[arg(short, long, default_value_t = false)]
    pub as_json: bool,
    /// The log level of the application.
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

/// Builds the [`PlotStyle`] described by the arguments.
fn style_from_args(args: &Args) -> Result<PlotStyle, PlotError> {
    Ok(PlotStyle {
        color: parse_color(&args.color)?,
        marker_size: args.marker_size,
        line_width: args.line_width,
        caption: args.title.clone(),
        show_mesh: !args.no_grid,
        label_points: args.labels,
        size: (args.width, args.height),
    })
}

#[cfg(feature = "window")]
fn show(dataset: &timings::Dataset, style: &PlotStyle) -> Result<(), PlotError> {
    visualizer::show(dataset, style)
}

#[cfg(not(feature = "window"))]
fn show(_dataset: &timings::Dataset, _style: &PlotStyle) -> Result<(), PlotError> {
    Err(PlotError::Window(
        "built without window support, use --no-show".to_string(),
    ))
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    // validate the style before touching any file
    let style = style_from_args(args)?;

    let dataset = read_times(&args.input)?;
    if dataset.is_empty() {
        warn!("{} holds no measurements", args.input.display());
    }
    if args.as_json {
        println!("{}", dataset.to_json()?);
    }

    visualizer::save(&dataset, &style, &args.output)?;
    println!("Saved chart to {}", args.output.display());

    if args.no_show {
        debug!("window disabled");
    } else {
        show(&dataset, &style)?;
    }
    Ok(())
}

/// Main endpoint for the executable.
fn main() -> ExitCode {
    let args = Args::parse();

    // Init logger
    let env = Env::default().filter_or("TIME_PLOT_LOG", &args.log_level);
    let _ = env_logger::try_init_from_env(env);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
