use std::fs;
use std::path::PathBuf;

use clap::Parser;

use fractal_field::{
    ColourSettings, CsvFilePresenter, FractalPreset, PpmFilePresenter, RenderConfig,
    SingleFrameController, ViewParameters, WorkerStrategy,
};

const DEFAULT_OUTPUT: &str = "fractal.ppm";

/// Render one escape-time fractal frame to PPM and/or CSV.
#[derive(Debug, Parser)]
#[command(name = "fractal_field", version)]
struct Args {
    /// Starting view; ignored when --view is given
    #[arg(long, value_enum, default_value_t = FractalPreset::Mandelbrot)]
    preset: FractalPreset,

    /// JSON file holding a full view description
    #[arg(long)]
    view: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Worker count; defaults to the number of logical CPUs
    #[arg(long)]
    threads: Option<u32>,

    #[arg(long, value_enum, default_value_t = WorkerStrategy::RayonPool)]
    strategy: WorkerStrategy,

    /// Overrides the view's iteration cap (clamped to 128..=32768)
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Hue rotation step, 0 to 5
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    rotation: u8,

    #[arg(long)]
    invert: bool,

    #[arg(long)]
    monochrome: bool,

    /// PPM output path; fractal.ppm when neither output is given
    #[arg(long)]
    ppm: Option<PathBuf>,

    /// CSV output path for the raw iteration counts
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig, Box<dyn std::error::Error>> {
        let mut config = match self.threads {
            Some(threads) => RenderConfig::with_thread_count(threads)?,
            None => RenderConfig::default(),
        };
        config.strategy = self.strategy;
        config.colour = ColourSettings::new(self.rotation, self.invert, !self.monochrome);

        Ok(config)
    }

    fn view_parameters(&self) -> Result<ViewParameters, Box<dyn std::error::Error>> {
        let mut view = match &self.view {
            Some(path) => ViewParameters::from_json(&fs::read_to_string(path)?)?,
            None => self.preset.view(),
        };

        if let Some(max_iterations) = self.max_iterations {
            view.set_max_iterations(max_iterations);
        }

        Ok(view)
    }

    fn ppm_output(&self) -> Option<PathBuf> {
        match (&self.ppm, &self.csv) {
            (Some(path), _) => Some(path.clone()),
            (None, None) => Some(PathBuf::from(DEFAULT_OUTPUT)),
            (None, Some(_)) => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let view = args.view_parameters()?;
    let mut controller = SingleFrameController::new(args.render_config()?, view, args.width, args.height)?;

    let summary = controller.generate()?;
    println!(
        "Rendered {}x{} in {:?} (iterations {}..={})",
        summary.width,
        summary.height,
        summary.duration,
        summary.extrema.min_iter(),
        summary.extrema.max_iter()
    );

    if let Some(path) = args.ppm_output() {
        controller.write(&PpmFilePresenter::new(), &path)?;
        println!("Saved to {}", path.display());
    }

    if let Some(path) = &args.csv {
        controller.write(&CsvFilePresenter::new(), path)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}
