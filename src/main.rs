use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use curveplot::{Point, Scene, Series, sampler};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "curveplot", version, about = "Sample curves and find where they meet")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample one curve and print it as CSV
    Sample {
        #[command(subcommand)]
        curve: CurveArgs,
    },
    /// Print the intersection label for a query point
    #[command(allow_negative_numbers = true)]
    Probe {
        /// Scene file (RON)
        #[arg(long)]
        scene: PathBuf,
        /// Query X in data coordinates
        x: f64,
        /// Query Y in data coordinates
        y: f64,
    },
    /// Print name, sample count and bounds of every series in a scene
    Bounds {
        /// Scene file (RON)
        #[arg(long)]
        scene: PathBuf,
    },
}

#[derive(Subcommand)]
enum CurveArgs {
    /// A + B·f(C·x) for sin, cos, tan or ctan
    #[command(allow_negative_numbers = true)]
    Trig {
        kind: String,
        a: f64,
        b: f64,
        c: f64,
        start: f64,
        end: f64,
    },
    /// parabola, hyperbola, ellipse or circle
    #[command(allow_negative_numbers = true)]
    SecondOrder {
        kind: String,
        a: f64,
        b: f64,
        c: f64,
        start: f64,
        end: f64,
    },
    /// A·e^(B·x) or A·ln(B·x)
    #[command(allow_negative_numbers = true)]
    ExpLog {
        kind: String,
        a: f64,
        b: f64,
        start: f64,
        end: f64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "curveplot=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Sample { curve } => {
            let series = sample(curve)?;
            write_csv(&series)
        }
        Command::Probe { scene, x, y } => {
            let collection = load_scene(&scene)?.build();
            println!("{}", collection.probe(Point::new(x, y)));
            Ok(())
        }
        Command::Bounds { scene } => {
            let collection = load_scene(&scene)?.build();
            for series in collection.series() {
                match series.bounds() {
                    Some(bounds) => println!(
                        "{}: {} samples, x [{:.2}, {:.2}], y [{:.2}, {:.2}]",
                        series.name(),
                        series.len(),
                        bounds.x.min,
                        bounds.x.max,
                        bounds.y.min,
                        bounds.y.max
                    ),
                    None => println!("{}: {} samples", series.name(), series.len()),
                }
            }
            Ok(())
        }
    }
}

fn sample(curve: CurveArgs) -> anyhow::Result<Series> {
    let series = match curve {
        CurveArgs::Trig {
            kind,
            a,
            b,
            c,
            start,
            end,
        } => sampler::sample_trigonometric(&kind, a, b, c, start, end)?,
        CurveArgs::SecondOrder {
            kind,
            a,
            b,
            c,
            start,
            end,
        } => sampler::sample_second_order(&kind, a, b, c, start, end)?,
        CurveArgs::ExpLog {
            kind,
            a,
            b,
            start,
            end,
        } => sampler::sample_exp_log(&kind, a, b, start, end)?,
    };
    Ok(series)
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    Scene::load(path).with_context(|| format!("loading scene {}", path.display()))
}

fn write_csv(series: &Series) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for point in series.points() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
