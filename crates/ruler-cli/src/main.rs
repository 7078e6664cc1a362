use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ruler_core::constants::{MM_PER_CM, digit_count};
use ruler_core::{Emphasis, RulerGeometry, RulerSpec};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Characters drawn for a full-width cap in text output
const TEXT_STRIPE_WIDTH: f32 = 20.0;

#[derive(Parser)]
#[command(name = "ruler", about = "Vertical ruler geometry tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tick and label counts, optionally listing every entry
    Geometry {
        #[command(flatten)]
        ruler: RulerArgs,

        /// List every tick and label
        #[arg(long)]
        list: bool,
    },

    /// Draw the ruler as text, one line per millimeter
    Draw {
        #[command(flatten)]
        ruler: RulerArgs,
    },

    /// Write ruler settings to a JSON file
    InitConfig {
        /// Output JSON file
        output: PathBuf,

        #[command(flatten)]
        ruler: RulerArgs,
    },
}

#[derive(Args)]
struct RulerArgs {
    /// Upper limit of the ruler in cm
    #[arg(long, allow_negative_numbers = true)]
    max_cm: Option<i64>,

    /// Number of pixels between each mm
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<i64>,

    /// Highlight every fifth millimeter
    #[arg(long, conflicts_with = "no_fives")]
    show_fives: bool,

    /// Do not highlight every fifth millimeter
    #[arg(long)]
    no_fives: bool,

    /// JSON settings file supplying defaults for the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RulerArgs {
    async fn resolve(&self) -> Result<RulerSpec> {
        let mut spec = match &self.config {
            Some(path) => RulerSpec::load(path)
                .await
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => RulerSpec::default(),
        };

        if let Some(max_cm) = self.max_cm {
            spec.max_cm = max_cm;
        }
        if let Some(scale) = self.scale {
            spec.pixel_scale = scale;
        }
        if self.show_fives {
            spec.show_fives = true;
        }
        if self.no_fives {
            spec.show_fives = false;
        }

        spec.validate()?;
        Ok(spec)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Geometry { ruler, list } => {
            let spec = ruler.resolve().await?;
            let geometry = spec.geometry()?;
            let layout = spec.build()?;

            println!("{}", spec.title());
            println!("  Ticks: {} (+1 terminal)", geometry.interior_ticks().len());
            println!("  Labels: {}", geometry.labels.len());
            println!("  Size: {:.0} x {:.0} px", layout.width, layout.height);

            if list {
                for tick in &geometry.ticks {
                    println!("  tick {:>7} mm  {:?}", tick.position_mm, tick.emphasis);
                }
                for label in &geometry.labels {
                    let kind = if label.terminal { " (terminal)" } else { "" };
                    println!("  label {:>6}{kind}", label.value);
                }
            }
        }
        Commands::Draw { ruler } => {
            let spec = ruler.resolve().await?;
            let geometry = spec.geometry()?;
            print!("{}", render_text(&geometry));
        }
        Commands::InitConfig { output, ruler } => {
            let spec = ruler.resolve().await?;
            spec.save(&output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Settings → {}", output.display());
        }
    }

    Ok(())
}

/// Text rendering: labels on the left, caps drawn with dashes.
fn render_text(geometry: &RulerGeometry) -> String {
    let max_value = geometry.labels.last().map_or(0, |label| label.value);
    let label_width = digit_count(max_value) as usize;

    let mut out = String::new();
    for tick in &geometry.ticks {
        // Every centimeter boundary, the terminal one included, carries a label
        let label = if tick.position_mm % MM_PER_CM == 0 {
            (tick.position_mm / MM_PER_CM).to_string()
        } else {
            String::new()
        };

        let cap = "-".repeat((tick.emphasis.cap_fraction() * TEXT_STRIPE_WIDTH).round() as usize);
        let edge = if tick.emphasis == Emphasis::Terminal {
            '+'
        } else {
            '|'
        };
        let _ = writeln!(out, "{label:>label_width$} {edge}{cap}");
    }
    out
}
