//! hmd-aspect CLI
//!
//! Command-line interface for inspecting and converting aspect ratios.

use clap::{Parser, Subcommand, ValueEnum};
use hmd_aspect::{
    AspectPreset, AspectSlider, DisplayConfig, Frac, Resolution, SliderConfig, SliderScale,
    QUANTIZATION_BASE,
};
use std::path::PathBuf;
use std::str::FromStr;

/// Slider scale for CLI
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Scale {
    /// Position is the decimal ratio
    #[default]
    Linear,
    /// Position is the log2 exponent
    Exponential,
}

impl From<Scale> for SliderScale {
    fn from(s: Scale) -> Self {
        match s {
            Scale::Linear => SliderScale::Linear,
            Scale::Exponential => SliderScale::Exponential,
        }
    }
}

/// Arithmetic operator for `calc`
#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" | "x" => Ok(Op::Mul),
            "/" => Ok(Op::Div),
            other => Err(format!("unknown operator {other:?}, expected + - * /")),
        }
    }
}

#[derive(Parser)]
#[command(name = "hmd-aspect")]
#[command(about = "Aspect-ratio engine for head-mounted video players")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a decimal aspect ratio to a fraction (1/128 steps)
    Reduce {
        #[arg(allow_negative_numbers = true)]
        decimal: f64,
    },

    /// Aspect ratio for a log2 exponent
    Exp {
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },

    /// Parse ratio text (e.g. 16:9) and show its forms
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: Frac,
    },

    /// Combine two ratio texts (e.g. `calc 16:9 / 4:3`)
    Calc {
        #[arg(allow_hyphen_values = true)]
        lhs: Frac,
        #[arg(allow_hyphen_values = true)]
        op: Op,
        #[arg(allow_hyphen_values = true)]
        rhs: Frac,

        /// Reduce the result to 1/128 steps
        #[arg(short, long)]
        reduce: bool,
    },

    /// Source aspect ratio of a texture size (e.g. 1920x1080)
    Source { resolution: Resolution },

    /// List available presets
    Presets,

    /// Ratio selected at a slider position
    Slider {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Slider scale (ignored when --config is given)
        #[arg(short, long, value_enum, default_value = "linear")]
        scale: Scale,

        /// Read slider settings from a display config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a display config (defaults when no path is given)
    Config {
        /// Config file to load and validate
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hmd_aspect=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Reduce { decimal } => {
            print_frac(&Frac::from_decimal(decimal));
            Ok(())
        }
        Commands::Exp { exponent } => {
            print_frac(&Frac::from_exponent(exponent));
            Ok(())
        }
        Commands::Parse { text } => {
            print_frac(&text);
            Ok(())
        }
        Commands::Calc {
            lhs,
            op,
            rhs,
            reduce,
        } => cmd_calc(lhs, op, rhs, reduce),
        Commands::Source { resolution } => {
            println!("Texture: {}", resolution);
            print_frac(&resolution.aspect_ratio());
            Ok(())
        }
        Commands::Presets => cmd_presets(),
        Commands::Slider {
            value,
            scale,
            config,
        } => cmd_slider(value, scale, config),
        Commands::Config { path } => cmd_config(path),
    }
}

fn print_frac(frac: &Frac) {
    println!("Ratio:    {}", frac.to_ratio_text());
    println!("Fraction: {}", frac);
    println!("Decimal:  {}", frac.to_decimal());
    match frac.checked_exponent() {
        Ok(exp) => println!("Exponent: {}", exp),
        Err(e) => println!("Exponent: n/a ({})", e),
    }
}

fn cmd_calc(lhs: Frac, op: Op, rhs: Frac, reduce: bool) -> anyhow::Result<()> {
    let result = match op {
        Op::Add => lhs + rhs,
        Op::Sub => lhs - rhs,
        Op::Mul => lhs * rhs,
        Op::Div => lhs / rhs,
    };

    let result = if reduce {
        tracing::debug!("Reducing {} to 1/{} steps", result, QUANTIZATION_BASE);
        result.reduced()
    } else {
        result
    };

    print_frac(&result);
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("Available Presets:");
    println!("==================\n");

    for preset in AspectPreset::ALL {
        match (preset.ratio_text(), preset.ratio()) {
            (Some(text), Some(frac)) => println!(
                "  {:<16} {:>7}  ({:.4})",
                preset.name(),
                text,
                frac.to_decimal()
            ),
            _ => println!("  {:<16} {:>7}", preset.name(), "stream"),
        }
    }

    Ok(())
}

fn cmd_slider(value: f64, scale: Scale, config: Option<PathBuf>) -> anyhow::Result<()> {
    let slider = match config {
        Some(path) => DisplayConfig::load(&path)?.slider()?,
        None => {
            let slider_config = match SliderScale::from(scale) {
                SliderScale::Linear => SliderConfig::default(),
                SliderScale::Exponential => SliderConfig::exponential(),
            };
            AspectSlider::from_config(&slider_config)?
        }
    };

    let (min, max) = slider.range();
    println!("Slider: {:?} {}..{}", slider.scale(), min, max);
    print_frac(&slider.ratio_at(value));
    Ok(())
}

fn cmd_config(path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match path {
        Some(path) => DisplayConfig::load(&path)?,
        None => DisplayConfig::default(),
    };

    print!("{}", config.to_toml_string()?);

    if let Some(frac) = config.effective_ratio() {
        println!("\n# effective ratio: {} ({:.4})", frac.to_ratio_text(), frac.to_decimal());
    }
    Ok(())
}
