// ============================================================================
// ball-decimal CLI
// Parses one decimal literal into a ball and prints its midpoint
// ============================================================================
//
// With no arguments the fixed reference literal is parsed at 256 bits and
// printed to 20 significant digits. Exit status is non-zero when parsing fails.

use ball_decimal::prelude::*;
use clap::Parser;
use std::process::ExitCode;

const DEFAULT_LITERAL: &str = "1.23456864936982369264298462339e11";

#[derive(Parser, Debug)]
#[command(
    name = "ball-decimal",
    version,
    about = "Parse a decimal literal into a midpoint-radius ball"
)]
struct Cli {
    /// Decimal literal to parse (the real part when --imag is given)
    #[arg(long, default_value = DEFAULT_LITERAL, allow_hyphen_values = true)]
    literal: String,

    /// Imaginary part; parses a complex ball when present
    #[arg(long, allow_hyphen_values = true)]
    imag: Option<String>,

    /// Working precision in bits
    #[arg(long, default_value_t = 256)]
    prec: u64,

    /// Significant digits to display
    #[arg(long, default_value_t = DEFAULT_DISPLAY_DIGITS)]
    digits: usize,

    /// Display `[mid +/- rad]` instead of the midpoint alone
    #[arg(long)]
    range: bool,

    /// Rounding mode: nearest, down, up, floor, ceiling
    #[arg(long, default_value = "nearest")]
    rounding: RoundingMode,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let ctx = match Context::new(cli.prec) {
        Ok(ctx) => ctx.with_rounding(cli.rounding),
        Err(err) => {
            println!("Failed to parse: {} ({})", cli.literal, err);
            return ExitCode::FAILURE;
        },
    };
    tracing::info!(
        precision = ctx.precision(),
        decimal_digits = ctx.display_digits(),
        "using working precision"
    );

    let rendered = match &cli.imag {
        Some(imag) => ComplexBall::parse(&cli.literal, imag, &ctx)
            .map(|z| render_complex(&z, &cli))
            .map_err(|err| err.to_string()),
        None => Ball::parse(&cli.literal, &ctx)
            .map(|x| render_real(&x, &cli))
            .map_err(|err| err.to_string()),
    };

    match rendered {
        Ok(text) => {
            println!("Success parsing: {}", describe_input(&cli));
            println!("{}", text);
            ExitCode::SUCCESS
        },
        Err(reason) => {
            println!("Failed to parse: {} ({})", describe_input(&cli), reason);
            ExitCode::FAILURE
        },
    }
}

fn describe_input(cli: &Cli) -> String {
    match &cli.imag {
        Some(imag) => format!("{},{}", cli.literal, imag),
        None => cli.literal.clone(),
    }
}

fn render_real(x: &Ball, cli: &Cli) -> String {
    if cli.range {
        x.to_range_string(cli.digits)
    } else {
        x.to_decimal_string(cli.digits)
    }
}

fn render_complex(z: &ComplexBall, cli: &Cli) -> String {
    if cli.range {
        z.to_range_string(cli.digits)
    } else {
        z.to_decimal_string(cli.digits)
    }
}

#[cfg(feature = "logging")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "logging"))]
fn init_tracing() {}
