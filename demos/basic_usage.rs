// ============================================================================
// Basic Usage Example
// ============================================================================

use ball_decimal::prelude::*;

fn main() {
    println!("=== Ball Decimal Example ===\n");

    let ctx = Context::new(256).unwrap();
    println!(
        "Working precision: {} bits (~{} decimal digits)\n",
        ctx.precision(),
        ctx.display_digits()
    );

    // Parse a few literals and show midpoint and enclosure
    println!("Parsing literals...");
    for literal in ["1.23456864936982369264298462339e11", "0.1", "-42", "6.02214076e23"] {
        match parse(literal, &ctx) {
            Ok(ball) => {
                println!("  {:<36} -> {}", literal, ball);
                println!("  {:<36}    {:#}", "", ball);
            },
            Err(err) => println!("  {:<36} -> error: {}", literal, err),
        }
    }

    // Same literal at increasing precision: the radius shrinks
    println!("\n=== Radius vs Precision ===");
    for bits in [16u64, 53, 113, 256] {
        let ball = parse_with_precision("0.1", bits).unwrap();
        println!("  {:>4} bits: {:#.25}", bits, ball);
    }

    // Directed rounding brackets the value from one side
    println!("\n=== Directed Rounding ===");
    for mode in [RoundingMode::Floor, RoundingMode::Ceiling] {
        let ctx = Context::double().with_rounding(mode);
        let ball = parse("2.7", &ctx).unwrap();
        println!("  {:?}: {:.20}", mode, ball);
    }

    // Midpoint-radius input
    println!("\n=== Ball Literals ===");
    let ball = parse_ball_literal("[3.14159 +/- 0.00001]", &ctx).unwrap();
    println!("  {:#.10}", ball);

    // Complex pair
    println!("\n=== Complex ===");
    match ComplexBall::parse_pair("1.5,-0.25", &ctx) {
        Ok(z) => println!("  {}", z),
        Err(err) => println!("  error: {}", err),
    }

    // Rejected inputs
    println!("\n=== Rejected Inputs ===");
    for literal in ["", "12.3.4", "1e", "abc"] {
        println!("  {:?}: {}", literal, parse(literal, &ctx).unwrap_err());
    }
}
