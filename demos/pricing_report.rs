// demos/pricing_report.rs

//! Console front end for the pricing and Greeks kernels.
//!
//! Usage:
//!     cargo run --example pricing_report -- [request.toml] [formula_image]
//!
//! Without a request file the form defaults are used (S=K=100, T=1, r=5%, σ=20%).
//! The formula image defaults to `bsm.jpeg`; a missing image is reported and the
//! report continues.

use std::env;
use std::path::Path;

use anyhow::Result;
use bsm_surface::{OptionType, Valuation, ValuationRequest};
use tracing::{info, warn};

const DEFAULT_FORMULA_IMAGE: &str = "bsm.jpeg";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();
    let request = match args.get(1) {
        Some(path) => ValuationRequest::from_path(path)?,
        None => ValuationRequest::default(),
    };
    let image = args.get(2).map(String::as_str).unwrap_or(DEFAULT_FORMULA_IMAGE);

    println!("Black-Scholes Option Pricing Model");
    println!("==================================");

    show_formula_image(Path::new(image));

    let valuation = request.valuate()?;
    print_inputs(&valuation);
    print_prices(&valuation);
    print_greeks(&valuation);

    Ok(())
}

/// The formula image is decoration: report whether it is there, never fail.
fn show_formula_image(path: &Path) {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            info!(path = %path.display(), bytes = meta.len(), "formula image available");
        }
        Ok(_) => warn!(path = %path.display(), "formula image path is not a file"),
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "formula image not found, add it to the project folder to display it"
        ),
    }
}

fn print_inputs(v: &Valuation) {
    let p = &v.params;
    println!("\nInput Parameters");
    println!("  Spot Price (S):          {:>10.2}", p.spot);
    println!("  Strike Price (K):        {:>10.2}", p.strike);
    println!("  Time to Expiry (T, yrs): {:>10.4}", p.time_to_expiry);
    println!("  Risk-Free Rate (r):      {:>10.4}", p.risk_free_rate);
    println!("  Volatility (σ):          {:>10.4}", p.volatility);
}

fn print_prices(v: &Valuation) {
    println!("\nOption Pricing Results");
    println!("{:<26} {:<26}", "Call", "Put");
    println!("{}", "-".repeat(52));
    println!(
        "{:<26} {:<26}",
        format!("Price: ₹{:.2}", v.prices.get(OptionType::Call)),
        format!("Price: ₹{:.2}", v.prices.get(OptionType::Put)),
    );
    println!(
        "{:<26} {:<26}",
        format!("d₁: {:.4}", v.terms.d1),
        format!("d₂: {:.4}", v.terms.d2),
    );
    println!(
        "{:<26} {:<26}",
        format!("Φ(d₁): {:.4}", v.terms.cdf_d1),
        format!("Φ(d₂): {:.4}", v.terms.cdf_d2),
    );
    println!("  Put-call parity gap: {:.2e}", v.prices.parity_gap(&v.params));
}

fn print_greeks(v: &Valuation) {
    println!("\nGreeks");
    for (name, value) in v.greeks.entries() {
        println!("  {:<14} {:>10.4}", format!("{name}:"), value);
    }
}
