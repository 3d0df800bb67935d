// Example: heatmap.rs
// Builds call and put price surfaces over strike and volatility and renders each
// one as an SVG heatmap. The raw grid is also written as CSV.
//
// Usage:
//     cargo run --example heatmap -- [request.toml]
//
// Outputs call_heatmap.svg, put_heatmap.svg and price_surface.csv in the working
// directory.

use std::env;
use std::error::Error;

use bsm_surface::{OptionType, SensitivityGrid, ValuationRequest};
use plotters::prelude::*;
use tracing::info;

#[derive(serde::Serialize)]
struct CsvRow {
    volatility_percent: f64,
    strike: f64,
    call: f64,
    put: f64,
}

/// Maps a normalized value in [0, 1] from dark blue-violet to yellow.
fn heat_color(t: f64) -> HSLColor {
    let t = t.clamp(0.0, 1.0);
    HSLColor(0.75 - 0.6 * t, 0.85, 0.2 + 0.45 * t)
}

fn render_heatmap(
    grid: &SensitivityGrid,
    option_type: OptionType,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let strikes = &grid.strike_axis;
    let vols = grid.volatility_axis_percent();
    let (rows, cols) = grid.shape();

    let dx = (strikes[cols - 1] - strikes[0]) / (cols - 1) as f64;
    let dy = (vols[rows - 1] - vols[0]) / (rows - 1) as f64;
    let (lo, hi) = grid.value_range(option_type);
    let span = hi - lo;

    let title = match option_type {
        OptionType::Call => "Call Option Price Heatmap",
        OptionType::Put => "Put Option Price Heatmap",
    };

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "{title} (S={:.0}, T={:.2}y, r={:.2}%)",
                grid.base.spot,
                grid.base.time_to_expiry,
                grid.base.risk_free_rate * 100.0
            ),
            ("sans-serif", 26),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (strikes[0] - dx / 2.0)..(strikes[cols - 1] + dx / 2.0),
            (vols[0] - dy / 2.0)..(vols[rows - 1] + dy / 2.0),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Strike Price (K)")
        .y_desc("Volatility (%)")
        .draw()?;

    chart.draw_series(
        grid.surface(option_type)
            .indexed_iter()
            .map(|((i, j), &price)| {
                let x = strikes[j];
                let y = vols[i];
                let t = if span > 0.0 { (price - lo) / span } else { 0.0 };
                Rectangle::new(
                    [(x - dx / 2.0, y - dy / 2.0), (x + dx / 2.0, y + dy / 2.0)],
                    heat_color(t).filled(),
                )
            }),
    )?;

    root.present()?;
    info!(path = path, min = lo, max = hi, "rendered {} surface", option_type);
    Ok(())
}

fn write_csv(grid: &SensitivityGrid, path: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    let vols = grid.volatility_axis_percent();
    let (rows, cols) = grid.shape();

    for i in 0..rows {
        for j in 0..cols {
            writer.serialize(CsvRow {
                volatility_percent: vols[i],
                strike: grid.strike_axis[j],
                call: grid.call_surface[[i, j]],
                put: grid.put_surface[[i, j]],
            })?;
        }
    }
    writer.flush()?;
    info!(path = path, cells = rows * cols, "wrote price surface");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();
    let request = match args.get(1) {
        Some(path) => ValuationRequest::from_path(path)?,
        None => ValuationRequest::default(),
    };

    let grid = request.build_surface()?;
    let (rows, cols) = grid.shape();
    println!(
        "Surface: {} strikes [{:.1}, {:.1}] x {} vols [{:.1}%, {:.1}%]",
        cols,
        request.surface.strike_min,
        request.surface.strike_max,
        rows,
        request.surface.vol_min_percent,
        request.surface.vol_max_percent
    );

    for option_type in OptionType::ALL {
        render_heatmap(&grid, option_type, &format!("{option_type}_heatmap.svg"))?;
    }
    write_csv(&grid, "price_surface.csv")?;

    println!("Heatmaps saved to call_heatmap.svg and put_heatmap.svg");
    Ok(())
}
