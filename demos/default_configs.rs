use bsm_surface::{build_surface_from_request, default_configs, MarketParameters, OptionType};

fn main() {
    let base = MarketParameters::default();

    println!("bsm-surface Default Surface Configurations\n");

    let presets = [
        ("Standard", default_configs::standard(), "Form defaults, interactive use"),
        ("Coarse", default_configs::coarse(), "Quick previews"),
        ("Fine", default_configs::fine(), "Smooth contours for reports"),
        ("Wide", default_configs::wide(), "Full slider range"),
    ];

    for (i, (name, request, use_case)) in presets.iter().enumerate() {
        println!("{}. {} Configuration:", i + 1, name);
        println!(
            "   Strikes: {:.0} - {:.0}",
            request.strike_min, request.strike_max
        );
        println!(
            "   Volatility: {:.0}% - {:.0}%",
            request.vol_min_percent, request.vol_max_percent
        );
        println!("   Resolution: {0} x {0}", request.resolution);

        match build_surface_from_request(&base, request) {
            Ok(grid) => {
                let (lo, hi) = grid.value_range(OptionType::Call);
                println!("   Call price range: {:.4} - {:.4}", lo, hi);
            }
            Err(e) => println!("   Surface build failed: {}", e),
        }
        println!("   Use case: {}\n", use_case);
    }
}
