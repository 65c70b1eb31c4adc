//! Basic Estimation Example
//!
//! Demonstrates the core Hydrogauge workflow: feed raw gauge readings to the
//! estimation engine and render the resulting estimates.
//!
//! ## What You'll Learn
//!
//! - Estimating remaining gas from a pressure + temperature reading
//! - How temperature shifts the reading at constant pressure
//! - How out-of-range readings saturate instead of erroring
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_estimation
//! ```

use hydrogauge_core::{CylinderSpec, GasEstimator};

fn main() {
    println!("Hydrogauge Basic Estimation Example");
    println!("===================================\n");

    let engine = GasEstimator::REFERENCE;
    let spec = CylinderSpec::MH_450;

    println!(
        "Cylinder: {} ({} NL, {} alloy, {:.0} mL/min load)\n",
        spec.model, spec.max_capacity_nl, spec.alloy, spec.discharge_rate_ml_min
    );

    println!("Readings across the discharge range:");
    println!("------------------------------------");
    let readings = [
        (500.0, 20.0, "Fresh from the filling station"),
        (60.0, 20.0, "Mid-plateau"),
        (25.0, 20.0, "Coming off the plateau"),
        (5.0, 20.0, "Nearly exhausted"),
        (0.0, 20.0, "Transducer reads zero"),
    ];

    for (pressure_psi, temperature_c, label) in &readings {
        let est = engine.estimate(*pressure_psi, *temperature_c, &spec);
        println!(
            "  {:>6.1} psi @ {:>4.1}°C  →  {:>5.1}% | {:>5.1} NL | {:>4} min | {}",
            pressure_psi,
            temperature_c,
            est.remaining_percent,
            est.remaining_nl,
            est.runtime_min,
            est.status.as_str(),
        );
        println!("         {}", label);
    }

    println!("\nSame pressure, different cylinder temperatures:");
    println!("-----------------------------------------------");
    for temperature_c in [0.0, 10.0, 20.0, 30.0, 40.0] {
        let est = engine.estimate(40.0, temperature_c, &spec);
        println!(
            "  40.0 psi @ {:>4.1}°C  →  {:>5.1}% ({})",
            temperature_c,
            est.remaining_percent,
            est.status.as_str(),
        );
    }

    println!("\nSaturation at the calibration boundaries:");
    println!("-----------------------------------------");
    let frozen = engine.estimate(150.0, -30.0, &spec);
    let baked = engine.estimate(150.0, 70.0, &spec);
    println!("  150.0 psi @ -30°C reads as 0°C  → {:>5.1}%", frozen.remaining_percent);
    println!("  150.0 psi @  70°C reads as 40°C → {:>5.1}%", baked.remaining_percent);
}
