/// Horizon Ranges Example
///
/// Shows how the distance to the horizon, and the range at a few reticle
/// readings, change with observer height.

use sightline::{Length, RangeModel, RangeStrategy, INSTRUMENT_TABLE};

fn main() {
    println!("=== Horizon Ranges Example ===\n");

    let heights_ft = [10.0, 50.0, 143.5, 300.0, 1000.0];
    let readings = [0.5, 1.0, 5.0, 20.0];

    println!("{:>10} {:>12}", "height", "horizon");
    for h in heights_ft {
        let model = RangeModel::with_defaults(
            RangeStrategy::Exact,
            Length::feet(h),
            INSTRUMENT_TABLE.clone(),
        );
        println!(
            "{:>8.1}ft {:>10.2}mi",
            h,
            model.horizon_distance().as_miles()
        );
    }

    println!("\nRange by reticle reading at 143.5 ft (exact strategy):");
    let model = RangeModel::with_defaults(
        RangeStrategy::Exact,
        Length::feet(143.5),
        INSTRUMENT_TABLE.clone(),
    );
    for r in readings {
        match model.distance(r) {
            Ok(d) => println!("  reticle {:>4.1} -> {:>9.1} m", r, d.as_meters()),
            Err(err) => println!("  reticle {:>4.1} -> error: {err}", r),
        }
    }

    println!("\nA subject filling no measurable angle sits at the horizon:");
    let at_horizon = model.distance(0.0).unwrap();
    println!(
        "  reticle  0.0 -> {:>9.1} m ({:.2} mi)",
        at_horizon.as_meters(),
        at_horizon.as_miles()
    );
}
