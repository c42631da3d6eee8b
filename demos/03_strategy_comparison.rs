/// Strategy Comparison Example
///
/// Prints the exact, approximate, and lookup-table ranges side by side
/// across the reticle sweep. The two formula strategies agree to a few
/// parts per million at observation heights; the calibrated table differs
/// because it bakes in the instrument's real-world behavior.

use sightline::{Length, RangeModel, RangeStrategy, INSTRUMENT_TABLE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Range Strategy Comparison ===\n");

    let height = Length::feet(143.5);
    let exact = RangeModel::with_defaults(RangeStrategy::Exact, height, INSTRUMENT_TABLE.clone());
    let approx =
        RangeModel::with_defaults(RangeStrategy::Approximate, height, INSTRUMENT_TABLE.clone());
    let lookup = RangeModel::with_defaults(RangeStrategy::Lookup, height, INSTRUMENT_TABLE.clone());

    println!(
        "{:>7} {:>12} {:>12} {:>12} {:>12}",
        "reticle", "exact (m)", "approx (m)", "table (m)", "e-a diff"
    );

    for i in 0..=20 {
        let reticle = i as f64;
        let de = exact.distance(reticle)?.as_meters();
        let da = approx.distance(reticle)?.as_meters();
        let dt = lookup.distance(reticle)?.as_meters();
        println!(
            "{:>7.1} {:>12.2} {:>12.2} {:>12.2} {:>12.6}",
            reticle,
            de,
            da,
            dt,
            de - da
        );
    }

    println!("\nAt reticle 0 every strategy reports the horizon for its height;");
    println!("the formula strategies use k*sqrt(h), the table its calibrated entry.");

    Ok(())
}
