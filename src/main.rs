//! Informational entry point; the real interface is `sightline-cli`.

fn main() {
    println!("Sightline v0.1.0");
    println!();
    println!("Reticle-to-range estimation with great-circle target projection.");
    println!();
    println!("Use the command-line tool:");
    println!("  cargo run --bin sightline-cli -- sweep");
    println!("  cargo run --bin sightline-cli -- range --reticle 5.0");
    println!("  cargo run --bin sightline-cli -- project --lat 33.74475 --lon -118.4107 \\");
    println!("      --bearing 270 --distance 1493 --unit m");
    println!();
    println!("Or as a library:");
    println!("  Add to Cargo.toml: sightline = \"0.1\"");
}
