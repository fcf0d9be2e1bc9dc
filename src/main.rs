//! rLabourRatio main entrypoint.

use rlabourratio::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
