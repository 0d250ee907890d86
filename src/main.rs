//! flightlog main entrypoint.

use flightlog::run;
use flightlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
