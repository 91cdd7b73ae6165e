//! dailycheck main entrypoint.

use dailycheck::run;
use dailycheck::ui::messages::{error, info};

fn main() {
    println!();
    match run() {
        Ok(()) => {}
        // nothing to export / duplicate is reported, not treated as a failure
        Err(e) if e.is_informational() => info(e),
        Err(e) => {
            error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
