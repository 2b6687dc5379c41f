//! rAttendview main entrypoint.

use rattendview::run;
use rattendview::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
