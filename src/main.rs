//! rTimeLedger main entrypoint.

use rtimeledger::run;
use rtimeledger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
