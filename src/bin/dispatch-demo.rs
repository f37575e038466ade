//! Driver binary: runs the compiled-in sample scenario and prints one
//! line per dispatch outcome.

use dispatch_sim::scenario;

fn main() {
    for line in scenario::run() {
        println!("{line}");
    }
}
