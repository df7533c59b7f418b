//! Shift-cipher CLI entry point and error boundary.

use std::env;

use colored::Colorize;

const ERROR: &str = "Error";

fn main() {
    ccli::init_tracing();
    let tokens: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = ccli::run(&tokens) {
        // the specific fault stays in diagnostics; the user sees one fixed line
        tracing::error!("{err:#}");
        println!("{}", ERROR.red());
    }
}
