use std::process;

use clap::Parser;
use vacation_core::{
    cli::{commands, RequestArgs},
    init,
};

fn main() {
    let args = RequestArgs::parse();
    init(args.common.verbose);

    if let Err(err) = commands::request::run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
