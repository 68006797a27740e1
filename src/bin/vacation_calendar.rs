use std::process;

use clap::Parser;
use vacation_core::{
    cli::{commands, CalendarArgs},
    init,
};

fn main() {
    let args = CalendarArgs::parse();
    init(args.common.verbose);

    if let Err(err) = commands::calendar::run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
