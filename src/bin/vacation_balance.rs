use std::process;

use clap::Parser;
use vacation_core::{
    cli::{commands, BalanceArgs},
    init,
};

fn main() {
    let args = BalanceArgs::parse();
    init(args.common.verbose);

    if let Err(err) = commands::balance::run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
