use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, Command};
use log::error;

use header_guard::filter::guard;
use header_guard::version::VERSION;

fn main() {
    env_logger::init();

    const INPUT: &str = "input";

    let matches = Command::new("header_guard")
        .arg_required_else_help(true)
        .version(VERSION)
        .about("Rewrites #ifndef/#define include guards to #pragma once")
        .arg(
            Arg::new(INPUT)
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf))
                .help("Header file to rewrite in place"),
        )
        .get_matches();

    let input = matches.get_one::<PathBuf>(INPUT).unwrap();
    process::exit(match guard::rewrite_file(input) {
        Ok(()) => 0,
        Err(e) => {
            error!("FATAL ERROR: {e}");
            500
        }
    });
}
