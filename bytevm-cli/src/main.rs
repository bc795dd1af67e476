//! Byte VM CLI — load a program image and execute it.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage or input error
//! - 2: Runtime fault

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    if args.len() != 2 {
        eprintln!("error: expected exactly one program file");
        eprintln!();
        print_usage();
        process::exit(1);
    }

    if let Err(code) = commands::run(&args[1]) {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: bytevm <program.bin>");
    eprintln!();
    eprintln!("Executes a flat byte-stream program image. The emit instruction");
    eprintln!("writes to standard output; execution stops at the halt byte.");
}
