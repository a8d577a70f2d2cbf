//! User-facing console output.
//!
//! Primary results (the "moved X -> Y" lines) go to stdout with no prefix so
//! they can be scripted against. Diagnostics carry a severity prefix; info
//! and success use stdout, warnings and errors use stderr. Color is applied
//! only when the stream actually being written to is a TTY.

use owo_colors::OwoColorize;

fn colorize(stream: atty::Stream) -> bool {
    atty::is(stream)
}

pub fn print_info(msg: &str) {
    if colorize(atty::Stream::Stdout) {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if colorize(atty::Stream::Stdout) {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if colorize(atty::Stream::Stderr) {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if colorize(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Plain line with no prefix, for output users may pipe into scripts.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
