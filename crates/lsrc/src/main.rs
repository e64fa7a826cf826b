//! `lsr` CLI
//!
//! Inspect how inputs split into lines and characters, and render
//! diagnostics at positions within them.

use lsrc::commands::{dump_chars, dump_lines, mark_file, parse_mark_args};

fn main() {
    lsrc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lines" => {
            if args.len() < 3 {
                eprintln!("Usage: lsr lines <file>");
                std::process::exit(1);
            }
            dump_lines(&args[2]);
        }
        "chars" => {
            if args.len() < 3 {
                eprintln!("Usage: lsr chars <file>");
                std::process::exit(1);
            }
            dump_chars(&args[2]);
        }
        "mark" => match parse_mark_args(&args[2..]) {
            Ok(request) => mark_file(&request),
            Err(e) => {
                eprintln!("error: {e}");
                eprintln!();
                eprintln!("Usage: lsr mark <file> <line>:<col> [<line>:<col>] [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --severity=<s>      error (default), warning, note, info");
                eprintln!("  --message=<text>    Message text (default: \"marked here\")");
                eprintln!("  --color=<mode>      auto (default), always, never");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lsr {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("lsr: line and character source reader");
    println!();
    println!("Usage: lsr <command> [options]");
    println!();
    println!("Commands:");
    println!("  lines <file>         Print each line with its terminator (LF, CR, CRLF, EOF)");
    println!("  chars <file>         Print each character with its line and column");
    println!("  mark <file> <l:c> [<l:c>]");
    println!("                       Point at a character or span on stderr");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Mark options:");
    println!("  --severity=<s>      error (default), warning, note, info");
    println!("  --message=<text>    Message text (default: \"marked here\")");
    println!("  --color=<mode>      auto (default), always, never");
    println!();
    println!("Examples:");
    println!("  lsr lines notes.txt");
    println!("  lsr chars notes.txt | head");
    println!("  lsr mark notes.txt 3:7                     # Caret under line 3, column 7");
    println!("  lsr mark notes.txt 3:7 4:2 --severity=note  # Underline a span");
    println!();
    println!("Set RUST_LOG=lsr_source=debug to trace reads.");
}
