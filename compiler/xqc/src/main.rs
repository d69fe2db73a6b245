//! xqc: XQuery front-end inspector.

use std::path::Path;
use std::process::ExitCode;

use xq_lexer::Language;
use xqc::commands::{describe_dialect, explain_error, lex_file, CommandError};

fn main() -> ExitCode {
    xqc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];
    let result = match command.as_str() {
        "lex" => lex(&args[2..]),
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: xqc explain <ERROR_CODE>");
                eprintln!("Example: xqc explain XPST0003");
                return ExitCode::FAILURE;
            }
            explain_error(&args[2]).map(|text| {
                println!("{text}");
                ExitCode::SUCCESS
            })
        }
        "dialect" => {
            if args.len() < 3 {
                eprintln!("Usage: xqc dialect <spec>/<version>[+<spec>/<version>...]");
                eprintln!("Example: xqc dialect xquery/3.0+update/1.0");
                return ExitCode::FAILURE;
            }
            describe_dialect(&args[2]).map(|text| {
                print!("{text}");
                ExitCode::SUCCESS
            })
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        "version" | "--version" | "-V" => {
            println!("xqc {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn lex(args: &[String]) -> Result<ExitCode, CommandError> {
    let mut language = Language::default();
    let mut path = None;
    for arg in args {
        if let Some(name) = arg.strip_prefix("--language=") {
            language = name.parse()?;
        } else if !arg.starts_with('-') && path.is_none() {
            path = Some(arg.as_str());
        }
    }

    let Some(path) = path else {
        eprintln!("error: missing file path");
        eprintln!("Usage: xqc lex [--language=xquery|xqdoc|template] <file>");
        return Ok(ExitCode::FAILURE);
    };

    let output = lex_file(Path::new(path), language)?;
    print!("{}", output.listing);
    for diagnostic in &output.diagnostics {
        eprintln!("{diagnostic}");
    }
    Ok(if output.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_usage() {
    println!("xqc: XQuery front-end inspector");
    println!();
    println!("Usage: xqc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>          Tokenize a file and display tokens with exit states");
    println!("  explain <code>      Explain an error code (e.g., XPST0003)");
    println!("  dialect <text>      Show what a dialect string supports");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Lex options:");
    println!("  --language=<name>   xquery (default), xqdoc, template");
    println!();
    println!("Examples:");
    println!("  xqc lex query.xq");
    println!("  xqc lex --language=template attribute.txt");
    println!("  xqc explain err:XQST0031");
    println!("  xqc dialect basex/9.1");
    println!("  xqc dialect xquery/3.0+update/1.0+fulltext/1.0");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=xq_conformance=debug) for trace output.");
}
