//! Extenso CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use extenso_foundation::ScaleMode;
use extenso_parser::{Converter, ConverterConfig};
use extenso_runtime::{Repl, Session, init_tracing, render, run_batch};
use extenso_vocabulary::portuguese;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    phrases: Vec<String>,
    short_scale: bool,
    batch_mode: bool,
    explain: bool,
    max_tokens: Option<usize>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-s" | "--short-scale" => config.short_scale = true,
            "-e" | "--explain" => config.explain = true,
            "--max-tokens" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-tokens requires a value".into());
                }
                config.max_tokens = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --max-tokens value: {}", args[i]))?,
                );
            }
            "--" => {
                config.phrases.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            phrase => config.phrases.push(phrase.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("extenso {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing();

    let scale_mode = ScaleMode::from_short_flag(config.short_scale);
    let mut converter_config = ConverterConfig::default().with_scale_mode(scale_mode);
    if let Some(limit) = config.max_tokens {
        converter_config = converter_config.with_max_tokens(limit);
    }
    let converter = Converter::with_config(portuguese::standard(), converter_config);

    if !config.phrases.is_empty() {
        for phrase in &config.phrases {
            println!("{}", render(&converter.convert(phrase), config.explain));
        }
        return Ok(());
    }

    if config.batch_mode {
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        run_batch(stdin.lock(), &mut stdout, &converter, config.explain)?;
        return Ok(());
    }

    let mut repl = Repl::new()?
        .with_session(Session::with_scale_mode(scale_mode))
        .with_config(converter_config)
        .with_explain(config.explain);
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mExtenso\x1b[0m - Portuguese numbers in words to integers

\x1b[1mUSAGE:\x1b[0m
    extenso [OPTIONS] [PHRASE...]

\x1b[1mARGUMENTS:\x1b[0m
    [PHRASE...]    Phrases to convert, one result per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -s, --short-scale    Use the short scale (bilião = 10^9)
    -b, --batch          Read phrases from stdin, one per line
    -e, --explain        Print the reason next to InvalidNumber
    --max-tokens N       Reject phrases longer than N words

\x1b[1mEXAMPLES:\x1b[0m
    extenso                                  Start interactive REPL
    extenso \"cento e vinte e dois\"           Prints 122
    extenso -s \"dois biliões\"                Prints 2000000000
    extenso -e \"cento dois\"                  Explains the rejection
    extenso -b < phrases.txt                 Convert a file

\x1b[1mREPL COMMANDS:\x1b[0m
    :short / :long       Switch scale
    :why <phrase>        Convert and explain
    :why                 Explain the last rejection
    :help                List commands
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input

Set RUST_LOG=debug to trace conversions on stderr."
    );
}
