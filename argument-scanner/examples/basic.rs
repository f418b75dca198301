//! This is a basic example with help page, usage and error printing.
//!
//! Run with `RUST_LOG=trace` to see what the scanner is doing.
use argument_scanner::{Arity, LongOpt, Scanner};

const USAGE: &str = "basic [-n NUMBER]... [-c[COLOR]] [--shout] [--help] [FILE]...";
const HELP: &str = "basic
A small example of argument-scanner

USAGE:
    !!USAGE!!

OPTIONS:
    -n, --number <NUMBER>   adds a number to sum
    -c, --color[=<COLOR>]   colors the output
    --shout                 shouts!
    -h, --help              prints the help\
";

const SHOUT: u32 = 256;

const OPTIONS: &[LongOpt<'static>] = &[
    LongOpt::short("number", 'n', Arity::Required),
    LongOpt::short("color", 'c', Arity::Optional),
    LongOpt::new("shout", SHOUT, Arity::None),
    LongOpt::short("help", 'h', Arity::None),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let mut scanner = Scanner::new(&mut argv);
    let prog = scanner.prog().unwrap_or("basic");

    let mut numbers = Vec::<i64>::new();
    let mut color = None;
    let mut shout = false;

    loop {
        let code = match scanner.scan_long(OPTIONS) {
            Ok(Some(code)) => code,
            Ok(None) => break,
            Err(err) => {
                eprintln!("{}: {}", prog, err);
                eprintln!("usage: {}", USAGE);
                std::process::exit(1);
            }
        };
        match (code, scanner.arg()) {
            (SHOUT, _) => shout = true,
            (code, Some(value)) if code == u32::from('n') => match value.parse() {
                Ok(number) => numbers.push(number),
                Err(err) => {
                    eprintln!("{}: invalid number {:?} ({})", prog, value, err);
                    std::process::exit(1);
                }
            },
            (code, value) if code == u32::from('c') => color = Some(value.unwrap_or("auto")),
            (code, _) if code == u32::from('h') => {
                println!("{}", HELP.replace("!!USAGE!!", USAGE));
                return;
            }
            _ => unreachable!("option table and match are out of sync"),
        }
    }

    let files: Vec<&str> = scanner.positionals().collect();
    if numbers.is_empty() && !shout {
        println!("{}", USAGE);
    } else {
        println!("Numbers: {:?}", &numbers);
        println!("Sum: {}", numbers.into_iter().sum::<i64>());
        if shout {
            println!("I AM SHOUTING!");
        }
    }
    if let Some(color) = color {
        println!("Color: {}", color);
    }
    if !files.is_empty() {
        println!("Files: {:?}", files);
    }
}
