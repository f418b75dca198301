//! A small git-like command line showing subcommands.
//!
//! Global options are scanned in strict order so scanning stops at the
//! subcommand.  The subcommand name is stepped over with `next_arg` and the
//! same scanner carries on with the subcommand's own option table.
use argument_scanner::{Arity, LongOpt, Scanner};

const GLOBAL: &[LongOpt<'static>] = &[
    LongOpt::short("verbose", 'v', Arity::None),
    LongOpt::short("directory", 'C', Arity::Required),
];

const COMMIT: &[LongOpt<'static>] = &[
    LongOpt::short("all", 'a', Arity::None),
    LongOpt::short("message", 'm', Arity::Required),
    LongOpt::new("amend", 256, Arity::None),
];

const CLONE: &[LongOpt<'static>] = &[
    LongOpt::new("depth", 256, Arity::Required),
    LongOpt::short("branch", 'b', Arity::Required),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let mut scanner = Scanner::new(&mut argv);
    scanner.set_permute(false);

    if let Err(message) = run(&mut scanner) {
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}

fn run(scanner: &mut Scanner<'_, '_>) -> Result<(), String> {
    while scanner.scan_long(GLOBAL).map_err(|e| e.to_string())?.is_some() {
        let name = scanner.long_index().map_or("?", |idx| GLOBAL[idx].name);
        println!("global --{} {:?}", name, scanner.arg());
    }

    let command = match scanner.next_arg() {
        Some(command) => command,
        None => return Err("missing subcommand".into()),
    };
    let table = match command {
        "commit" => COMMIT,
        "clone" => CLONE,
        other => return Err(format!("unknown subcommand '{}'", other)),
    };

    // options may follow positionals again within the subcommand
    scanner.set_permute(true);
    while let Some(code) = scanner.scan_long(table).map_err(|e| e.to_string())? {
        let name = scanner.long_index().map_or("?", |idx| table[idx].name);
        println!("{} --{} (code {}) {:?}", command, name, code, scanner.arg());
    }

    println!("{} args: {:?}", command, scanner.positionals().collect::<Vec<_>>());
    Ok(())
}
