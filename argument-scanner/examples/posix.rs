//! This example demonstrates strict POSIX ordering: scanning stops at the
//! first positional argument and everything after it is left alone.
use argument_scanner::Scanner;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let mut scanner = Scanner::new(&mut argv);
    scanner.set_permute(false);

    loop {
        match scanner.scan_short("vn:") {
            Ok(Some('v')) => println!("Got -v"),
            Ok(Some('n')) => println!("Got number {:?}", scanner.arg()),
            Ok(Some(_)) => unreachable!(),
            Ok(None) => break,
            Err(err) => {
                eprintln!("error: {}", err);
                std::process::exit(1);
            }
        }
    }

    println!("args: {:?}", scanner.remaining());
}
