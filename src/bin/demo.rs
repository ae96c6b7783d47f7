use std::env;
use std::process;

use int_list::demo::{self, Config};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // logs go to stderr, the walkthrough itself to stdout
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Problem parsing arguments: {err}");
        process::exit(2);
    });

    let stdout = std::io::stdout();
    if let Err(e) = demo::run(&config, &mut stdout.lock()) {
        eprintln!("Application error: {e}");
        process::exit(1);
    }
}
