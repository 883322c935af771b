use std::{env, io, process};

use heapsort::config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let config = Config::load(&args).unwrap_or_else(|err| {
        eprintln!("Application error: {:#}", err);
        process::exit(1);
    });

    if let Err(e) = heapsort::run(config, &mut io::stdout().lock()) {
        eprintln!("Application error: {:#}", e);
        process::exit(1);
    }
}
