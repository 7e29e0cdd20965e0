#![forbid(unsafe_code)]

//! vlist demo binary entry point.

use tracing_subscriber::EnvFilter;
use vlist_demo::cli;

fn init_logging(json: bool) {
    if json && vlist_core::logging::init_json_logging() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let opts = cli::Opts::parse();
    init_logging(opts.log_json);

    match vlist_demo::run(&opts) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("vlist-demo: {e}");
            std::process::exit(1);
        }
    }
}
