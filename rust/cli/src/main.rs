use connect4_cli::{config, logging, run};
use std::io;

fn main() {
    // A broken config is reported by the command itself; logging falls back
    // to the default filter meanwhile.
    let filter = config::load()
        .map(|c| c.log_filter)
        .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.to_string());
    logging::init_logging(&filter);

    let code = run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
