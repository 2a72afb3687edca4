use expense_tracker::cli::run_cli;

fn main() {
    // Tracing is installed by `run_cli` once the configured log filter is known.
    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
