use clap::Parser;
use remote_sweep::cli::{self, normalize_args, Cli};
use remote_sweep::utils::init_logging;

fn main() {
    init_logging();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    std::process::exit(cli::run(cli));
}
