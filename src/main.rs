mod cli;

use cli::commands::Command;
use cli::FourInARow;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    four_in_a_row::instrumentation::init_tracing();

    FourInARow::from_args().execute();

    #[cfg(feature = "instrumentation")]
    four_in_a_row::instrumentation::print_timing_statistics();
}
