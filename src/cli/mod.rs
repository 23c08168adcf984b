mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

pub fn run() {
    let cli = parse::Cli::parse();
    handlers::demo(&cli);
}
