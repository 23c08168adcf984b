use block_meter::cli;

fn main() {
    cli::run();
}
