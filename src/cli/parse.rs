use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "block-meter",
    about = "Single-line terminal progress meter with sub-character fill resolution"
)]
pub struct Cli {
    /// Number of demo iterations
    #[arg(value_name = "COUNT", default_value_t = 1000)]
    pub iterations: u64,

    /// Meter description label
    #[arg(value_name = "DESC", default_value = "block-meter")]
    pub description: String,

    /// Fill charset, `utf` or `ascii`
    #[arg(value_name = "CHARSET", default_value = "utf")]
    pub charset: String,

    /// Rate smoothing factor in [0, 1]
    #[arg(value_name = "SMOOTHING", default_value_t = 0.3)]
    pub smoothing: f64,

    /// Color name (red, green, …) or `#RRGGBB`
    #[arg(value_name = "COLOR", default_value = "green")]
    pub color: String,

    /// Emit timing diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
