use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Model file to probe (overrides the configured path)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Probe configuration file
    #[arg(long, default_value = "probe.json")]
    pub config: String,

    /// Print tensor metadata only, skip the input trials
    #[arg(long, default_value_t = false)]
    pub describe_only: bool,
}
