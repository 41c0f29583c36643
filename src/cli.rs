use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cropwatch",
    version,
    about = "Crop-pest early-warning telemetry monitor"
)]
pub struct Args {
    /// Telemetry endpoint serving the JSON record list.
    #[arg(long)]
    pub source_url: Option<String>,
    /// Number of recent samples to window for display.
    #[arg(long)]
    pub window_size: Option<usize>,
    /// Temperature filter threshold in C; pass "off" to window over all records.
    #[arg(long)]
    pub filter_threshold: Option<String>,
    /// Emit the refresh result as JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
