use anyhow::Result;
use clap::Parser;
use cropwatch::indices::{is_infestation_likely, INFESTATION_THRESHOLD};
use cropwatch::sample::TIMESTAMP_FORMAT;
use cropwatch::series::to_series;
use cropwatch::{cli, config, report};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = config::Config::from_env(args.source_url.clone())?;
    if let Some(window_size) = args.window_size.filter(|v| *v != 0) {
        config.window_size = window_size;
    }
    if let Some(raw) = args.filter_threshold.as_deref() {
        config.filter_threshold_c = config::parse_filter_threshold(Some(raw));
    }

    let refresh = report::run_refresh(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&refresh)?);
        return Ok(());
    }
    render_text(&refresh);
    Ok(())
}

fn render_text(refresh: &report::Refresh) {
    match refresh {
        report::Refresh::NoData => println!("No data available"),
        report::Refresh::Ready(snapshot) => {
            let latest = &snapshot.latest;
            println!(
                "Latest reading ({})",
                latest.timestamp.format(TIMESTAMP_FORMAT)
            );
            println!("  Temperature: {:.1} C", latest.temperature);
            println!("  Humidity:    {:.1} %", latest.humidity);
            println!("  Pressure:    {:.1} hPa", latest.pressure);
            println!();
            println!("Recent window ({} samples)", snapshot.window.len());
            for point in to_series(&snapshot.window) {
                println!(
                    "  {}  {:>6.1} C  {:>6.1} %  {:>7.1} hPa",
                    point.time, point.temperature, point.humidity, point.pressure
                );
            }
            println!();
            match &snapshot.indices {
                Some(indices) => {
                    println!("Phthorimaea operculella daily larval development");
                    println!("  Y (development rate): {:.2}", indices.development_rate);
                    println!("  K (thermal constant): {:.2}", indices.thermal_constant);
                    println!("  t min:                {:.2} C", indices.min_threshold);
                    println!(
                        "IPPO = {:.2} (infestations occur when IPPO > {INFESTATION_THRESHOLD})",
                        indices.infestation_index
                    );
                    if is_infestation_likely(indices.infestation_index) {
                        println!("  Elevated infestation probability");
                    }
                }
                None => println!("Indices unavailable for this refresh"),
            }
        }
    }
}
