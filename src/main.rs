use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sunset_lib::{ScoresClient, config, render_month};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = config::load()?;
    tracing::info!("Showing sunsets for {}/{}", config.month, config.year);

    let client = ScoresClient::new(&config)?;

    let scores = if config.offline {
        None
    } else {
        client
            .fetch_scores()
            .await
            .inspect_err(|e| {
                tracing::error!("Error fetching sunset scores: {:?}", e);
            })
            .ok()
    };

    print!("{}", render_month(config.month, config.year, scores.as_ref())?);

    match scores
        .as_ref()
        .and_then(|scores| scores.best_day(config.month, config.year))
    {
        Some((date, day)) => {
            println!();
            println!(
                "Best sunset: {} (score {:.2}, {} min from sunset at {})",
                date, day.max_score, day.min_to_sunset, day.best_image_time
            );
            println!("{}", client.image_url(date));
        }
        None => tracing::info!("No scored sunsets this month"),
    }

    Ok(())
}
