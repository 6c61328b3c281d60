//! Print the most recent messages of the organization.
//!
//! ```sh
//! SQWIGGLE_API_KEY=cli_... RUST_LOG=sqwiggle=debug cargo run --example list_messages
//! ```

use sqwiggle::SqwiggleClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sqwiggle=info,warn")),
                ),
        )
        .init();

    let client = SqwiggleClient::from_env()?;

    let (page, limit) = (0, 50);
    for message in client.messages().list(page, limit).await? {
        println!("{}: {}", message.author.name, message.text);
    }

    Ok(())
}
