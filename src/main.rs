use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod config;

/// Magpie: forward one application's Android notifications to a webhook.
///
/// Follows a feed of notification events bridged off the device and keeps
/// the ones posted by the watched package. Each kept event is delivered as
/// a JSON envelope to the configured server. One POST per notification,
/// fire-and-forget.
#[derive(Parser)]
#[command(name = "magpie", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow the notification feed and forward qualifying events
    Run {
        /// Read the JSON-lines feed from a file instead of stdin
        #[arg(long)]
        feed: Option<PathBuf>,
    },

    /// Push one synthetic notification through the pipeline
    Send {
        /// Notification title
        #[arg(long, default_value = "Test notification")]
        title: String,

        /// Short notification text
        #[arg(long, default_value = "Sent by magpie send")]
        text: String,

        /// Expanded notification text
        #[arg(long, default_value = "")]
        big_text: String,

        /// Notification id
        #[arg(long, default_value = "1")]
        id: i32,
    },

    /// Show whether the listener holds notification access
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("magpie=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { feed } => {
            let config = config::Config::load()?;
            config.require_server()?;

            let sink = Arc::new(magpie::webhook::http::HttpWebhookSink::new(
                &config.server_url,
                config.http_timeout,
            )?);
            let forwarder = magpie::forwarder::Forwarder::new(
                &config.source_package,
                &config.device_id,
                sink,
            );

            info!(
                server = %config.server_url,
                device_id = %config.device_id,
                package = %config.source_package,
                "Forwarder started, following the notification feed"
            );

            let feed_reader: Box<dyn tokio::io::AsyncBufRead + Unpin> = match feed {
                Some(path) => {
                    let file = tokio::fs::File::open(&path)
                        .await
                        .with_context(|| format!("Failed to open feed file: {}", path.display()))?;
                    Box::new(tokio::io::BufReader::new(file))
                }
                None => Box::new(tokio::io::BufReader::new(tokio::io::stdin())),
            };

            let summary =
                magpie::feed::reader::run(feed_reader, &forwarder, config.http_timeout).await?;

            println!("\n{}", "Feed complete.".bold());
            println!("  Entries seen: {}", summary.entries);
            println!("  Forwarded:    {}", summary.forwarded);
            println!("  Ignored:      {}", summary.ignored);
            println!("  Removed:      {}", summary.removed);
            if summary.malformed > 0 {
                println!(
                    "  Malformed:    {}",
                    summary.malformed.to_string().yellow()
                );
            }
        }

        Commands::Send {
            title,
            text,
            big_text,
            id,
        } => {
            use magpie::webhook::traits::DeliveryOutcome;

            let config = config::Config::load()?;
            config.require_server()?;

            let sink = Arc::new(magpie::webhook::http::HttpWebhookSink::new(
                &config.server_url,
                config.http_timeout,
            )?);
            let forwarder = magpie::forwarder::Forwarder::new(
                &config.source_package,
                &config.device_id,
                sink.clone(),
            );

            // Synthesize an event from the watched package so it passes the
            // filter and exercises the full pipeline, wire contract included.
            let event = magpie::feed::event::NotificationEvent {
                source_id: config.source_package.clone(),
                posted_at_millis: chrono::Utc::now().timestamp_millis(),
                id,
                extras: Some(magpie::feed::event::NotificationExtras {
                    title: Some(title),
                    text: Some(text),
                    big_text: Some(big_text),
                }),
            };

            println!("Sending test notification to {}...", sink.endpoint());

            match forwarder.on_posted(&event) {
                Some(handle) => match handle.await? {
                    DeliveryOutcome::Delivered(status) => {
                        println!("{} server answered {status}", "Delivered:".green().bold());
                    }
                    DeliveryOutcome::Rejected(status) => {
                        println!("{} server answered {status}", "Rejected:".red().bold());
                    }
                    DeliveryOutcome::Failed => {
                        println!(
                            "{} request did not complete (see log for details)",
                            "Failed:".red().bold()
                        );
                    }
                },
                None => anyhow::bail!("Synthetic notification was filtered out unexpectedly"),
            }
        }

        Commands::Status => {
            let config = config::Config::load()?;
            config.require_identity()?;

            let probe = magpie::gate::SettingsProbe::new(
                config.enabled_listeners.clone(),
                &config.own_package,
            );
            magpie::status::show(
                &probe,
                &config.own_package,
                &config.source_package,
                &config.server_url,
                &config.device_id,
            );
        }
    }

    Ok(())
}
