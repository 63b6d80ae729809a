//! MindMate interactive CLI.
//!
//! Reads one message per line from stdin and prints the rendered reply.
//!
//! # Commands
//!
//! - `:stats` - print your progress, metrics and system status as JSON
//! - `:image <path>`, `:audio <path>`, `:doc <path>` - send a media reference
//! - `:quit` - exit
//!
//! # Environment Variables
//!
//! - `MINDMATE__*` - configuration, see `mindmate::config`
//! - `RUST_LOG` - Tracing filter (default: `logging.log_level`)
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sarah_42
//! ```

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use mindmate::adapters::{
    CannedDomainHandler, InMemoryUserStateStore, KeywordIntentClassifier, KeywordMoodHandler,
};
use mindmate::application::{DomainHandlers, OrchestrationRouter};
use mindmate::config::{AppConfig, LoggingConfig};
use mindmate::domain::foundation::UserId;
use mindmate::domain::trend::TrendEngine;
use mindmate::domain::wellness::{InputPayload, MediaReference, WellnessDomain};
use mindmate::ports::DomainHandler;

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.log_level.clone().into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn parse_line(line: &str) -> InputPayload {
    let media = |rest: &str| MediaReference::new(rest.trim());
    if let Some(rest) = line.strip_prefix(":image ") {
        InputPayload::Image(media(rest))
    } else if let Some(rest) = line.strip_prefix(":audio ") {
        InputPayload::Audio(media(rest))
    } else if let Some(rest) = line.strip_prefix(":doc ") {
        InputPayload::Document(media(rest))
    } else {
        InputPayload::text(line)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging);

    let user_id = std::env::args().nth(1).unwrap_or_else(|| "friend".to_string());
    let user_id = UserId::new(user_id)?;

    let store = Arc::new(InMemoryUserStateStore::new(config.wellness.journey_limits()));
    let handlers = DomainHandlers::from_fn(|domain| -> Arc<dyn DomainHandler> {
        match domain {
            WellnessDomain::Mood => Arc::new(KeywordMoodHandler::new()),
            other => Arc::new(CannedDomainHandler::new(other)),
        }
    });
    let router = OrchestrationRouter::new(store, Arc::new(KeywordIntentClassifier::new()), handlers)
        .with_trend_engine(TrendEngine::new(config.wellness.trend_settings()))
        .with_settings(config.dispatch.router_settings());

    tracing::info!(user_id = %user_id, "mindmate ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            ":quit" => break,
            ":stats" => {
                if let Some(stats) = router.user_stats(&user_id).await {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                let status = router.system_status().await;
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            _ => match router.handle(user_id.as_str(), parse_line(line)).await {
                Ok(response) => println!("{}\n", response.render()),
                Err(err) => {
                    tracing::error!(error = %err, "request failed");
                    println!("Sorry, something went wrong on my side. Please try again.\n");
                }
            },
        }
    }

    Ok(())
}
