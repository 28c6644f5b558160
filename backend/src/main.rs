//! Backend entry-point: wires the comment feed endpoint and health probes.

use std::sync::Arc;

use actix_web::web;
use dotenv::dotenv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::{AppSettings, RedditCredentials};
use backend::domain::CommentFeed;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::reddit::RedditHttpSource;
use backend::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let credentials =
        RedditCredentials::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let source = RedditHttpSource::new(credentials, settings.upstream_timeout())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let feed = Arc::new(CommentFeed::new(Arc::new(source)));
    let http_state = web::Data::new(HttpState::new(feed, settings.default_subreddit()));
    let health_state = web::Data::new(HealthState::new());

    let config = ServerConfig::new(bind_addr).with_allowed_origin(settings.allowed_origin.clone());
    info!(addr = %config.bind_addr(), "starting policy comment feed server");

    create_server(health_state, http_state, config)?.await
}
