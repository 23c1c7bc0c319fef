use std::env;

use anyhow::{Context, Result};

pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    /// Override for the Gemini host, mainly for pointing at a proxy.
    pub gemini_api_url: Option<String>,
}

pub fn from_env() -> Result<Config> {
    let gemini_api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;

    let port = match env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
        Err(_) => 8080,
    };

    Ok(Config {
        port,
        gemini_api_key,
        gemini_api_url: env::var("GEMINI_API_URL").ok(),
    })
}
