use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Movie catalog artifact (JSON, optionally `.gz`)
    #[serde(default = "default_movies_path")]
    pub movies_path: PathBuf,

    /// Similarity matrix artifact (JSON, optionally `.gz`)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: PathBuf,

    /// Origins allowed by CORS, comma-separated in the environment
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Recommendations returned when the request does not ask for a count
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Search results returned when the request does not set a limit
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Browsing sample size when the request does not set a limit
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("movies.json")
}

fn default_similarity_path() -> PathBuf {
    PathBuf::from("similarity.json")
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

fn default_recommendation_count() -> usize {
    crate::services::recommendations::DEFAULT_RECOMMENDATIONS
}

fn default_search_limit() -> usize {
    crate::services::title_search::DEFAULT_SEARCH_LIMIT
}

fn default_page_size() -> i64 {
    crate::services::pagination::DEFAULT_PAGE_SIZE
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            movies_path: default_movies_path(),
            similarity_path: default_similarity_path(),
            cors_origins: default_cors_origins(),
            recommendation_count: default_recommendation_count(),
            search_limit: default_search_limit(),
            page_size: default_page_size(),
        }
    }
}
