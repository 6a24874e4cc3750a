//! HTTP client for the recommendation service.

use super::fallback::pick_fallback;
use super::{HealthResponse, Recommendation, RecommendationResponse};
use crate::quiz::CompleteAnswers;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const RECOMMEND_PATH: &str = "/api/recommend";
pub const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service returned HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Anything that can turn answers into a recommendation
pub trait RecommendationSource {
    fn recommend(&self, answers: &CompleteAnswers)
    -> Result<RecommendationResponse, RecommendError>;
}

/// Configuration for the recommendation client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host and optional prefix; endpoint paths are appended
    pub base_url: String,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Blocking client for `POST /api/recommend` and `GET /api/health`.
#[derive(Debug, Clone)]
pub struct RecommendClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl RecommendClient {
    pub fn new(config: ClientConfig) -> Result<Self, RecommendError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("eatnow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RecommendError::Client(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    pub fn health(&self) -> Result<HealthResponse, RecommendError> {
        let url = self.endpoint(HEALTH_PATH);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| RecommendError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RecommendError::Status(response.status().as_u16()));
        }

        response
            .json()
            .map_err(|e| RecommendError::Decode(e.to_string()))
    }
}

impl RecommendationSource for RecommendClient {
    fn recommend(
        &self,
        answers: &CompleteAnswers,
    ) -> Result<RecommendationResponse, RecommendError> {
        let url = self.endpoint(RECOMMEND_PATH);
        info!(%url, "requesting recommendation");

        // .json() sets Content-Type: application/json
        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .json(answers)
            .send()
            .map_err(|e| RecommendError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RecommendError::Status(response.status().as_u16()));
        }

        response
            .json()
            .map_err(|e| RecommendError::Decode(e.to_string()))
    }
}

/// Append an endpoint path to a base URL, tolerating trailing slashes
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Ask the source once; any failure becomes a random fallback dish.
pub fn resolve<S, R>(source: &S, answers: &CompleteAnswers, rng: &mut R) -> Recommendation
where
    S: RecommendationSource + ?Sized,
    R: Rng + ?Sized,
{
    match source.recommend(answers) {
        Ok(response) => {
            info!(
                food = %response.best_match.name,
                score = response.score,
                "recommendation received"
            );
            Recommendation::from(response)
        }
        Err(e) => {
            warn!(error = %e, "recommendation service unavailable, using fallback");
            Recommendation::fallback(pick_fallback(rng), e.to_string())
        }
    }
}
