use serde::{Deserialize, Serialize};

/// Shown above the result when the service could not be reached
pub const FALLBACK_NOTICE: &str = "Couldn't reach the kitchen! Using backup recipe...";

/// Matched tags rendered under the score
pub const MAX_SHOWN_TAGS: usize = 4;

/// A dish as returned by the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub emoji: String,
    pub cuisine: String,
    #[serde(default)]
    pub description: Option<String>,
    pub avg_price: u32,
    #[serde(default)]
    pub is_vegetarian: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub food: FoodItem,
    pub score: f64,
    #[serde(default)]
    pub matched_tags: Vec<String>,
}

/// Body of a successful `POST /api/recommend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub best_match: FoodItem,
    pub score: f64,
    #[serde(default)]
    pub matched_tags: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub total_matches: u32,
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub database: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Source {
    Service,
    Fallback { reason: String },
}

/// What the results stage displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub food: FoodItem,
    pub score: f64,
    pub matched_tags: Vec<String>,
    pub alternatives: Vec<Alternative>,
    pub source: Source,
}

impl Recommendation {
    pub fn fallback(food: FoodItem, reason: impl Into<String>) -> Self {
        Self {
            food,
            score: 0.0,
            matched_tags: Vec::new(),
            alternatives: Vec::new(),
            source: Source::Fallback {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, Source::Fallback { .. })
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.is_fallback().then_some(FALLBACK_NOTICE)
    }

    /// "82% match", hidden when the score is zero
    pub fn score_label(&self) -> Option<String> {
        (self.score > 0.0).then(|| format!("{:.0}% match", self.score.round()))
    }

    pub fn shown_tags(&self) -> &[String] {
        let n = self.matched_tags.len().min(MAX_SHOWN_TAGS);
        &self.matched_tags[..n]
    }
}

impl From<RecommendationResponse> for Recommendation {
    fn from(response: RecommendationResponse) -> Self {
        Self {
            food: response.best_match,
            score: response.score,
            matched_tags: response.matched_tags,
            alternatives: response.alternatives,
            source: Source::Service,
        }
    }
}
