// Recommendation service: wire types, client, fallback and background lookup

pub mod client;
pub mod fallback;
pub mod links;
pub mod types;
pub mod worker;

pub use client::{
    ClientConfig, RecommendClient, RecommendError, RecommendationSource, join_url, resolve,
};
pub use fallback::{fallback_foods, pick_fallback};
pub use links::{OrderLinks, order_links};
pub use types::*;
pub use worker::{Lookup, spawn_lookup};
