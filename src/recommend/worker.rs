// Background lookup for the results stage

use super::client::{RecommendationSource, resolve};
use super::Recommendation;
use crate::quiz::CompleteAnswers;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;

/// A finished lookup, tagged with the quiz run that asked for it
#[derive(Debug, Clone)]
pub struct Lookup {
    pub generation: u64,
    pub recommendation: Recommendation,
}

/// Run the request on its own thread, hold the result for `reveal_delay`,
/// then hand it to `deliver`. There is no way to cancel a lookup once spawned.
pub fn spawn_lookup<S, F>(
    source: Arc<S>,
    answers: CompleteAnswers,
    reveal_delay: Duration,
    generation: u64,
    deliver: F,
) -> JoinHandle<()>
where
    S: RecommendationSource + Send + Sync + ?Sized + 'static,
    F: FnOnce(Lookup) + Send + 'static,
{
    thread::spawn(move || {
        let recommendation = resolve(source.as_ref(), &answers, &mut rand::thread_rng());

        debug!(generation, delay_ms = reveal_delay.as_millis() as u64, "holding result");
        thread::sleep(reveal_delay);

        deliver(Lookup {
            generation,
            recommendation,
        });
    })
}
