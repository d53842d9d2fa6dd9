// src/services/itinerary.rs
// Submits a compiled itinerary prompt, one request per owner at a time

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info};

use super::error::{GenerationError, GenerationResult};
use crate::llm::{LlmProvider, Message};
use crate::prompt::internal::ITINERARY_SYSTEM_PROMPT;

const EMPTY_ITINERARY: &str = "No itinerary was generated. Please try again.";

pub struct ItineraryService {
    provider: Arc<dyn LlmProvider>,
    in_flight: Mutex<HashSet<String>>,
}

/// Releases the owner's slot when dropped, including on early return
struct InFlightGuard<'a> {
    owners: &'a Mutex<HashSet<String>>,
    owner: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.owners.lock().remove(&self.owner);
    }
}

impl ItineraryService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    fn acquire(&self, owner: &str) -> GenerationResult<InFlightGuard<'_>> {
        if !self.in_flight.lock().insert(owner.to_string()) {
            return Err(GenerationError::InFlight);
        }
        Ok(InFlightGuard {
            owners: &self.in_flight,
            owner: owner.to_string(),
        })
    }

    /// Send the prompt and return the itinerary text. `owner` identifies the
    /// session (account id on the server); each owner may have one request
    /// pending. The caller keeps its wizard state, so a failed submission can
    /// simply be retried.
    pub async fn submit(&self, owner: &str, prompt: &str) -> GenerationResult<String> {
        let _guard = self.acquire(owner)?;
        debug!("Submitting itinerary prompt ({} chars)", prompt.len());

        let response = self
            .provider
            .chat(
                vec![Message::user(prompt)],
                ITINERARY_SYSTEM_PROMPT.to_string(),
            )
            .await
            .map_err(|e| {
                error!("{} itinerary request failed: {:#}", self.provider.name(), e);
                GenerationError::provider(e)
            })?;

        let itinerary = response.content.trim();
        if itinerary.is_empty() {
            return Err(GenerationError::Empty(EMPTY_ITINERARY));
        }

        info!(
            "Itinerary generated by {} in {}ms",
            response.model, response.latency_ms
        );
        Ok(itinerary.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{Response, TokenUsage};
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    struct Canned(Result<String, String>);

    #[async_trait]
    impl LlmProvider for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn chat(&self, messages: Vec<Message>, system: String) -> Result<Response> {
            assert_eq!(messages.len(), 1);
            assert_eq!(system, ITINERARY_SYSTEM_PROMPT);
            match &self.0 {
                Ok(text) => Ok(Response {
                    content: text.clone(),
                    model: "canned".to_string(),
                    tokens: TokenUsage::default(),
                    latency_ms: 1,
                }),
                Err(msg) => Err(anyhow!(msg.clone())),
            }
        }
    }

    fn in_flight(service: &ItineraryService, owner: &str) -> bool {
        service.in_flight.lock().contains(owner)
    }

    /// Holds each request until a permit is released
    struct Gate(Arc<Semaphore>);

    #[async_trait]
    impl LlmProvider for Gate {
        fn name(&self) -> &'static str {
            "gate"
        }

        async fn chat(&self, _messages: Vec<Message>, _system: String) -> Result<Response> {
            self.0.acquire().await?.forget();
            Ok(Response {
                content: "done".to_string(),
                model: "gate".to_string(),
                tokens: TokenUsage::default(),
                latency_ms: 0,
            })
        }
    }

    #[tokio::test]
    async fn returns_trimmed_itinerary() {
        let service = ItineraryService::new(Arc::new(Canned(Ok("  Day 1  \n".to_string()))));
        assert_eq!(service.submit("ana", "prompt").await.unwrap(), "Day 1");
        assert!(!in_flight(&service, "ana"));
    }

    #[tokio::test]
    async fn provider_failure_is_generic_and_releases_guard() {
        let service = ItineraryService::new(Arc::new(Canned(Err("HTTP 500".to_string()))));
        let err = service.submit("ana", "prompt").await.unwrap_err();

        assert_eq!(err.to_string(), "Something went wrong. Please try again.");
        assert!(matches!(err, GenerationError::Provider { ref detail } if detail.contains("500")));
        assert!(!in_flight(&service, "ana"));
    }

    #[tokio::test]
    async fn empty_response_is_an_error() {
        let service = ItineraryService::new(Arc::new(Canned(Ok("   ".to_string()))));
        assert!(matches!(
            service.submit("ana", "prompt").await,
            Err(GenerationError::Empty(_))
        ));
    }

    #[tokio::test]
    async fn one_pending_request_per_owner() {
        let gate = Arc::new(Semaphore::new(0));
        let service = Arc::new(ItineraryService::new(Arc::new(Gate(gate.clone()))));

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.submit("ana", "one").await })
        };
        while !in_flight(&service, "ana") {
            tokio::task::yield_now().await;
        }

        // Same owner is turned away, a different owner is not
        assert!(matches!(
            service.submit("ana", "two").await,
            Err(GenerationError::InFlight)
        ));
        let other = {
            let service = service.clone();
            tokio::spawn(async move { service.submit("bob", "three").await })
        };
        while !in_flight(&service, "bob") {
            tokio::task::yield_now().await;
        }

        gate.add_permits(2);
        assert_eq!(first.await.unwrap().unwrap(), "done");
        assert_eq!(other.await.unwrap().unwrap(), "done");
        assert!(!in_flight(&service, "ana"));
        assert!(!in_flight(&service, "bob"));
    }
}
