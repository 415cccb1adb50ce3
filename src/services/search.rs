use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use crate::core::{validate, Clock, OfferGenerator};
use crate::models::{FieldErrors, FlightOffer, SearchRequest};
use crate::services::store::SearchStore;

/// Errors that can end a search cycle
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Flight generation failed: {0}")]
    Generation(String),
}

/// Runs search cycles: validate, generate, then settle the store
///
/// Rejected requests never reach the generator and leave the store as it was.
#[derive(Clone)]
pub struct SearchService {
    generator: OfferGenerator,
    store: Arc<SearchStore>,
    clock: Arc<dyn Clock>,
}

impl SearchService {
    pub fn new(generator: OfferGenerator, store: Arc<SearchStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            generator,
            store,
            clock,
        }
    }

    pub fn store(&self) -> &SearchStore {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Field errors for `request` as of today, without running a search
    pub fn check(&self, request: &SearchRequest) -> FieldErrors {
        validate(request, self.today())
    }

    pub async fn search(&self, request: SearchRequest) -> Result<Vec<FlightOffer>, SearchError> {
        let search = request
            .validated(self.today())
            .map_err(SearchError::Validation)?;

        let ticket = self.store.begin().await;
        let generator = self.generator.clone();

        match tokio::task::spawn_blocking(move || generator.generate(&search)).await {
            Ok(offers) => {
                self.store.succeed(ticket, offers.clone()).await;
                Ok(offers)
            }
            Err(e) => {
                tracing::error!("Flight generation task failed: {}", e);
                self.store.fail(ticket).await;
                Err(SearchError::Generation(e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("generator", &self.generator)
            .field("today", &self.today())
            .finish()
    }
}
