use super::*;
use coffee_rec_api::{ApiResult, Recommendation};
use std::time::Instant;

impl App {
    pub(super) fn submit_request(&mut self) {
        let request = match self.form.begin_request() {
            Ok(request) => request,
            Err(FormError::RequestInFlight) => return,
            Err(e) => {
                tracing::debug!("Request not sent: {}", e);
                return;
            }
        };

        let Some(api) = self.api.clone() else {
            let _ = self.form.finish_request(Err(ApiError::Endpoint(
                self.config.service.endpoint.clone(),
            )));
            return;
        };

        let spawned = self.spawn_app_task(async move {
            AppAsyncEvent::RecommendationsLoaded {
                outcome: recommend_or_interrupted(async move { api.recommend(&request).await })
                    .await,
            }
        });
        if spawned {
            self.loading_start_time = Some(Instant::now());
        } else {
            let _ = self.form.finish_request(Err(ApiError::Interrupted(
                "event channel closed".to_string(),
            )));
        }
    }

    /// Applies finished background work; returns how many events were handled.
    pub fn process_async_events(&mut self) -> usize {
        let mut async_events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                async_events.push(event);
            }
        }

        let count = async_events.len();
        for event in async_events {
            match event {
                AppAsyncEvent::RecommendationsLoaded { outcome } => {
                    self.loading_start_time = None;
                    if self.form.finish_request(outcome).is_ok() {
                        tracing::info!(
                            count = self.form.recommendations().len(),
                            "recommendations updated"
                        );
                    }
                }
            }
        }
        count
    }
}

/// Runs `work` on its own task so a panic still yields an outcome.
pub(super) async fn recommend_or_interrupted<F>(work: F) -> ApiResult<Vec<Recommendation>>
where
    F: Future<Output = ApiResult<Vec<Recommendation>>> + Send + 'static,
{
    match tokio::spawn(work).await {
        Ok(outcome) => outcome,
        Err(e) => Err(ApiError::Interrupted(e.to_string())),
    }
}
