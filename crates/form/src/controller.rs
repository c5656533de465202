use crate::error::FormError;
use chrono::{DateTime, Utc};
use coffee_rec_api::{
    ApiResult, BrewMethod, Flavor, RecommendRequest, Recommendation, RecommendationSource,
};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Selection state and last outcome of the recommendation form.
///
/// A request runs in two halves so an event loop can await the network call
/// elsewhere: [`begin_request`](Self::begin_request) validates and marks the
/// form in flight, [`finish_request`](Self::finish_request) applies the
/// outcome. While in flight, further requests are refused.
#[derive(Debug, Clone, Default)]
pub struct RecommendationForm {
    selected: BTreeSet<Flavor>,
    brew_method: BrewMethod,
    recommendations: Vec<Recommendation>,
    error: Option<String>,
    in_flight: bool,
    last_updated: Option<DateTime<Utc>>,
}

impl RecommendationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `flavor` is selected afterwards.
    pub fn toggle_flavor(&mut self, flavor: Flavor) -> bool {
        if self.selected.remove(&flavor) {
            false
        } else {
            self.selected.insert(flavor);
            true
        }
    }

    pub fn is_selected(&self, flavor: Flavor) -> bool {
        self.selected.contains(&flavor)
    }

    pub fn selected_flavors(&self) -> impl Iterator<Item = Flavor> + '_ {
        self.selected.iter().copied()
    }

    pub fn clear_flavors(&mut self) {
        self.selected.clear();
    }

    pub fn set_brew_method(&mut self, method: BrewMethod) {
        self.brew_method = method;
    }

    pub fn cycle_brew_method(&mut self, forward: bool) -> BrewMethod {
        self.brew_method = self.brew_method.cycle(forward);
        self.brew_method
    }

    pub fn brew_method(&self) -> BrewMethod {
        self.brew_method
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn begin_request(&mut self) -> Result<RecommendRequest, FormError> {
        if self.in_flight {
            debug!("ignoring request while another is in flight");
            return Err(FormError::RequestInFlight);
        }

        if self.selected.is_empty() {
            let err = FormError::EmptySelection;
            self.error = Some(err.user_message().to_string());
            return Err(err);
        }

        self.error = None;
        self.in_flight = true;

        Ok(RecommendRequest {
            flavors: self.selected.iter().copied().collect(),
            brew_method: self.brew_method,
        })
    }

    pub fn finish_request(
        &mut self,
        outcome: ApiResult<Vec<Recommendation>>,
    ) -> Result<(), FormError> {
        self.in_flight = false;

        match outcome {
            Ok(recommendations) => {
                self.recommendations = recommendations;
                self.error = None;
                self.last_updated = Some(Utc::now());
                Ok(())
            }
            Err(e) => {
                warn!("Recommendation request failed: {}", e);
                self.error = Some(e.user_message().to_string());
                Err(FormError::Api(e))
            }
        }
    }

    /// Issues exactly one call to `source` unless validation fails first.
    pub async fn request_recommendations<S>(&mut self, source: &S) -> Result<(), FormError>
    where
        S: RecommendationSource,
    {
        let request = self.begin_request()?;
        let guard = InFlight { form: self };
        let outcome = source.recommend(&request).await;
        guard.form.finish_request(outcome)
    }
}

/// Clears the in-flight flag if the request future is dropped before the
/// outcome arrives.
struct InFlight<'a> {
    form: &'a mut RecommendationForm,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.form.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EMPTY_SELECTION_MESSAGE, IN_FLIGHT_MESSAGE};
    use coffee_rec_api::error::{CONNECTION_FAILED_MESSAGE, SERVER_ERROR_MESSAGE};
    use coffee_rec_api::{ApiError, RecommendApi};
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Clone)]
    enum Reply {
        Success(Vec<Recommendation>),
        Status(u16),
        Timeout,
        Hang,
    }

    struct StubSource {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RecommendationSource for StubSource {
        fn recommend(
            &self,
            _request: &RecommendRequest,
        ) -> impl Future<Output = ApiResult<Vec<Recommendation>>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self.reply.clone();
            async move {
                match reply {
                    Reply::Success(recs) => Ok(recs),
                    Reply::Status(status) => Err(ApiError::Server { status }),
                    Reply::Timeout => Err(ApiError::Timeout("stub".to_string())),
                    Reply::Hang => std::future::pending().await,
                }
            }
        }
    }

    fn latte() -> Vec<Recommendation> {
        vec![Recommendation {
            name: "Latte".to_string(),
            score: Some(0.9),
        }]
    }

    fn form_with_previous_results() -> RecommendationForm {
        let mut form = RecommendationForm::new();
        form.toggle_flavor(Flavor::Nutty);
        form.begin_request().expect("begin");
        form.finish_request(Ok(vec![Recommendation {
            name: "Cortado".to_string(),
            score: None,
        }]))
        .expect("seed results");
        form
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut form = RecommendationForm::new();
        form.toggle_flavor(Flavor::Berry);

        for flavor in Flavor::ALL {
            let before: Vec<Flavor> = form.selected_flavors().collect();
            form.toggle_flavor(flavor);
            form.toggle_flavor(flavor);
            let after: Vec<Flavor> = form.selected_flavors().collect();
            assert_eq!(before, after, "toggling {flavor} twice");
        }
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut form = RecommendationForm::new();
        assert!(form.toggle_flavor(Flavor::Floral));
        assert!(form.is_selected(Flavor::Floral));
        assert!(!form.toggle_flavor(Flavor::Floral));
        assert!(!form.is_selected(Flavor::Floral));
    }

    #[test]
    fn brew_method_defaults_to_espresso_and_last_write_wins() {
        let mut form = RecommendationForm::new();
        assert_eq!(form.brew_method(), BrewMethod::Espresso);
        form.set_brew_method(BrewMethod::Chemex);
        form.set_brew_method(BrewMethod::V60);
        assert_eq!(form.brew_method(), BrewMethod::V60);
        assert_eq!(form.brew_method().as_str(), "V60");
    }

    #[test]
    fn request_lists_flavors_in_canonical_order() {
        let mut form = RecommendationForm::new();
        form.toggle_flavor(Flavor::Spicy);
        form.toggle_flavor(Flavor::Acidity);
        form.toggle_flavor(Flavor::Honey);
        form.set_brew_method(BrewMethod::AeroPress);

        let request = form.begin_request().expect("begin");
        assert_eq!(
            request.flavors,
            vec![Flavor::Acidity, Flavor::Honey, Flavor::Spicy]
        );
        assert_eq!(request.brew_method, BrewMethod::AeroPress);
        assert!(form.is_in_flight());
    }

    #[tokio::test]
    async fn empty_selection_never_calls_the_source() {
        let source = StubSource::new(Reply::Success(latte()));
        let mut form = RecommendationForm::new();

        let result = form.request_recommendations(&source).await;

        assert!(matches!(result, Err(FormError::EmptySelection)));
        assert_eq!(source.calls(), 0);
        assert_eq!(form.error(), Some(EMPTY_SELECTION_MESSAGE));
        assert!(!form.is_in_flight());
    }

    #[tokio::test]
    async fn success_replaces_list_and_clears_error() {
        let source = StubSource::new(Reply::Success(latte()));
        let mut form = RecommendationForm::new();
        form.request_recommendations(&source).await.unwrap_err();
        assert!(form.error().is_some());

        form.toggle_flavor(Flavor::Chocolate);
        form.request_recommendations(&source).await.expect("success");

        assert_eq!(source.calls(), 1);
        assert_eq!(form.recommendations(), latte().as_slice());
        assert_eq!(form.error(), None);
        assert!(form.last_updated().is_some());
        assert!(!form.is_in_flight());
    }

    #[tokio::test]
    async fn server_error_keeps_previous_list() {
        let source = StubSource::new(Reply::Status(500));
        let mut form = form_with_previous_results();
        let before = form.recommendations().to_vec();

        let result = form.request_recommendations(&source).await;

        assert!(matches!(
            result,
            Err(FormError::Api(ApiError::Server { status: 500 }))
        ));
        assert_eq!(source.calls(), 1);
        assert_eq!(form.recommendations(), before.as_slice());
        assert_eq!(form.error(), Some(SERVER_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn timeout_reports_connection_problem() {
        let source = StubSource::new(Reply::Timeout);
        let mut form = form_with_previous_results();
        let before = form.recommendations().to_vec();

        form.request_recommendations(&source).await.unwrap_err();

        assert_eq!(form.recommendations(), before.as_slice());
        assert_eq!(form.error(), Some(CONNECTION_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn refused_connection_reports_connection_problem() {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = RecommendApi::new(
            &format!("http://{}/recommend", addr),
            Duration::from_secs(5),
        )
        .unwrap();
        let mut form = form_with_previous_results();
        let before = form.recommendations().to_vec();

        let result = form.request_recommendations(&api).await;

        assert!(matches!(result, Err(FormError::Api(ref e)) if e.is_transport()));
        assert_eq!(form.recommendations(), before.as_slice());
        assert_eq!(form.error(), Some(CONNECTION_FAILED_MESSAGE));
    }

    #[test]
    fn second_begin_while_in_flight_is_refused() {
        let mut form = RecommendationForm::new();
        form.toggle_flavor(Flavor::Citrus);
        form.begin_request().expect("first begin");

        let second = form.begin_request();

        assert!(matches!(second, Err(FormError::RequestInFlight)));
        assert_eq!(second.unwrap_err().user_message(), IN_FLIGHT_MESSAGE);
        assert_eq!(form.error(), None);
        assert!(form.is_in_flight());

        form.finish_request(Ok(latte())).expect("finish");
        assert!(!form.is_in_flight());
        assert!(form.begin_request().is_ok());
    }

    #[tokio::test]
    async fn abandoned_request_releases_the_form() {
        let source = StubSource::new(Reply::Hang);
        let mut form = form_with_previous_results();
        let before = form.recommendations().to_vec();

        let waited = tokio::time::timeout(
            Duration::from_millis(50),
            form.request_recommendations(&source),
        )
        .await;

        assert!(waited.is_err());
        assert_eq!(source.calls(), 1);
        assert!(!form.is_in_flight());
        assert_eq!(form.recommendations(), before.as_slice());
        assert!(form.begin_request().is_ok());
    }
}
