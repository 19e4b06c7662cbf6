//! Prediction session - form, result and loading state with change notification

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::client::PredictionClient;
use crate::domain::prediction::{PredictionResult, PresentedResult, ResultPresenter};
use crate::domain::sample::SampleGenerator;
use crate::domain::student::{FieldName, FormError, FormState, StudentDraft, StudentRecord};
use crate::infrastructure::http_client::HttpClientTrait;

/// Point-in-time copy of the session state handed to observers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub draft: StudentDraft,
    pub result: Option<PredictionResult>,
    pub loading: bool,
}

/// Receives the session state after every change
#[cfg_attr(test, automock)]
pub trait SessionObserver: Send + Sync {
    fn on_change(&self, snapshot: &SessionSnapshot);
}

/// Observer that traces every state change at debug level
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_change(&self, snapshot: &SessionSnapshot) {
        debug!(
            loading = snapshot.loading,
            has_result = snapshot.result.is_some(),
            complete = snapshot.draft.missing_fields().is_empty(),
            "Session state changed"
        );
    }
}

/// Owns the form, the latest result and the loading flag.
///
/// Mutating calls take `&mut self`, so one session never has two submissions
/// in flight.
pub struct PredictionSession<C: HttpClientTrait> {
    client: PredictionClient<C>,
    presenter: ResultPresenter,
    form: FormState,
    result: Option<PredictionResult>,
    loading: bool,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl<C: HttpClientTrait> PredictionSession<C> {
    pub fn new(client: PredictionClient<C>) -> Self {
        Self {
            client,
            presenter: ResultPresenter::new(),
            form: FormState::new(),
            result: None,
            loading: false,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn draft(&self) -> &StudentDraft {
        self.form.snapshot()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            draft: self.form.snapshot().clone(),
            result: self.result.clone(),
            loading: self.loading,
        }
    }

    /// Edit one field; the state is unchanged when coercion fails
    pub fn update_field(&mut self, field: FieldName, raw: &str) -> Result<(), FormError> {
        self.form.update(field, raw)?;
        self.notify();
        Ok(())
    }

    /// Replace the whole form with `record`
    pub fn reset(&mut self, record: StudentRecord) {
        self.form.reset(record);
        self.notify();
    }

    /// Replace the whole form with a freshly generated sample
    pub fn generate_sample<R: Rng>(&mut self, generator: &mut SampleGenerator<R>) -> &StudentDraft {
        self.form.reset(generator.generate());
        self.notify();
        self.form.snapshot()
    }

    /// Submit the current form.
    ///
    /// Fails only when a required field is unset, before entering the loading
    /// state. Range violations are logged and the record is sent as-is.
    pub async fn submit(&mut self) -> Result<PredictionResult, FormError> {
        let record = self.form.complete()?;

        if let Err(violations) = record.validate() {
            for violation in &violations {
                warn!(%violation, "Submitting out-of-range value");
            }
        }

        self.loading = true;
        self.result = None;
        self.notify();

        info!(base_url = %self.client.base_url(), "Submitting student record");
        let result = self.client.submit(&record).await;

        self.result = Some(result.clone());
        self.loading = false;
        self.notify();

        Ok(result)
    }

    /// Display view of the latest result, if any
    pub fn present(&self) -> Option<PresentedResult> {
        self.result.as_ref().map(|r| self.presenter.present(r))
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.on_change(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::TRANSPORT_FAILURE_MESSAGE;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use crate::infrastructure::prediction::client::DEFAULT_API_URL;
    use mockall::Sequence;

    const PREDICT_URL: &str = "http://localhost:5000/predict";

    fn pass_response() -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "prediction": "Pass",
            "confidence": 0.87,
            "probabilities": {"Pass": 0.87, "Fail": 0.05, "Distinction": 0.05, "Withdrawn": 0.03}
        })
    }

    fn session_with(client: MockHttpClient) -> PredictionSession<MockHttpClient> {
        PredictionSession::new(PredictionClient::new(client, DEFAULT_API_URL))
    }

    #[tokio::test]
    async fn test_submit_enters_and_exits_loading_once() {
        let mut session =
            session_with(MockHttpClient::new().with_response(PREDICT_URL, pass_response()));
        session.reset(StudentRecord::example());

        let mut seq = Sequence::new();
        let mut observer = MockSessionObserver::new();
        observer
            .expect_on_change()
            .withf(|s| s.loading && s.result.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        observer
            .expect_on_change()
            .withf(|s| !s.loading && s.result.as_ref().is_some_and(|r| r.success))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        session.subscribe(Arc::new(observer));

        let result = session.submit().await.unwrap();

        assert!(result.success);
        assert!(!session.is_loading());
        assert_eq!(session.result(), Some(&result));
    }

    #[tokio::test]
    async fn test_submit_clears_previous_result() {
        let mut session = session_with(MockHttpClient::new().with_error(PREDICT_URL, "refused"));
        session.reset(StudentRecord::example());
        session.submit().await.unwrap();
        assert!(session.result().is_some());

        let mut seq = Sequence::new();
        let mut observer = MockSessionObserver::new();
        observer
            .expect_on_change()
            .withf(|s| s.loading && s.result.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        observer
            .expect_on_change()
            .withf(|s| !s.loading && s.result.is_some())
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        session.subscribe(Arc::new(observer));

        let result = session.submit().await.unwrap();

        assert!(!result.success);
        assert_eq!(result.error_message(), Some(TRANSPORT_FAILURE_MESSAGE));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_submit_requires_all_fields() {
        let client = MockHttpClient::new().with_response(PREDICT_URL, pass_response());
        let mut session = session_with(client);

        let mut observer = MockSessionObserver::new();
        observer.expect_on_change().times(0);
        session.subscribe(Arc::new(observer));

        let err = session.submit().await.unwrap_err();

        assert!(matches!(err, FormError::MissingFields(ref fields) if fields.len() == 5));
        assert!(!session.is_loading());
        assert!(session.result().is_none());
        assert!(session.client.http().requests().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_values_are_still_sent() {
        let client = MockHttpClient::new().with_response(PREDICT_URL, pass_response());
        let mut session = session_with(client);
        session.reset(StudentRecord::example());
        session.update_field(FieldName::NumOfPrevAttempts, "25").unwrap();

        let result = session.submit().await.unwrap();

        assert!(result.success);
        let requests = session.client.http().requests();
        assert_eq!(requests[0].body.as_ref().unwrap()["num_of_prev_attempts"], 25);
    }

    #[test]
    fn test_generate_sample_replaces_form_and_notifies() {
        let mut session = session_with(MockHttpClient::new());

        let mut observer = MockSessionObserver::new();
        observer
            .expect_on_change()
            .withf(|s| s.draft.missing_fields().is_empty() && !s.loading)
            .times(1)
            .return_const(());
        session.subscribe(Arc::new(observer));

        let mut generator = SampleGenerator::seeded(5);
        let draft = session.generate_sample(&mut generator).clone();

        assert!(draft.missing_fields().is_empty());
        assert_eq!(&draft, session.draft());
    }

    #[test]
    fn test_update_field_error_does_not_notify() {
        let mut session = session_with(MockHttpClient::new());

        let mut observer = MockSessionObserver::new();
        observer.expect_on_change().times(1).return_const(());
        session.subscribe(Arc::new(observer));

        session.update_field(FieldName::Gender, "F").unwrap();
        assert!(session.update_field(FieldName::AvgScore, "abc").is_err());
    }

    #[tokio::test]
    async fn test_present_after_submit() {
        let mut session =
            session_with(MockHttpClient::new().with_response(PREDICT_URL, pass_response()));
        assert!(session.present().is_none());

        session.reset(StudentRecord::example());
        session.submit().await.unwrap();

        match session.present() {
            Some(PresentedResult::Prediction { label, confidence, bars, .. }) => {
                assert_eq!(label, "Pass");
                assert_eq!(confidence, "87.0%");
                assert_eq!(bars.len(), 4);
            }
            other => panic!("unexpected presentation: {:?}", other),
        }
    }
}
