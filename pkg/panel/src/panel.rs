use std::fmt;

use pkg_types::{Draft, NewSecretRequest, SecretRequest, SecretType};
use tracing::{debug, error};

use crate::api::SecretRequestApi;

/// Which call failed. Carried as the `kind` field of the diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFailure {
    Fetch,
    Submit,
}

impl fmt::Display for PanelFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelFailure::Fetch => f.write_str("fetch"),
            PanelFailure::Submit => f.write_str("submit"),
        }
    }
}

/// Listing plus creation form.
///
/// Both calls fail open: a failure is logged and the state stays exactly as
/// it was before the call. The listing is only ever replaced wholesale.
///
/// The `finish_*` methods let an event loop keep several calls in flight and
/// apply their outcomes in completion order; the last completed load wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestPanel {
    requests: Vec<SecretRequest>,
    draft: Draft,
    failures: u64,
}

impl RequestPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[SecretRequest] {
        &self.requests
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Number of failed calls so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn set_secret_name(&mut self, value: impl Into<String>) {
        self.draft.secret_name = value.into();
    }

    pub fn set_secret_type(&mut self, value: SecretType) {
        self.draft.secret_type = value;
    }

    pub fn set_justification(&mut self, value: impl Into<String>) {
        self.draft.justification = value.into();
    }

    /// Body for a create call, taken from the current draft. Not validated.
    pub fn draft_body(&self) -> NewSecretRequest {
        self.draft.to_body()
    }

    /// Apply the outcome of a read call. Returns whether it succeeded.
    pub fn finish_load<E: fmt::Display>(&mut self, result: Result<Vec<SecretRequest>, E>) -> bool {
        match result {
            Ok(requests) => {
                debug!(count = requests.len(), "secret requests loaded");
                self.requests = requests;
                true
            }
            Err(e) => {
                self.report(PanelFailure::Fetch, &e);
                false
            }
        }
    }

    /// Apply the outcome of a create call. Returns `true` when the draft was
    /// reset and the caller must reload the listing.
    pub fn finish_submit<E: fmt::Display>(&mut self, result: Result<(), E>) -> bool {
        match result {
            Ok(()) => {
                debug!("secret request created");
                self.draft = Draft::default();
                true
            }
            Err(e) => {
                self.report(PanelFailure::Submit, &e);
                false
            }
        }
    }

    /// Initial load when the panel becomes active.
    pub async fn activate<A: SecretRequestApi + ?Sized>(&mut self, api: &A) {
        self.load_requests(api).await;
    }

    pub async fn load_requests<A: SecretRequestApi + ?Sized>(&mut self, api: &A) {
        let result = api.list_requests().await;
        self.finish_load(result);
    }

    /// Create a request from the current draft; on success reset the draft
    /// and reload.
    pub async fn submit_request<A: SecretRequestApi + ?Sized>(&mut self, api: &A) {
        let body = self.draft_body();
        let result = api.create_request(&body).await;
        if self.finish_submit(result) {
            self.load_requests(api).await;
        }
    }

    fn report(&mut self, kind: PanelFailure, err: &dyn fmt::Display) {
        self.failures += 1;
        match kind {
            PanelFailure::Fetch => error!(kind = %kind, error = %err, "Error fetching requests"),
            PanelFailure::Submit => error!(kind = %kind, error = %err, "Error creating request"),
        }
    }
}
