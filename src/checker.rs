//! Checker state machine
//!
//! Holds the input text and the outcome of the most recent check. The
//! network call is the only suspension point, so a check is split in two:
//! [`Checker::submit`] validates and moves to `Loading`, and
//! [`Checker::settle`] applies whatever the service answered. Every
//! submission gets a sequence number so late answers can be recognised.

use crate::backend::{CheckFailure, CheckRequest, CheckResult, PredictionClient};
use crate::config::StalePolicy;

/// What the view shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(CheckResult),
    Failed(String),
}

/// A request that was handed out and has not settled yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub request: CheckRequest,
}

#[derive(Debug, Default)]
pub struct Checker {
    input: String,
    state: UiState,
    latest_seq: u64,
    policy: StalePolicy,
}

impl Checker {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    pub fn result(&self) -> Option<&CheckResult> {
        match &self.state {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            UiState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Sequence number of the most recent submission
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Start a check of the current input.
    ///
    /// Returns the request to send, or `None` when the input is blank; in
    /// that case the state is already `Failed` and nothing must be sent.
    pub fn submit(&mut self) -> Option<Submission> {
        // Any submission supersedes whatever is still in flight.
        self.latest_seq += 1;

        match CheckRequest::from_input(&self.input) {
            Some(request) => {
                self.state = UiState::Loading;
                tracing::debug!("Submission #{} for {}", self.latest_seq, request.url);
                Some(Submission {
                    seq: self.latest_seq,
                    request,
                })
            }
            None => {
                self.state = UiState::Failed(CheckFailure::Validation.to_string());
                None
            }
        }
    }

    /// Apply the outcome of submission `seq`. Returns whether the state changed.
    pub fn settle(&mut self, seq: u64, outcome: Result<CheckResult, CheckFailure>) -> bool {
        if self.policy == StalePolicy::DropStale && seq != self.latest_seq {
            return false;
        }

        self.state = match outcome {
            Ok(result) => UiState::Success(result),
            Err(failure) => UiState::Failed(failure.to_string()),
        };
        true
    }

    /// Empty the input and return to `Idle`; answers still in flight become stale.
    pub fn clear(&mut self) {
        self.input.clear();
        self.state = UiState::Idle;
        self.latest_seq += 1;
    }

    /// Run one full check against `client`.
    pub async fn check(&mut self, client: &PredictionClient) -> &UiState {
        if let Some(submission) = self.submit() {
            let outcome = client.predict(&submission.request).await;
            self.settle(submission.seq, outcome);
        }
        &self.state
    }
}
