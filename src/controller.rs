//! Form controller
//!
//! Drives one prediction form through `Idle → Submitting → {Succeeded, Failed}`
//! and talks to the UI only through [`FormView`].

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::client::PredictionClient;
use crate::models::{DisplayResult, PredictionForm};

/// UI callbacks for the trigger control and the result region
pub trait FormView: Send + Sync {
    fn set_trigger_enabled(&self, enabled: bool);
    fn clear_result(&self);
    fn show_result(&self, result: &DisplayResult);
}

impl<T: FormView + ?Sized> FormView for Arc<T> {
    fn set_trigger_enabled(&self, enabled: bool) {
        (**self).set_trigger_enabled(enabled)
    }

    fn clear_result(&self) {
        (**self).clear_result()
    }

    fn show_result(&self, result: &DisplayResult) {
        (**self).show_result(result)
    }
}

/// What happens to the trigger while a request is pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerMode {
    /// Disable the trigger until the pending request resolves
    #[default]
    DisableWhileBusy,
    /// Leave the trigger enabled; only the newest submission is rendered
    AllowOverlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The result was shown in the result region
    Rendered(DisplayResult),
    /// A newer submission was started before this one resolved
    Superseded,
    /// The trigger was disabled; nothing was sent
    TriggerDisabled,
}

pub struct FormController<V: FormView> {
    client: PredictionClient,
    view: V,
    mode: TriggerMode,
    state: Mutex<SubmissionState>,
    busy: AtomicBool,
    latest_token: AtomicU64,
}

/// Re-enables the trigger exactly once, however the submission ends
struct TriggerGuard<'a, V: FormView> {
    view: &'a V,
    busy: &'a AtomicBool,
}

impl<V: FormView> Drop for TriggerGuard<'_, V> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
        self.view.set_trigger_enabled(true);
    }
}

impl<V: FormView> FormController<V> {
    pub fn new(client: PredictionClient, view: V, mode: TriggerMode) -> Self {
        Self {
            client,
            view,
            mode,
            state: Mutex::new(SubmissionState::Idle),
            busy: AtomicBool::new(false),
            latest_token: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Handle one press of the trigger
    pub async fn submit(&self, form: &PredictionForm) -> SubmitOutcome {
        let _guard = match self.mode {
            TriggerMode::DisableWhileBusy => {
                if self.busy.swap(true, Ordering::SeqCst) {
                    tracing::debug!("Submission ignored: trigger disabled");
                    return SubmitOutcome::TriggerDisabled;
                }
                self.view.set_trigger_enabled(false);
                Some(TriggerGuard { view: &self.view, busy: &self.busy })
            }
            TriggerMode::AllowOverlap => None,
        };

        // Token issue and clear, like token check and render, happen under
        // the state lock so a stale result can never land after a newer clear
        let token = {
            let mut state = self.state.lock();
            let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
            *state = SubmissionState::Submitting;
            self.view.clear_result();
            token
        };

        let result = self.client.submit_prediction(form).await;

        let mut state = self.state.lock();
        if self.latest_token.load(Ordering::SeqCst) != token {
            tracing::debug!("Discarding stale result for submission {}", token);
            return SubmitOutcome::Superseded;
        }

        *state = if result.is_success() {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
        self.view.show_result(&result);
        drop(state);

        SubmitOutcome::Rendered(result)
    }
}
