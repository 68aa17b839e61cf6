//! Contact form controller — owns the field state and the submit lifecycle.
//!
//! Flow for one `submit()`:
//! 1. Idle → Submitting (any other status: the call is a no-op)
//! 2. One request through the `ContactSubmitter`
//! 3. Success: success notification, fields cleared.
//!    Failure of any kind: error notification, fields kept.
//! 4. Status back to Idle. This runs from a drop guard, so it also happens
//!    if the submitter panics or the future is dropped mid-flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::contact::form::{FormState, SubmissionStatus};
use crate::contact::notification::{Notification, Notifier};
use crate::contact::submitter::{ContactSubmitter, SubmissionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    /// A submission was already in flight; nothing was sent.
    Ignored,
}

#[derive(Debug, Default)]
struct Session {
    form: FormState,
    status: SubmissionStatus,
}

pub struct ContactForm {
    session: Mutex<Session>,
    submitter: Arc<dyn ContactSubmitter>,
    notifier: Arc<dyn Notifier>,
}

impl ContactForm {
    pub fn new(submitter: Arc<dyn ContactSubmitter>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session: Mutex::new(Session::default()),
            submitter,
            notifier,
        }
    }

    pub fn form(&self) -> FormState {
        self.lock().form.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status
    }

    /// Replaces every field at once, e.g. from a posted form.
    pub fn load(&self, form: FormState) {
        self.lock().form = form;
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let snapshot = {
            let mut session = self.lock();
            if session.status.is_busy() {
                debug!("Submit ignored: a submission is already in flight");
                return SubmitOutcome::Ignored;
            }
            session.status = SubmissionStatus::Submitting;
            session.form.clone()
        };
        let _reset = StatusReset {
            session: &self.session,
        };

        let result = if snapshot.is_complete() {
            self.submitter.submit(&snapshot).await
        } else {
            let missing: Vec<&str> = snapshot.missing_fields().iter().map(|f| f.key()).collect();
            Err(SubmissionError::new(format!(
                "required fields empty: {}",
                missing.join(", ")
            )))
        };

        self.lock().status = SubmissionStatus::Done;

        match result {
            Ok(()) => {
                info!("Contact request sent");
                self.lock().form.clear();
                self.notifier.notify(Notification::sent());
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!(error = %e, "Contact request failed");
                self.notifier.notify(Notification::failed());
                SubmitOutcome::Failed
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        lock_session(&self.session)
    }
}

fn lock_session(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

struct StatusReset<'a> {
    session: &'a Mutex<Session>,
}

impl Drop for StatusReset<'_> {
    fn drop(&mut self) {
        lock_session(self.session).status = SubmissionStatus::Idle;
    }
}
