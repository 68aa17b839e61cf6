// Contact form: field state, the submitter port, notifications and the
// controller that ties them together for a single in-flight submission.

pub mod controller;
pub mod form;
pub mod notification;
pub mod submitter;

pub use controller::{ContactForm, SubmitOutcome};
pub use form::FormState;
pub use notification::LatestNotifier;
pub use submitter::{ContactSubmitter, HttpContactSubmitter};
