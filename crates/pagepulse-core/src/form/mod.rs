//! Contact form submission and newsletter signup
//!
//! A single POST per submission, no retries. The endpoint expects a JSON body
//! sent as `text/plain` and answers with `{"status": ..., "message": ...}`.
//! The newsletter signup is local only.

mod client;
mod newsletter;
mod transport;

pub use client::{ContactForm, FormClient, SubmissionResponse, DEFAULT_FAILURE_MESSAGE};
pub use transport::{FormTransport, HttpTransport};
pub use newsletter::{Newsletter, NewsletterState, SUBSCRIBED_LABEL};
