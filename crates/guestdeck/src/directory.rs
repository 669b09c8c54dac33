//! The event directory: Guestdeck's boundary to the remote backend.
//!
//! Guestdeck doesn't implement network transport — that's the embedding
//! application's job (its HTTP client, its auth headers, its retry
//! policy). Instead this module defines the [`EventDirectory`] trait: one
//! async method that produces the organizer's event list or an error.
//! The portal calls it on refresh and never cares what sits behind it.
//!
//! # Why a trait?
//!
//! - Production plugs in a client for the real events API
//! - Development runs entirely off [`StaticDirectory`] and sample data
//! - Tests script both success and failure without a server
//!
//! All without changing any portal code.

use guestdeck_model::Event;

/// Errors the backend boundary can produce.
///
/// Transient-failure handling (retries, backoff) belongs to the
/// implementation behind the trait; the portal treats any error as "the
/// refresh did not happen" and keeps its previous event list.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The backend could not be reached at all.
    #[error("event directory unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but refused the request (bad credentials,
    /// revoked access, malformed response).
    #[error("event directory rejected the request: {0}")]
    Rejected(String),
}

/// Produces the list of events the current organizer may manage.
///
/// # Trait bounds
///
/// - `Send + Sync` → the directory is shared across async tasks.
/// - `'static` → it owns its data and lives as long as the portal.
pub trait EventDirectory: Send + Sync + 'static {
    /// Fetches the full event list.
    ///
    /// Called by [`Portal::refresh_events`](crate::Portal::refresh_events);
    /// the result replaces the portal's cached list wholesale.
    fn fetch_events(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Event>, DirectoryError>> + Send;
}

/// A directory serving a fixed in-memory event list.
///
/// This is the development and test implementation — the same role the
/// sample dataset plays for guests and rooms. [`StaticDirectory::unavailable`]
/// builds one that always fails, for exercising the error path.
pub struct StaticDirectory {
    events: Vec<Event>,
    outage: Option<String>,
}

impl StaticDirectory {
    /// Serves exactly these events on every fetch.
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            outage: None,
        }
    }

    /// A directory that fails every fetch with the given reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            events: Vec::new(),
            outage: Some(reason.into()),
        }
    }
}

impl EventDirectory for StaticDirectory {
    async fn fetch_events(&self) -> Result<Vec<Event>, DirectoryError> {
        match &self.outage {
            Some(reason) => Err(DirectoryError::Unavailable(reason.clone())),
            None => Ok(self.events.clone()),
        }
    }
}
