use std::borrow::Cow;
use thiserror::Error;
use trillium::Status;

/**
The error produced by view logic.

A `ViewError` carries a `kind`, the string category that error
bindings registered with [`Views::catch`](crate::Views::catch) match
on, an optional human-readable message, and an optional http status
for errors that correspond directly to a response code.
*/
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ViewError {
    kind: Cow<'static, str>,
    message: Cow<'static, str>,
    status: Option<Status>,
}

impl ViewError {
    /**
    Constructs a `ViewError` with the given kind. The kind doubles as
    the message until [`ViewError::with_message`] replaces it.
    */
    pub fn new(kind: impl Into<Cow<'static, str>>) -> Self {
        let kind = kind.into();
        Self {
            message: kind.clone(),
            kind,
            status: None,
        }
    }

    /// Replaces the message.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches an http status, making this error dispatchable to a
    /// [`Catch::Status`](crate::Catch::Status) binding.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// The error category used for binding lookup.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The human-readable description of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The http status this error carries, if any.
    pub fn status(&self) -> Option<Status> {
        self.status
    }
}

impl From<Status> for ViewError {
    fn from(status: Status) -> Self {
        Self::new(status.canonical_reason()).with_status(status)
    }
}

impl From<handlebars::RenderError> for ViewError {
    fn from(error: handlebars::RenderError) -> Self {
        Self::new("render").with_message(error.to_string())
    }
}
