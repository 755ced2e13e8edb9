use crate::ViewError;
use std::borrow::Cow;
use trillium::Status;

/**
The key an error binding is registered under.

Bindings are consulted in precedence order: a [`Catch::Status`]
binding matching the error's status, then a [`Catch::Kind`] binding
matching the error's kind, then a [`Catch::Error`] catch-all.
*/
#[derive(Debug, Clone, PartialEq)]
pub enum Catch {
    /**
    Matches errors that carry exactly this status. A binding for
    [`Status::NotFound`] additionally renders requests that no route
    matched.
    */
    Status(Status),

    /// Matches errors whose [`kind`](ViewError::kind) is exactly this
    /// string.
    Kind(Cow<'static, str>),

    /// Matches any view error. Lowest precedence.
    Error,
}

impl Catch {
    /**
    The response status a binding under this key resolves to when no
    explicit status is provided: status keys respond with their own
    code, all other keys default to 500.
    */
    pub fn default_status(&self) -> Status {
        match self {
            Catch::Status(status) => *status,
            _ => Status::InternalServerError,
        }
    }

    pub(crate) fn matches(&self, error: &ViewError) -> bool {
        match self {
            Catch::Status(status) => error.status() == Some(*status),
            Catch::Kind(kind) => error.kind() == kind.as_ref(),
            Catch::Error => true,
        }
    }
}

impl From<Status> for Catch {
    fn from(status: Status) -> Self {
        Catch::Status(status)
    }
}

impl From<&'static str> for Catch {
    fn from(kind: &'static str) -> Self {
        Catch::Kind(kind.into())
    }
}
