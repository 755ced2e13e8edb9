use crate::{Assigns, RouteParams, ViewError};
use serde_json::Value;
use std::borrow::Cow;

/**
A template-backed view.

A view bundles a mustache template with the logic that supplies its
variables. [`Views`](crate::Views) constructs one instance per request
through the type's [`Default`] implementation, feeds it the request's
parameters, renders it, and discards it.

Only [`View::template`] is mandatory. The other methods are optional
capabilities with no-op defaults: a view that has nothing to do with
request parameters simply leaves [`View::route`] unimplemented, and a
view that is never used as an error view leaves [`View::set_error`]
unimplemented.
*/
pub trait View: Send + Sync + 'static {
    /// The mustache template source for this view.
    fn template(&self) -> Cow<'static, str>;

    /**
    Receives the request's path and query parameters before the view
    is rendered.

    The default implementation ignores the parameters, making
    parameter intake optional. An error returned from a provided
    implementation propagates to the error bindings registered on the
    [`Views`](crate::Views) handler.
    */
    fn route(&mut self, params: &RouteParams) -> Result<(), ViewError> {
        let _ = params;
        Ok(())
    }

    /**
    Resolves a template variable by name.

    The renderer consults this accessor for each variable name the
    template references. `Ok(None)` defers to the same-named entry of
    [`View::assigns`], if any. Accessors for names the template does
    not reference are never called.
    */
    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        let _ = name;
        Ok(None)
    }

    /**
    Plain template data for variables that have no [`View::var`]
    accessor.
    */
    fn assigns(&self) -> Option<&Assigns> {
        None
    }

    /**
    Receives the triggering error when this view is rendered by an
    error binding. The default implementation discards it.
    */
    fn set_error(&mut self, error: ViewError) {
        let _ = error;
    }
}
