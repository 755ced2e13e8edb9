#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!
# Template-backed views for trillium

This crate lets a plain rust type that bundles a mustache template with
its data stand in as a trillium request handler or error handler. A
[`View`] describes the template and how its variables are resolved, and
the [`Views`] handler binds view types to routefinder url patterns and
to error conditions.

Every request gets a fresh view instance, so no view state outlives a
single conn.

```
use std::borrow::Cow;
use trillium_views::{RouteParams, Value, View, ViewError, Views};

#[derive(Default)]
struct Greeting {
    name: String,
}

impl View for Greeting {
    fn template(&self) -> Cow<'static, str> {
        "hello {{name}}".into()
    }

    fn route(&mut self, params: &RouteParams) -> Result<(), ViewError> {
        self.name = params.get("name").unwrap_or("world").into();
        Ok(())
    }

    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        Ok(match name {
            "name" => Some(self.name.clone().into()),
            _ => None,
        })
    }
}

let views = Views::new().get::<Greeting>("/hello/:name");

use trillium_testing::prelude::*;
assert_ok!(get("/hello/trillium").on(&views), "hello trillium");
```

Error views work the same way, but are registered under a [`Catch`] key
and receive the triggering [`ViewError`] through [`View::set_error`]
before rendering. See [`Views::catch`] for the status resolution rules.

Rendering is performed by an injectable [`Renderer`]. The default,
[`Mustache`], is backed by [the handlebars
crate](https://docs.rs/crate/handlebars).
*/

mod assigns;
mod catch;
mod error;
mod renderer;
mod route_params;
mod view;
mod view_conn_ext;
mod views;

pub use assigns::Assigns;
pub use catch::Catch;
pub use error::ViewError;
pub use renderer::{Mustache, Renderer};
pub use route_params::RouteParams;
pub use view::View;
pub use view_conn_ext::ViewConnExt;
pub use views::Views;

pub use serde_json::{json, Value};
