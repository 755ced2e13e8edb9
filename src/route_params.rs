use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};
use trillium::Conn;
use trillium_router::RouterConnExt;

/**
The path and query parameters of a single request, as passed to
[`View::route`](crate::View::route).

Query parameters are parsed from the request's querystring, and the
route's captured params are merged over them, so a captured param wins
over a query param of the same name. A wildcard match is stored under
the name `wildcard`.
*/
#[derive(Default, Debug, Clone)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    /// Constructs an empty `RouteParams` map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Stores a parameter, replacing any previous value for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub(crate) fn from_conn(conn: &Conn, capture_names: &[&'static str]) -> Self {
        let mut params = Self::new();
        for (name, value) in form_urlencoded::parse(conn.querystring().as_bytes()) {
            params.insert(name, value);
        }
        for name in capture_names {
            if let Some(value) = conn.param(name) {
                params.insert(*name, value);
            }
        }
        if let Some(wildcard) = conn.wildcard() {
            params.insert("wildcard", wildcard);
        }
        params
    }
}

impl Deref for RouteParams {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RouteParams {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
