use crate::{View, ViewError};
use handlebars::Handlebars;

/**
The render function that turns a [`View`] instance into response text.

[`Views`](crate::Views) holds a single shared `Renderer`, replaceable
with [`Views::with_renderer`](crate::Views::with_renderer), so an
alternate template engine or a mock can be substituted.
*/
pub trait Renderer: Send + Sync + 'static {
    /// Renders the view to response text.
    fn render(&self, view: &dyn View) -> Result<String, ViewError>;
}

/**
The default [`Renderer`], backed by [the handlebars
crate](https://docs.rs/crate/handlebars).

For each variable name the view's template references, the value is
taken from the view's [`var`](View::var) accessor if it yields one,
and from the same-named [`assigns`](View::assigns) entry otherwise.
Accessors for unreferenced names are never called, and unresolved
names render as the empty string.
*/
pub struct Mustache {
    registry: Handlebars<'static>,
}

impl Mustache {
    /// Constructs a `Mustache` renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Mustache {
    fn default() -> Self {
        Self {
            registry: Handlebars::new(),
        }
    }
}

impl std::fmt::Debug for Mustache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Mustache(..)")
    }
}

impl Renderer for Mustache {
    fn render(&self, view: &dyn View) -> Result<String, ViewError> {
        let template = view.template();
        let mut data = view.assigns().cloned().unwrap_or_default();
        for name in variable_names(&template) {
            if let Some(value) = view.var(name)? {
                data.insert(name.to_string().into(), value);
            }
        }
        self.registry
            .render_template(&template, &data)
            .map_err(ViewError::from)
    }
}

/// The distinct variable names referenced by a mustache template, in
/// order of first appearance. Comments and partials are skipped, and
/// section and path tags contribute their root name.
fn variable_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        rest = &rest[start + 2..];
        let Some(end) = rest.find("}}") else { break };
        let tag = rest[..end].trim();
        rest = &rest[end + 2..];
        if tag.starts_with(['!', '>']) {
            continue;
        }
        let tag = tag
            .trim_start_matches(['{', '#', '^', '/', '&'])
            .trim_start();
        let Some(name) = tag.split(['.', ' ']).next().filter(|name| !name.is_empty()) else {
            continue;
        };
        if name == "else" || names.contains(&name) {
            continue;
        }
        names.push(name);
    }
    names
}
