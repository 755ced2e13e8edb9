use std::borrow::Cow;
use trillium::Status;
use trillium_views::{RouteParams, Value, View, ViewError, Views};

#[derive(Default)]
struct Hello {
    name: String,
}

impl View for Hello {
    fn template(&self) -> Cow<'static, str> {
        "hello {{name}}!\n".into()
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

#[derive(Default)]
struct NotFound {
    error: Option<ViewError>,
}

impl View for NotFound {
    fn template(&self) -> Cow<'static, str> {
        "{{error}}\n".into()
    }

    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        Ok(match name {
            "error" => self.error.as_ref().map(|error| error.message().into()),
            _ => None,
        })
    }

    fn set_error(&mut self, error: ViewError) {
        self.error = Some(error);
    }
}

pub fn main() {
    env_logger::init();
    trillium_smol::run((
        trillium_logger::Logger::new(),
        Views::new()
            .get::<Hello>("/")
            .get::<Hello>("/hello/:name")
            .catch::<NotFound>(Status::NotFound),
    ));
}
