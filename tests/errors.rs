use std::borrow::Cow;
use trillium::Status;
use trillium_testing::prelude::*;
use trillium_views::{Catch, RouteParams, Value, View, ViewError, Views};

#[derive(Default)]
struct Plain;

impl View for Plain {
    fn template(&self) -> Cow<'static, str> {
        "ok".into()
    }
}

#[derive(Default)]
struct Failing;

impl View for Failing {
    fn template(&self) -> Cow<'static, str> {
        "{{hello}}".into()
    }

    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        match name {
            "hello" => Err(ViewError::new("boom").with_message("testing")),
            _ => Ok(None),
        }
    }
}

#[derive(Default)]
struct NotImplemented;

impl View for NotImplemented {
    fn template(&self) -> Cow<'static, str> {
        "{{hello}}".into()
    }

    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        match name {
            "hello" => Err(ViewError::new("not_implemented")),
            _ => Ok(None),
        }
    }
}

#[derive(Default)]
struct NotFoundView;

impl View for NotFoundView {
    fn template(&self) -> Cow<'static, str> {
        "{{hello}}".into()
    }

    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        Ok(match name {
            "hello" => Some("hello 404".into()),
            _ => None,
        })
    }
}

#[derive(Default)]
struct ExceptionView {
    params: RouteParams,
}

impl View for ExceptionView {
    fn template(&self) -> Cow<'static, str> {
        "{{hello}}{{dynamic}}".into()
    }

    fn route(&mut self, params: &RouteParams) -> Result<(), ViewError> {
        self.params = params.clone();
        Ok(())
    }

    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        Ok(match name {
            "hello" => Some("hello exception".into()),
            "dynamic" => Some(self.params.get("dynamic").unwrap_or_default().into()),
            _ => None,
        })
    }
}

#[derive(Default)]
struct CaughtMessage {
    error: Option<ViewError>,
}

impl View for CaughtMessage {
    fn template(&self) -> Cow<'static, str> {
        "caught {{error}}".into()
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

#[test]
fn a_not_found_binding_renders_unmatched_requests() {
    let views = Views::new()
        .get::<Plain>("/test")
        .catch::<NotFoundView>(Status::NotFound);
    assert_response!(get("/test404").on(&views), 404, "hello 404");
}

#[test]
fn a_catch_all_binding_resolves_to_500() {
    let views = Views::new()
        .get::<Failing>("/testexception")
        .catch::<ExceptionView>(Catch::Error);
    assert_response!(get("/testexception").on(&views), 500, "hello exception");
}

#[test]
fn a_kind_binding_resolves_to_500() {
    let views = Views::new()
        .get::<NotImplemented>("/testnotimplemented")
        .catch::<ExceptionView>("not_implemented");
    assert_response!(get("/testnotimplemented").on(&views), 500, "hello exception");
}

#[test]
fn an_explicit_status_overrides_a_kind_binding() {
    let views = Views::new()
        .get::<NotImplemented>("/testnotimplemented")
        .catch_with_status::<ExceptionView>("not_implemented", Status::NotImplemented);
    assert_response!(
        get("/testnotimplemented").on(&views),
        501,
        "hello exception"
    );
}

#[test]
fn an_explicit_status_overrides_a_status_binding() {
    let views = Views::new()
        .get::<Plain>("/test")
        .catch_with_status::<NotFoundView>(Status::NotFound, Status::Gone);
    assert_response!(get("/nope").on(&views), 410, "hello 404");
}

#[test]
fn the_triggering_error_reaches_the_error_view() {
    let views = Views::new()
        .get::<Failing>("/testexception")
        .catch::<CaughtMessage>(Catch::Error);
    assert_response!(get("/testexception").on(&views), 500, "caught testing");
}

#[test]
fn route_params_reach_the_error_view() {
    #[derive(Default)]
    struct FailingWithParam;

    impl View for FailingWithParam {
        fn template(&self) -> Cow<'static, str> {
            "{{hello}}".into()
        }

        fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
            match name {
                "hello" => Err(ViewError::new("boom")),
                _ => Ok(None),
            }
        }
    }

    let views = Views::new()
        .get::<FailingWithParam>("/test/:dynamic")
        .catch::<ExceptionView>(Catch::Error);
    assert_response!(get("/test/abc").on(&views), 500, "hello exceptionabc");
}

#[test]
fn a_failing_route_method_is_dispatched_too() {
    #[derive(Default)]
    struct RouteFails;

    impl View for RouteFails {
        fn template(&self) -> Cow<'static, str> {
            "never rendered".into()
        }

        fn route(&mut self, _params: &RouteParams) -> Result<(), ViewError> {
            Err(ViewError::new("boom").with_message("route failed"))
        }
    }

    let views = Views::new()
        .get::<RouteFails>("/test")
        .catch::<CaughtMessage>("boom");
    assert_response!(get("/test").on(&views), 500, "caught route failed");
}

#[test]
fn a_status_flavored_error_prefers_a_status_binding() {
    #[derive(Default)]
    struct Gone;

    impl View for Gone {
        fn template(&self) -> Cow<'static, str> {
            "{{hello}}".into()
        }

        fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
            match name {
                "hello" => Err(ViewError::from(Status::Gone)),
                _ => Ok(None),
            }
        }
    }

    let views = Views::new()
        .get::<Gone>("/test")
        .catch::<CaughtMessage>(Catch::Error)
        .catch::<NotFoundView>(Status::Gone);
    assert_response!(get("/test").on(&views), 410, "hello 404");
}

#[test]
fn a_kind_binding_wins_over_the_catch_all() {
    let views = Views::new()
        .get::<Failing>("/testexception")
        .catch::<ExceptionView>(Catch::Error)
        .catch::<CaughtMessage>("boom");
    assert_response!(get("/testexception").on(&views), 500, "caught testing");
}

#[test]
fn an_unbound_error_responds_with_a_bare_500() {
    let views = Views::new().get::<Failing>("/testexception");
    assert_status!(get("/testexception").on(&views), 500);
}

#[test]
fn a_failing_error_view_responds_with_a_bare_500() {
    let views = Views::new()
        .get::<Plain>("/test")
        .catch::<Failing>(Status::NotFound);
    assert_status!(get("/nope").on(&views), 500);
}

#[test]
fn unmatched_requests_without_a_binding_are_left_alone() {
    let views = Views::new().get::<Plain>("/test");
    assert_not_handled!(get("/nope").on(&views));
}

#[test]
fn a_catch_all_binding_never_sees_unmatched_requests() {
    let views = Views::new()
        .get::<Plain>("/test")
        .catch::<ExceptionView>(Catch::Error);
    assert_not_handled!(get("/no/such/route").on(&views));
}

#[test]
fn a_kind_binding_never_sees_unmatched_requests() {
    let views = Views::new()
        .get::<Plain>("/test")
        .catch::<CaughtMessage>("Not Found");
    assert_not_handled!(get("/nope").on(&views));
}
