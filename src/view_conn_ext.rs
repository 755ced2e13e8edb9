use crate::{views::SharedRenderer, View};
use trillium::Conn;

/**
Extends [`trillium::Conn`] with view-rendering capabilities for
handlers that sit downsequence of a [`Views`](crate::Views) handler.
*/
pub trait ViewConnExt {
    /**
    Renders a fresh instance of `V` through the shared renderer,
    responding 200 with the rendered body on success and 500 with the
    error text on failure. Must be run downsequence of a
    [`Views`](crate::Views) handler, and will panic if none has run.

    ```
    use std::borrow::Cow;
    use trillium::Conn;
    use trillium_views::{View, ViewConnExt, Views};

    #[derive(Default)]
    struct Static;

    impl View for Static {
        fn template(&self) -> Cow<'static, str> {
            "rendered inline".into()
        }
    }

    let handler = (Views::new(), |conn: Conn| async move {
        conn.render_view::<Static>()
    });

    use trillium_testing::prelude::*;
    assert_ok!(get("/").on(&handler), "rendered inline");
    ```
    */
    fn render_view<V: View + Default>(self) -> Self;
}

impl ViewConnExt for Conn {
    fn render_view<V: View + Default>(self) -> Self {
        let renderer = self
            .state::<SharedRenderer>()
            .cloned()
            .expect("render_view must be run downsequence of Views");
        match renderer.0.render(&V::default()) {
            Ok(body) => self.ok(body),
            Err(error) => {
                log::error!("{error}");
                self.with_status(500).with_body(error.to_string())
            }
        }
    }
}
