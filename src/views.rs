use crate::{Catch, Mustache, Renderer, RouteParams, View, ViewError};
use std::{
    any::type_name,
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    sync::Arc,
};
use trillium::{async_trait, Conn, Handler, Status};
use trillium_router::Router;

/**
A handler that dispatches requests to template-backed [`View`] types.

Routes are registered with the chainable method functions ([`get`],
[`post`], [`put`], [`delete`], [`patch`], and [`any`]), and error
views with [`catch`] and [`catch_with_status`]. Each matching request
constructs a fresh instance of the bound view type, feeds it the
request's path and query parameters through [`View::route`], renders
it, and responds with the rendered body.

[`get`]: Views::get
[`post`]: Views::post
[`put`]: Views::put
[`delete`]: Views::delete
[`patch`]: Views::patch
[`any`]: Views::any
[`catch`]: Views::catch
[`catch_with_status`]: Views::catch_with_status

```
use std::borrow::Cow;
use trillium::Status;
use trillium_views::{Value, View, ViewError, Views};

#[derive(Default)]
struct NotFound;

impl View for NotFound {
    fn template(&self) -> Cow<'static, str> {
        "nothing here: {{error}}".into()
    }

    fn var(&self, name: &str) -> Result<Option<Value>, ViewError> {
        Ok(match name {
            "error" => Some("404".into()),
            _ => None,
        })
    }
}

let views = Views::new().catch::<NotFound>(Status::NotFound);

use trillium_testing::prelude::*;
let mut conn = get("/no/such/route").on(&views);
assert_status!(&conn, 404);
assert_body!(conn, "nothing here: 404");
```
*/
pub struct Views {
    router: Router,
    catches: Vec<CatchBinding>,
    renderer: Arc<dyn Renderer>,
}

/// Conn state that shares the renderer with route handlers and with
/// [`ViewConnExt`](crate::ViewConnExt).
#[derive(Clone)]
pub(crate) struct SharedRenderer(pub(crate) Arc<dyn Renderer>);

impl Debug for SharedRenderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SharedRenderer(..)")
    }
}

macro_rules! method {
    ($fn_name:ident) => {
        #[doc = concat!(
            "Registers `V` as the view for ",
            stringify!($fn_name),
            " requests matching the provided routefinder pattern."
        )]
        pub fn $fn_name<V: View + Default>(mut self, pattern: &'static str) -> Self {
            log::debug!(
                "registered {} {} for {}",
                stringify!($fn_name),
                pattern,
                type_name::<V>()
            );
            self.router = self.router.$fn_name(pattern, RouteView::<V>::new(pattern));
            self
        }
    };
}

impl Views {
    /// Constructs a `Views` handler with the default [`Mustache`]
    /// renderer and no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /**
    Replaces the render function shared by every binding on this
    handler. See [`Renderer`].
    */
    pub fn with_renderer(mut self, renderer: impl Renderer) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    method!(get);
    method!(post);
    method!(put);
    method!(delete);
    method!(patch);

    /// Registers `V` as the view for requests of any method matching
    /// the provided pattern.
    pub fn any<V: View + Default>(mut self, pattern: &'static str) -> Self {
        log::debug!("registered any {} for {}", pattern, type_name::<V>());
        self.router = self.router.all(pattern, RouteView::<V>::new(pattern));
        self
    }

    /**
    Registers `V` as the error view for the provided [`Catch`] key.

    The response status is resolved by the key: a
    [`Catch::Status`](crate::Catch::Status) key responds with its own
    status, and any other key responds with 500. Use
    [`Views::catch_with_status`] to override.

    When a view errors, bindings are consulted in precedence order: a
    status binding matching the error's status, then a kind binding
    matching the error's kind, then a [`Catch::Error`] catch-all.
    Requests that no route matched are rendered only by a
    [`Status::NotFound`] status binding; kind and catch-all bindings
    never see them.
    */
    pub fn catch<V: View + Default>(self, catch: impl Into<Catch>) -> Self {
        let catch = catch.into();
        let status = catch.default_status();
        self.catch_with_status::<V>(catch, status)
    }

    /// Like [`Views::catch`], but responds with the provided status
    /// regardless of the key's kind.
    pub fn catch_with_status<V: View + Default>(
        mut self,
        catch: impl Into<Catch>,
        status: Status,
    ) -> Self {
        let catch = catch.into();
        log::debug!(
            "registered {:?} ({}) for {}",
            catch,
            status as u16,
            type_name::<V>()
        );
        self.catches.push(CatchBinding {
            catch,
            status,
            view: Box::new(ErrorView::<V>(PhantomData)),
        });
        self
    }

    fn status_binding(&self, status: Status) -> Option<&CatchBinding> {
        self.catches
            .iter()
            .find(|binding| binding.catch == Catch::Status(status))
    }

    fn binding_for(&self, error: &ViewError) -> Option<&CatchBinding> {
        if let Some(binding) = error.status().and_then(|status| self.status_binding(status)) {
            return Some(binding);
        }
        self.catches
            .iter()
            .find(|binding| matches!(&binding.catch, Catch::Kind(_)) && binding.catch.matches(error))
            .or_else(|| {
                self.catches
                    .iter()
                    .find(|binding| binding.catch == Catch::Error)
            })
    }

    fn dispatch(&self, mut conn: Conn) -> Conn {
        let (error, binding) = match conn.take_state::<ViewError>() {
            Some(error) => match self.binding_for(&error) {
                Some(binding) => (error, binding),
                None => {
                    let status = error.status().unwrap_or(Status::InternalServerError);
                    log::error!("no error view for {error}");
                    return conn.with_status(status).halt();
                }
            },
            None => {
                if conn.status().is_some() || conn.is_halted() {
                    return conn;
                }
                // unmatched requests only concern a 404 status binding;
                // kind and catch-all bindings never see them
                let Some(binding) = self.status_binding(Status::NotFound) else {
                    return conn;
                };
                (ViewError::from(Status::NotFound), binding)
            }
        };

        let params = conn
            .take_state::<RouteParams>()
            .unwrap_or_else(|| RouteParams::from_conn(&conn, &[]));

        match binding.view.render(error, &params, &*self.renderer) {
            Ok(body) => conn.with_status(binding.status).with_body(body).halt(),
            Err(error) => {
                log::error!("error view {} failed: {}", binding.view.name(), error);
                conn.with_status(Status::InternalServerError).halt()
            }
        }
    }
}

impl Default for Views {
    fn default() -> Self {
        Self {
            router: Router::new(),
            catches: Vec::new(),
            renderer: Arc::new(Mustache::new()),
        }
    }
}

impl Debug for Views {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Views")
            .field("router", &self.router)
            .field("catches", &self.catches)
            .field("renderer", &"..")
            .finish()
    }
}

#[async_trait]
impl Handler for Views {
    async fn run(&self, conn: Conn) -> Conn {
        let conn = conn.with_state(SharedRenderer(Arc::clone(&self.renderer)));
        let conn = self.router.run(conn).await;
        self.dispatch(conn)
    }
}

struct CatchBinding {
    catch: Catch,
    status: Status,
    view: Box<dyn CatchView>,
}

impl Debug for CatchBinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatchBinding")
            .field("catch", &self.catch)
            .field("status", &self.status)
            .field("view", &self.view.name())
            .finish()
    }
}

trait CatchView: Send + Sync + 'static {
    fn render(
        &self,
        error: ViewError,
        params: &RouteParams,
        renderer: &dyn Renderer,
    ) -> Result<String, ViewError>;

    fn name(&self) -> &'static str;
}

struct ErrorView<V>(PhantomData<fn() -> V>);

impl<V: View + Default> CatchView for ErrorView<V> {
    fn render(
        &self,
        error: ViewError,
        params: &RouteParams,
        renderer: &dyn Renderer,
    ) -> Result<String, ViewError> {
        let mut view = V::default();
        view.set_error(error);
        view.route(params)?;
        renderer.render(&view)
    }

    fn name(&self) -> &'static str {
        type_name::<V>()
    }
}

struct RouteView<V> {
    capture_names: Vec<&'static str>,
    view: PhantomData<fn() -> V>,
}

impl<V> RouteView<V> {
    fn new(pattern: &'static str) -> Self {
        Self {
            capture_names: pattern
                .split('/')
                .filter_map(|segment| segment.strip_prefix(':'))
                .collect(),
            view: PhantomData,
        }
    }
}

#[async_trait]
impl<V: View + Default> Handler for RouteView<V> {
    async fn run(&self, mut conn: Conn) -> Conn {
        let renderer = conn
            .state::<SharedRenderer>()
            .cloned()
            .expect("RouteView must be run by Views");
        let params = RouteParams::from_conn(&conn, &self.capture_names);
        let mut view = V::default();
        let rendered = view
            .route(&params)
            .and_then(|()| renderer.0.render(&view));
        match rendered {
            Ok(body) => conn.ok(body),
            Err(error) => {
                log::error!("{}: {}", type_name::<V>(), error);
                conn.set_state(params);
                conn.set_state(error);
                conn
            }
        }
    }
}
