use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::table::{Params, RouteTable};
use crate::Routable;

/// The view and path parameters a table selects for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<V> {
    pub view: V,
    pub params: Params,
}

impl<V: Clone> Located<V> {
    pub fn resolve(table: &RouteTable<V>, url: &str) -> Option<Self> {
        table.resolve(url).map(|matched| Self {
            view: matched.view().clone(),
            params: matched.params().clone(),
        })
    }
}

/// Decoded path parameters of the current match, provided to every view
/// [`route_outlet`] renders.
#[derive(Debug, Clone, Copy)]
pub struct RouteParams(pub(crate) Memo<Params>);

impl RouteParams {
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.with(|params| params.get(key).cloned())
    }

    pub fn all(&self) -> Params {
        self.0.get()
    }
}

/// Renders whatever `R`'s table selects for the current location, falling
/// back to [`Routable::fallback`] when nothing matches. The table is the only
/// route declaration; Leptos supplies the location and nothing else.
///
/// Must be called inside `<Router>`.
pub fn route_outlet<R: Routable>() -> impl IntoView {
    let table = match R::table() {
        Ok(table) => Some(table),
        Err(err) => {
            log::error!("route table is invalid, every path falls back: {err}");
            None
        }
    };
    let location = use_location();

    let located = Memo::new(move |_| {
        let path = location.pathname.get();
        table.and_then(|table| Located::resolve(table, &path))
    });
    // Keyed on the view alone: a new id for the same view only updates params.
    let view = Memo::new(move |_| located.with(|l| l.as_ref().map(|l| l.view.clone())));
    let params = Memo::new(move |_| {
        located.with(|l| l.as_ref().map(|l| l.params.clone()).unwrap_or_default())
    });
    provide_context(RouteParams(params));

    move || match view.get() {
        Some(view) => R::render(view),
        None => R::fallback().into_any(),
    }
}
