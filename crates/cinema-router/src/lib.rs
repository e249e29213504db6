//! Route tables for Leptos single-page apps.
//!
//! A [`RouteTable`] is an ordered list of [`RouteDef`] declarations, matched
//! first-to-last against a URL. A typed route enum implements [`Routable`] to
//! tie that table to its own variants, and [`route_outlet`] renders whatever
//! the table selects for the browser's location.

mod combine_paths;
mod error;
mod maybe_param;
#[cfg(feature = "hook-extensions")]
mod navigate;
mod outlet;
mod segment;
mod table;

pub use combine_paths::combine_paths;
pub use error::RouteError;
pub use outlet::{route_outlet, Located, RouteParams};
pub use segment::RouteSegment;
pub use table::{Params, RouteDef, RouteEntry, RouteMatch, RouteTable};

pub trait Routable: Sized + 'static {
    /// Closed set of views the table can select.
    type View: Clone + PartialEq + Send + Sync + 'static;

    /// The validated route table. Implementations build it once and hand out
    /// the same instance afterwards.
    fn table() -> Result<&'static RouteTable<Self::View>, RouteError>;

    /// Converts a table match into the typed route, pulling out any params
    /// the matched pattern declares.
    fn from_match(matched: &RouteMatch<'_, Self::View>) -> Self;

    /// The route used for URLs that match nothing.
    fn fallback_route() -> Self;

    fn parse(url: &str) -> Result<Self, RouteError> {
        let table = Self::table()?;
        let matched = table
            .resolve(url)
            .ok_or_else(|| RouteError::NoMatch(url.to_string()))?;
        Ok(Self::from_match(&matched))
    }

    fn resolve_or_fallback(url: &str) -> Self {
        Self::parse(url).unwrap_or_else(|_| Self::fallback_route())
    }

    /// The component for one view of the table.
    fn render(view: Self::View) -> ::leptos::prelude::AnyView;

    /// Table-driven routing for the current location; see [`route_outlet`].
    fn routes() -> impl ::leptos::IntoView {
        route_outlet::<Self>()
    }

    fn fallback() -> impl ::leptos::IntoView;
}

pub mod prelude {
    #[cfg(feature = "hook-extensions")]
    pub use crate::navigate::*;
    pub use crate::combine_paths::combine_paths;
    pub use crate::maybe_param::*;
    pub use crate::{Routable, RouteDef, RouteError, RouteMatch, RouteParams, RouteTable};
}
