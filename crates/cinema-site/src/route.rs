use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use cinema_router::prelude::*;
use leptos::prelude::*;
use leptos_router::components::ToHref;

use crate::pages::{
    AboutUsPage, CinemasPage, ClassificationsPage, HomePage, MovieDetailsPage, MovieListPage,
    NewReleasesPage, NotFoundPage,
};

/// Every view the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Classifications,
    MovieDetails,
    Cinemas,
    NewReleases,
    MovieList,
    AboutUs,
    NotFound,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Classifications => "Classifications",
            Self::MovieDetails => "Movie details",
            Self::Cinemas => "Cinemas",
            Self::NewReleases => "New releases",
            Self::MovieList => "All movies",
            Self::AboutUs => "About us",
            Self::NotFound => "Page not found",
        }
    }
}

/// A navigable location in the site, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CinemaRoute {
    /// `/`, also reachable as `/home`.
    Home,
    Classifications,
    /// `/movie` or `/movie/:id`.
    MovieDetails { id: Option<String> },
    Cinemas,
    NewReleases,
    MovieList,
    AboutUs,
    NotFound,
}

impl CinemaRoute {
    pub fn movie(id: impl Into<String>) -> Self {
        Self::MovieDetails { id: Some(id.into()) }
    }

    pub fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Classifications => Page::Classifications,
            Self::MovieDetails { .. } => Page::MovieDetails,
            Self::Cinemas => Page::Cinemas,
            Self::NewReleases => Page::NewReleases,
            Self::MovieList => Page::MovieList,
            Self::AboutUs => Page::AboutUs,
            Self::NotFound => Page::NotFound,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::MovieDetails { id: None } => Some("movieDetails"),
            Self::MovieDetails { id: Some(_) } => Some("movieDetailsId"),
            _ => None,
        }
    }
}

impl Routable for CinemaRoute {
    type View = Page;

    fn table() -> Result<&'static RouteTable<Page>, RouteError> {
        static TABLE: OnceLock<Result<RouteTable<Page>, RouteError>> = OnceLock::new();
        TABLE
            .get_or_init(|| {
                RouteTable::new(vec![
                    RouteDef::route("/", Page::Home),
                    RouteDef::route("/classifications", Page::Classifications),
                    RouteDef::nested("/home", Page::Home, vec![RouteDef::route("", Page::Home)]),
                    RouteDef::nested(
                        "/movie",
                        Page::MovieDetails,
                        vec![RouteDef::route(":id", Page::MovieDetails).named("movieDetailsId")],
                    )
                    .named("movieDetails"),
                    RouteDef::route("/cinemas", Page::Cinemas),
                    RouteDef::route("/newrelease", Page::NewReleases),
                    RouteDef::route("/movielist", Page::MovieList),
                    RouteDef::route("/aboutus", Page::AboutUs),
                ])
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    fn from_match(matched: &RouteMatch<'_, Page>) -> Self {
        match matched.view() {
            Page::Home => Self::Home,
            Page::Classifications => Self::Classifications,
            Page::MovieDetails => Self::MovieDetails {
                id: matched.param("id").map(str::to_string),
            },
            Page::Cinemas => Self::Cinemas,
            Page::NewReleases => Self::NewReleases,
            Page::MovieList => Self::MovieList,
            Page::AboutUs => Self::AboutUs,
            Page::NotFound => Self::NotFound,
        }
    }

    fn fallback_route() -> Self {
        Self::NotFound
    }

    fn render(page: Page) -> AnyView {
        match page {
            Page::Home => view! { <HomePage /> }.into_any(),
            Page::Classifications => view! { <ClassificationsPage /> }.into_any(),
            Page::MovieDetails => view! { <MovieDetailsPage /> }.into_any(),
            Page::Cinemas => view! { <CinemasPage /> }.into_any(),
            Page::NewReleases => view! { <NewReleasesPage /> }.into_any(),
            Page::MovieList => view! { <MovieListPage /> }.into_any(),
            Page::AboutUs => view! { <AboutUsPage /> }.into_any(),
            Page::NotFound => Self::fallback().into_any(),
        }
    }

    fn fallback() -> impl IntoView {
        view! { <NotFoundPage /> }
    }
}

impl fmt::Display for CinemaRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Classifications => f.write_str("/classifications"),
            Self::MovieDetails { id: None } => f.write_str("/movie"),
            Self::MovieDetails { id: Some(id) } => write!(f, "/movie/{}", urlencoding::encode(id)),
            Self::Cinemas => f.write_str("/cinemas"),
            Self::NewReleases => f.write_str("/newrelease"),
            Self::MovieList => f.write_str("/movielist"),
            Self::AboutUs => f.write_str("/aboutus"),
            Self::NotFound => f.write_str("/404"),
        }
    }
}

impl FromStr for CinemaRoute {
    type Err = RouteError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        Self::parse(url)
    }
}

impl From<&str> for CinemaRoute {
    fn from(url: &str) -> Self {
        Self::resolve_or_fallback(url)
    }
}

impl From<String> for CinemaRoute {
    fn from(url: String) -> Self {
        Self::resolve_or_fallback(&url)
    }
}

impl ToHref for CinemaRoute {
    fn to_href(&self) -> Box<dyn Fn() -> String + '_> {
        let href = self.to_string();
        Box::new(move || href.clone())
    }
}

impl IntoPath for CinemaRoute {
    fn into_path(self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid() {
        let table = CinemaRoute::table().unwrap();
        assert_eq!(
            table.paths(),
            vec![
                "/",
                "/classifications",
                "/home",
                "/movie",
                "/movie/:id",
                "/cinemas",
                "/newrelease",
                "/movielist",
                "/aboutus",
            ]
        );
    }

    #[test]
    fn detail_params_are_consumed_by_the_route() {
        let table = CinemaRoute::table().unwrap();
        let matched = table.resolve("/movie/42").unwrap();
        for name in matched.leaf().param_names() {
            assert_eq!(name, "id");
        }
        assert_eq!(CinemaRoute::from_match(&matched), CinemaRoute::movie("42"));
    }

    #[test]
    fn names_follow_the_matched_route() {
        let table = CinemaRoute::table().unwrap();
        assert_eq!(table.resolve("/movie").unwrap().name(), Some("movieDetails"));
        assert_eq!(table.resolve("/movie/1").unwrap().name(), Some("movieDetailsId"));
        assert_eq!(CinemaRoute::movie("1").name(), Some("movieDetailsId"));
        assert_eq!(CinemaRoute::MovieDetails { id: None }.name(), Some("movieDetails"));
    }

    #[test]
    fn table_is_built_once() {
        let first = CinemaRoute::table().unwrap();
        let second = CinemaRoute::table().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn ids_are_percent_encoded_in_hrefs() {
        assert_eq!(CinemaRoute::movie("a/b c").to_string(), "/movie/a%2Fb%20c");
        assert_eq!(CinemaRoute::movie("7").to_string(), "/movie/7");
    }

    #[test]
    fn href_is_the_display_form() {
        let route = CinemaRoute::movie("5");
        assert_eq!((route.to_href())(), "/movie/5");
        assert_eq!(CinemaRoute::AboutUs.into_path(), "/aboutus");
    }
}
