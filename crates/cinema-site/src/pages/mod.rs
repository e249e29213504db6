//! One component per routed view, plus the movie card they share.

mod about_us;
mod cinemas;
mod classifications;
mod home;
mod movie_details;
mod movie_list;
mod new_releases;
mod not_found;

pub use about_us::AboutUsPage;
pub use cinemas::CinemasPage;
pub use classifications::ClassificationsPage;
pub use home::HomePage;
pub use movie_details::MovieDetailsPage;
pub use movie_list::MovieListPage;
pub use new_releases::NewReleasesPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::model::Movie;
use crate::route::CinemaRoute;

#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let href = CinemaRoute::movie(movie.id.clone());
    let runtime = movie.runtime_label();
    view! {
        <article class="movie-card">
            <h3>
                <A href=href>{movie.title}</A>
            </h3>
            <p class="meta">
                <span class="classification">{movie.classification.code()}</span>
                " · "
                {runtime}
            </p>
            <p>{movie.synopsis}</p>
        </article>
    }
}

/// Renders a list of movies, or `empty` when there are none.
pub(crate) fn movie_cards(movies: Vec<Movie>, empty: &'static str) -> AnyView {
    if movies.is_empty() {
        view! { <p class="empty">{empty}</p> }.into_any()
    } else {
        view! {
            <div class="movie-grid">
                {movies.into_iter().map(|movie| view! { <MovieCard movie=movie /> }).collect_view()}
            </div>
        }
        .into_any()
    }
}
