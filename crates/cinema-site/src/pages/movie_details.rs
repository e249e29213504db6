use cinema_router::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::route::{CinemaRoute, Page};
use crate::store::SiteContext;

/// Shows one movie. The `id` segment is optional: without it the page asks
/// the visitor to pick a movie instead of failing.
#[component]
pub fn MovieDetailsPage() -> impl IntoView {
    let ctx = SiteContext::expect_context();
    let id = MaybeParam::<String>::new("id");
    let navigate = use_navigate();

    Effect::new(move |_| ctx.select_movie(id.get().ok()));

    let body = move || match id.get().require(id.key()) {
        Err(ParamError::Missing(_)) => view! {
            <p>"Choose a movie to see its details."</p>
            <A href=CinemaRoute::MovieList>"Browse all movies"</A>
        }
        .into_any(),
        Ok(raw) | Err(ParamError::ParseError(raw)) => match ctx.find_movie(&raw) {
            Some(movie) => {
                let runtime = movie.runtime_label();
                let navigate = navigate.clone();
                view! {
                    <h1>{movie.title}</h1>
                    <p class="meta">
                        <span class="classification">{movie.classification.code()}</span>
                        " · "
                        {runtime}
                    </p>
                    <p>{movie.synopsis}</p>
                    <button on:click=move |_| navigate.navigate(CinemaRoute::MovieList)>
                        "Back to all movies"
                    </button>
                }
                .into_any()
            }
            None => {
                log::warn!("no movie with id {raw}");
                view! {
                    <p>"We couldn't find movie " <code>{raw}</code> "."</p>
                    <A href=CinemaRoute::MovieList>"Browse all movies"</A>
                }
                .into_any()
            }
        },
    };

    view! {
        <Title text=Page::MovieDetails.title() />
        <section class="movie-details">{body}</section>
    }
}
