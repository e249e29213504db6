use cinema_router::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;

use super::movie_cards;
use crate::model::{Classification, Movie};
use crate::route::Page;
use crate::store::{SiteContext, SiteStateStoreFields};

/// The full catalogue, optionally narrowed with `?classification=<slug>`.
/// An unrecognised classification shows everything.
#[component]
pub fn MovieListPage() -> impl IntoView {
    let ctx = SiteContext::expect_context();
    let filter = MaybeQuery::<Classification>::new("classification");

    let movies = move || {
        let wanted = filter.get().ok();
        ctx.store().movies().with(|all| {
            all.iter()
                .filter(|m| wanted.map_or(true, |c| m.classification == c))
                .cloned()
                .collect::<Vec<Movie>>()
        })
    };
    let heading = move || match filter.get().ok() {
        Some(c) => format!("Movies rated {c}"),
        None => "All movies".to_string(),
    };

    view! {
        <Title text=Page::MovieList.title() />
        <section class="movie-list">
            <h1>{heading}</h1>
            {move || movie_cards(movies(), "No movies match.")}
        </section>
    }
}
