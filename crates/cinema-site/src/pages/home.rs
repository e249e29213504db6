use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::route::{CinemaRoute, Page};
use crate::store::SiteContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = SiteContext::expect_context();
    let new_count = move || ctx.new_releases().len();

    view! {
        <Title text=Page::Home.title() />
        <section class="home">
            <h1>"Welcome to the cinema"</h1>
            <p>{new_count} " new releases showing now."</p>
            <ul class="quick-links">
                <li><A href=CinemaRoute::NewReleases>"New releases"</A></li>
                <li><A href=CinemaRoute::MovieList>"All movies"</A></li>
                <li><A href=CinemaRoute::Cinemas>"Our cinemas"</A></li>
                <li><A href=CinemaRoute::Classifications>"Classifications"</A></li>
            </ul>
        </section>
    }
}
