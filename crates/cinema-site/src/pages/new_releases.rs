use leptos::prelude::*;
use leptos_meta::Title;

use super::movie_cards;
use crate::route::Page;
use crate::store::SiteContext;

#[component]
pub fn NewReleasesPage() -> impl IntoView {
    let ctx = SiteContext::expect_context();

    view! {
        <Title text=Page::NewReleases.title() />
        <section class="new-releases">
            <h1>"New releases"</h1>
            {move || movie_cards(ctx.new_releases(), "Nothing new this week.")}
        </section>
    }
}
