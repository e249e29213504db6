use cinema_router::prelude::LocationExt;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::route::{CinemaRoute, Page};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <Title text=Page::NotFound.title() />
        <section class="not-found">
            <h1>"404 - Not Found"</h1>
            <p>"Nothing lives at " <code>{move || location.current_path()}</code> "."</p>
            <A href=CinemaRoute::Home>"Back to the home page"</A>
        </section>
    }
}
