use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::model::Classification;
use crate::route::{CinemaRoute, Page};

#[component]
pub fn ClassificationsPage() -> impl IntoView {
    view! {
        <Title text=Page::Classifications.title() />
        <section class="classifications">
            <h1>"Classifications"</h1>
            <dl>
                {Classification::ALL
                    .into_iter()
                    .map(|c| {
                        let href =
                            format!("{}?classification={}", CinemaRoute::MovieList, c.slug());
                        view! {
                            <dt><A href=href>{c.code()}</A></dt>
                            <dd>{c.description()}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}
