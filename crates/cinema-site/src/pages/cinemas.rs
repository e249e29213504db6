use leptos::prelude::*;
use leptos_meta::Title;

use crate::route::Page;
use crate::store::{SiteContext, SiteStateStoreFields};

#[component]
pub fn CinemasPage() -> impl IntoView {
    let ctx = SiteContext::expect_context();

    view! {
        <Title text=Page::Cinemas.title() />
        <section class="cinemas">
            <h1>"Our cinemas"</h1>
            <table>
                <thead>
                    <tr><th>"Screen"</th><th>"Booked"</th><th>"Seats"</th></tr>
                </thead>
                <tbody>
                    {move || ctx.store().screens().get()
                        .into_iter()
                        .map(|screen| view! {
                            <tr>
                                <td>{screen.name.clone()}</td>
                                <td>{screen.booked_count()}</td>
                                <td>{screen.seat_count()}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
