use leptos::prelude::*;
use leptos_meta::Title;

use crate::route::Page;

#[component]
pub fn AboutUsPage() -> impl IntoView {
    view! {
        <Title text=Page::AboutUs.title() />
        <section class="about-us">
            <h1>"About us"</h1>
            <p>"An independent cinema showing new releases and old favourites on three screens."</p>
        </section>
    }
}
