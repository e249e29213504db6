use cinema_router::prelude::*;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Router, A};
use leptos_router::hooks::use_location;

use crate::config::SiteConfig;
use crate::route::CinemaRoute;
use crate::store::{SiteContext, SiteState};

/// Top-level container: owns the session store and hosts the routed view.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    let ctx = SiteContext::provide(SiteState::seeded());
    log::info!("site session {:?} started", ctx.session());
    let title = config.title;

    view! {
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Title formatter=move |page: String| format!("{page} | {title}") />

        <Router>
            <NavigationLog />
            <nav class="site-nav">
                <A href=CinemaRoute::Home>"Home"</A>
                <A href=CinemaRoute::NewReleases>"New releases"</A>
                <A href=CinemaRoute::MovieList>"Movies"</A>
                <A href=CinemaRoute::Cinemas>"Cinemas"</A>
                <A href=CinemaRoute::Classifications>"Classifications"</A>
                <A href=CinemaRoute::AboutUs>"About us"</A>
            </nav>
            <main>{CinemaRoute::routes()}</main>
        </Router>
    }
}

/// Records every location change in the session store.
#[component]
fn NavigationLog() -> impl IntoView {
    let ctx = SiteContext::expect_context();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.current_path();
        let route = CinemaRoute::from(path.as_str());
        log::debug!("{path} -> {:?}", route.page());
        ctx.record_navigation(path);
    });
}
