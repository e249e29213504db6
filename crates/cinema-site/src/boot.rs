use cinema_router::prelude::*;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::SiteConfig;
use crate::error::BootError;
use crate::route::CinemaRoute;
use crate::shell::App;

/// Validates the route table and mounts the application at the configured
/// element. Runs once per page load.
pub fn boot(config: SiteConfig) -> Result<(), BootError> {
    let table = CinemaRoute::table()?;
    log::debug!("routes: {:?}", table.paths());

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootError::NoWindow)?;
    let mount_id = config.mount_id.clone();
    let parent = document
        .get_element_by_id(&mount_id)
        .ok_or_else(|| BootError::MissingMountPoint(mount_id.clone()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootError::MountPointNotHtml(mount_id.clone()))?;

    log::info!("mounting at #{mount_id}");
    leptos::mount::mount_to(parent, move || view! { <App config=config /> }).forget();
    Ok(())
}
