use leptos::prelude::Get;
use leptos_router::{location::Location, NavigateOptions};

/// Anything that can be turned into an absolute in-app path.
pub trait IntoPath {
    fn into_path(self) -> String;
}

impl IntoPath for &str {
    fn into_path(self) -> String {
        self.to_string()
    }
}

impl IntoPath for String {
    fn into_path(self) -> String {
        self
    }
}

/// Lets the closure returned by `use_navigate` accept typed routes.
pub trait NavigateExt: Fn(&str, NavigateOptions) {
    fn navigate<P: IntoPath>(&self, pathlike: P) {
        let path = pathlike.into_path();
        log::debug!("navigating to {path}");
        (self)(&path, NavigateOptions::default());
    }

    fn navigate_with_options<P: IntoPath>(&self, pathlike: P, options: NavigateOptions) {
        (self)(&pathlike.into_path(), options);
    }
}

impl<F> NavigateExt for F where F: Fn(&str, NavigateOptions) {}

pub trait LocationExt {
    /// Tracked read of the current pathname.
    fn current_path(&self) -> String;
}

impl LocationExt for Location {
    fn current_path(&self) -> String {
        self.pathname.get()
    }
}
