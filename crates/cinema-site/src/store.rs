use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use reactive_stores::Store;

use crate::model::{seed_catalogue, seed_screens, Movie, Screen};

/// Data shared by every page for the lifetime of one application session.
#[derive(Store, Default, Debug)]
pub struct SiteState {
    pub movies: Vec<Movie>,
    pub screens: Vec<Screen>,
    /// Movie currently open on the details page, if any.
    pub selected_movie: Option<String>,
    pub last_path: String,
    pub navigations: u32,
}

impl SiteState {
    pub fn seeded() -> Self {
        Self {
            movies: seed_catalogue(),
            screens: seed_screens(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Handle to the session's single store. Created once by the shell and
/// handed to views through Leptos context.
#[derive(Clone, Copy)]
pub struct SiteContext {
    store: Store<SiteState>,
    session: SessionId,
}

impl fmt::Debug for SiteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteContext").field("session", &self.session).finish_non_exhaustive()
    }
}

impl SiteContext {
    pub fn new(state: SiteState) -> Self {
        Self {
            store: Store::new(state),
            session: SessionId(NEXT_SESSION.fetch_add(1, Ordering::Relaxed)),
        }
    }

    /// Creates the context and provides it to the current reactive owner.
    pub fn provide(state: SiteState) -> Self {
        let ctx = Self::new(state);
        log::debug!("providing site store for session {:?}", ctx.session);
        provide_context(ctx);
        ctx
    }

    pub fn use_context() -> Option<Self> {
        use_context::<Self>()
    }

    pub fn expect_context() -> Self {
        expect_context::<Self>()
    }

    pub fn store(&self) -> Store<SiteState> {
        self.store
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn find_movie(&self, id: &str) -> Option<Movie> {
        self.store
            .movies()
            .with(|movies| movies.iter().find(|m| m.id == id).cloned())
    }

    pub fn new_releases(&self) -> Vec<Movie> {
        self.store
            .movies()
            .with(|movies| movies.iter().filter(|m| m.new_release).cloned().collect())
    }

    pub fn select_movie(&self, id: Option<String>) {
        if self.store.selected_movie().with_untracked(|current| *current != id) {
            self.store.selected_movie().set(id);
        }
    }

    pub fn record_navigation(&self, path: String) {
        log::debug!("session {:?} at {path}", self.session);
        self.store.last_path().set(path);
        self.store.navigations().update(|n| *n += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_distinct() {
        let a = SiteContext::new(SiteState::default());
        let b = SiteContext::new(SiteState::default());
        assert_ne!(a.session(), b.session());
    }

    #[test]
    fn seeded_state_finds_movies() {
        let ctx = SiteContext::new(SiteState::seeded());
        assert_eq!(ctx.find_movie("2").map(|m| m.title), Some("Harbour Lights".into()));
        assert!(ctx.find_movie("999").is_none());
        assert!(ctx.new_releases().iter().all(|m| m.new_release));
    }

    #[test]
    fn selection_and_navigation_are_recorded() {
        let ctx = SiteContext::new(SiteState::seeded());
        ctx.select_movie(Some("3".into()));
        ctx.record_navigation("/movie/3".into());
        ctx.record_navigation("/cinemas".into());

        let store = ctx.store();
        assert_eq!(store.selected_movie().get_untracked(), Some("3".into()));
        assert_eq!(store.last_path().get_untracked(), "/cinemas");
        assert_eq!(store.navigations().get_untracked(), 2);
    }
}
