//! Cinema listing site: route table, shared store, pages and bootstrap.

mod boot;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod route;
mod shell;
pub mod store;

pub use boot::boot;
pub use config::SiteConfig;
pub use error::{BootError, SeatError, UnknownClassification};
pub use route::{CinemaRoute, Page};
pub use shell::App;
pub use store::{SiteContext, SiteState};
