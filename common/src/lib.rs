//! Beer Catalog Common Library
//!
//! CLIとWeb(WASM)で共有される型とコントローラ

pub mod types;
pub mod error;
pub mod edit;
pub mod store;
pub mod view;
pub mod controller;

pub use types::{Beer, BeerId, BeerPatch};
pub use error::{Cause, Error, Operation, Result};
pub use edit::{append_review, remove_review};
pub use store::{beer_url, beers_url, CatalogStore, DEFAULT_BASE_URL};
pub use view::{DetailView, ListEntry, ReviewEntry, ViewState, INITIAL_BEER_ID};
pub use controller::{CatalogController, UserAction};
