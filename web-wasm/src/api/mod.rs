pub mod store;

pub use store::FetchStore;
