// Service exports
pub mod search;
pub mod store;

pub use search::{SearchError, SearchService};
pub use store::{CycleTicket, SearchSnapshot, SearchStatus, SearchStore};
