//! Upstream IT and NX domain data

mod collection;
mod item;

pub use collection::{load_collection, Collection, DomainCollections};
pub use item::{render_value, DomainItem};
