pub mod creation;
pub mod dispose;
pub mod layout;
pub mod query;
pub mod snap;
pub mod transform;
