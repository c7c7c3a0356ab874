pub mod events;
pub mod summary;
pub mod terms;
