//! Domain models shared across the collection controller.

pub mod page;
pub mod record;
