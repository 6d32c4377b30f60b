//! Pure data structures: catalog entries, orders, and their snapshot form.

pub mod meal;
pub mod order;

pub use meal::*;
pub use order::*;
