//! Line-oriented menu over the catalog.

mod helpers;
mod menu;
mod session;

pub use menu::{KeyKind, MenuChoice};
pub use session::Session;
