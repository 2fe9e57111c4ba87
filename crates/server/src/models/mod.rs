//! Domain types, separate from database row types.

pub mod admin;
pub mod portfolio;
pub mod toolkit;

pub use admin::{Admin, AdminProfile};
pub use portfolio::Portfolio;
pub use toolkit::Toolkit;
