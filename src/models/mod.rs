//! Front-end data models.
//!
//! - [`Route`] - hash-based navigation between the overview and modules

mod route;

pub use route::Route;
