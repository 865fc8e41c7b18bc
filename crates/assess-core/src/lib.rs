pub mod config;
pub mod error;
pub mod form;
pub mod io;
pub mod paths;
pub mod persist;
pub mod profile;
pub mod progress;
pub mod session;
pub mod store;
pub mod sync;
pub mod types;

pub use error::{AssessError, Result};
