pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod seed;

pub use config::*;
pub use directory::*;
pub use error::*;
pub use models::*;
