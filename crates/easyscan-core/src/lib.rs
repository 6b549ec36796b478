//! easyscan-core: Shared types, syntax model, traits, and errors for easyscan.

pub mod config;
pub mod error;
pub mod syntax;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::*;
pub use syntax::*;
pub use traits::*;
pub use types::*;
