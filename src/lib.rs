pub mod auth;
pub mod config;
pub mod constant;
pub mod diagnostics;
pub mod error;
pub mod fixtures;
pub mod session;

pub use config::Config;
pub use error::TestError;
pub use session::TestSession;

pub mod prelude {
    pub use crate::{auth, constant, diagnostics, fixtures, Config, TestError, TestSession};
}
