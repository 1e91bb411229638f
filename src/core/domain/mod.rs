//! Domain types.

mod env;
mod key;
mod outcome;
mod report;
mod resource;
mod run_result;

pub use env::SecretMap;
pub use key::{PublicKeyInfo, Scope};
pub use outcome::PushOutcome;
pub use report::{Failure, SyncReport};
pub use resource::Resource;
pub use run_result::RunResult;
