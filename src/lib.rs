//! Sealenv - bulk-provision .env secrets into GitHub Actions.
//!
//! Secrets are sealed to the repository's (or its organization's) public
//! key before they leave the process, so plaintext is never transmitted.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── push          # Sync a .env file to a repository
//! │   ├── parse         # Dry run: list keys that would be pushed
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .sealenv.toml and run settings
//!     ├── env           # .env parser state machine
//!     ├── cipher/       # Sealed box encryption
//!     ├── remote/       # Secret store trait and GitHub client
//!     ├── discovery     # Repository/organization public key lookup
//!     ├── push          # Single secret writes
//!     ├── sync          # Run orchestration and reporting
//!     └── domain/       # Resource, keys, outcomes, reports
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sealenv::core::config::Settings;
//! use sealenv::core::remote::GitHubClient;
//! use sealenv::core::sync::Syncer;
//!
//! # async fn run() -> sealenv::error::Result<()> {
//! let client = GitHubClient::new("ghp_example", &Settings::default())?;
//! let resource = "acme/api".parse()?;
//! let report = Syncer::new(client).run(&resource, "API_KEY=secret\n").await?;
//! assert!(report.overall_success());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
