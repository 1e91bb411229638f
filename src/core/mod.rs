//! Core library components.
//!
//! This module contains the reusable logic for parsing .env input, sealing
//! secrets and writing them to the remote secret store.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod domain;
pub mod env;
pub mod push;
pub mod remote;
pub mod sync;
pub mod types;
pub mod validation;
