//! Parse command - dry run of the .env parser.

use std::path::Path;

use crate::cli::{input, output};
use crate::core::env;
use crate::error::Result;

/// List the keys that `push` would write. Values are never printed.
pub fn execute(file: Option<&Path>, json: bool) -> Result<()> {
    let text = input::read_env(file)?;
    let secrets = env::parse(&text);
    let keys: Vec<&str> = secrets.keys().collect();

    if json {
        let doc = serde_json::json!({ "variables": keys });
        println!("{}", doc);
        return Ok(());
    }

    if keys.is_empty() {
        output::dimmed("no secrets found");
        return Ok(());
    }

    output::success(&format!("{} secrets would be pushed", keys.len()));
    for key in keys {
        output::list_item(key);
    }
    Ok(())
}
