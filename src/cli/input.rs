//! Reading .env input and the credential.

use std::io::{IsTerminal, Read};
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{InputError, Result};

/// Read .env text from `file`, or from stdin when `file` is `None`.
///
/// # Errors
///
/// Returns `InputError::ReadFile` if the input cannot be read.
pub fn read_env(file: Option<&Path>) -> Result<Zeroizing<String>> {
    let mut text = Zeroizing::new(String::new());

    match file {
        Some(path) => {
            debug!(path = %path.display(), "reading env file");
            std::fs::File::open(path)
                .and_then(|mut f| f.read_to_string(&mut text))
                .map_err(|source| InputError::ReadFile {
                    path: path.display().to_string(),
                    source,
                })?;
        }
        None => {
            debug!("reading env from stdin");
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| InputError::ReadFile {
                    path: "<stdin>".to_string(),
                    source,
                })?;
        }
    }

    Ok(text)
}

/// Resolve the credential.
///
/// Uses `flag` (which clap already fills from `SEALENV_TOKEN`), then
/// `GITHUB_TOKEN`. When neither is set and `can_prompt` is true, asks on the
/// terminal with hidden input.
///
/// # Errors
///
/// Returns `InputError::MissingToken` if no credential is available.
pub fn resolve_token(flag: Option<String>, can_prompt: bool) -> Result<Zeroizing<String>> {
    let fallback = std::env::var(constants::FALLBACK_TOKEN_ENV).ok();

    if let Some(token) = pick_token(flag, fallback) {
        return Ok(token);
    }

    if can_prompt && std::io::stdin().is_terminal() {
        let token = dialoguer::Password::new()
            .with_prompt("GitHub token")
            .interact()
            .map_err(|e| InputError::Prompt(e.to_string()))?;
        if !token.trim().is_empty() {
            return Ok(Zeroizing::new(token));
        }
    }

    Err(InputError::MissingToken.into())
}

/// First non-blank candidate.
fn pick_token(flag: Option<String>, fallback: Option<String>) -> Option<Zeroizing<String>> {
    [flag, fallback]
        .into_iter()
        .flatten()
        .find(|t| !t.trim().is_empty())
        .map(Zeroizing::new)
}
