//! Resource identifier.

use std::fmt;
use std::str::FromStr;

use crate::core::validation;
use crate::error::{Error, InputError};

/// A repository written as `owner/name`.
///
/// The owner doubles as the organization used for organization-scoped
/// public keys and secrets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    owner: String,
    name: String,
}

impl Resource {
    /// Owner segment
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository segment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Organization this resource belongs to.
    pub fn organization(&self) -> &str {
        &self.owner
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| InputError::InvalidResource {
                resource: s.to_string(),
                reason: "expected owner/name".to_string(),
            })?;

        if name.contains('/') {
            return Err(InputError::InvalidResource {
                resource: s.to_string(),
                reason: "expected exactly one '/'".to_string(),
            }
            .into());
        }

        validation::validate_segment(s, owner, "owner")?;
        validation::validate_segment(s, name, "name")?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
