use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// An email address accepted by the capture dialog. Records in the store are
/// keyed by this; there is no separate account or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(String);

impl Identity {
    /// Shape check only: one `@` with a non-empty local part, and a domain
    /// containing at least one `.` with non-empty segments. No whitespace
    /// anywhere. Deliverability is not our problem.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(IdentityError::InvalidFormat);
        }

        let Some((local, domain)) = raw.split_once('@') else {
            return Err(IdentityError::InvalidFormat);
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(IdentityError::InvalidFormat);
        }

        let Some((host, tld)) = domain.rsplit_once('.') else {
            return Err(IdentityError::InvalidFormat);
        };
        if host.is_empty() || tld.is_empty() {
            return Err(IdentityError::InvalidFormat);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
