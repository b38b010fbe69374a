use std::fmt;

/// Upper bound on identifier length in characters, matching the
/// `VARCHAR(255)` width of the `user_name` column.
pub const MAX_IDENTIFIER_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier(s.to_owned())
    }
}

/// The stored association between a username and the URL it unlocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub identifier: Identifier,
    pub destination: String,
}

impl CredentialRecord {
    pub fn new(identifier: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            identifier: Identifier(identifier.into()),
            destination: destination.into(),
        }
    }
}
