//! Source fingerprint
//!
//! SHA-256 over a set of named resources (model files, layout files). Hot
//! reload compares fingerprints to skip rebuilding an unchanged model.

use std::fmt;

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub const PREFIX: &'static str = "sha256:";

    pub fn of_bytes(content: &[u8]) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, Sha256::digest(content)))
    }

    /// Combines `(name, content)` pairs; the result depends on both names
    /// and contents but not on iteration order.
    pub fn of_resources<'a, I>(resources: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let mut entries: Vec<(&str, String)> = resources
            .into_iter()
            .map(|(name, content)| (name, format!("{:x}", Sha256::digest(content))))
            .collect();
        entries.sort();

        let mut hasher = Sha256::new();
        for (name, digest) in entries {
            hasher.update(name.as_bytes());
            hasher.update([0]);
            hasher.update(digest.as_bytes());
            hasher.update([b'\n']);
        }
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
