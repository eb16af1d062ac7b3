use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One page of results plus the total number of matches on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub total_record_count: u32,
}

/// Release channel of a package (`Release`, `Beta`, `Dev`, ...).
///
/// The server sends either the bare string or an object with a single
/// string field wrapping it. Both decode to the same value, which compares
/// equal to the plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageVersionClass(String);

impl PackageVersionClass {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassRepr {
    Bare(String),
    Wrapped(BTreeMap<String, String>),
}

impl<'de> Deserialize<'de> for PackageVersionClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ClassRepr::deserialize(deserializer)? {
            ClassRepr::Bare(value) => Ok(Self(value)),
            ClassRepr::Wrapped(fields) => {
                let mut fields = fields.into_iter();
                match (fields.next(), fields.next()) {
                    (Some((_, value)), None) => Ok(Self(value)),
                    _ => Err(D::Error::custom(
                        "expected a string or an object with exactly one string field",
                    )),
                }
            }
        }
    }
}

impl fmt::Display for PackageVersionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageVersionClass {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PackageVersionClass {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for PackageVersionClass {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackageVersionClass {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<PackageVersionClass> for &str {
    fn eq(&self, other: &PackageVersionClass) -> bool {
        *self == other.0
    }
}
