use crate::{TIMESTAMP, value::Kind};
use std::fmt::{self, Display};

///
/// PropertyType
///
/// Registry descriptor for one property.
///
/// Single    → one declared type name.
/// Union     → member names in declaration order.
/// Model     → a nested model, by scope name.
/// Timestamp → refreshed with the current time on read.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PropertyType {
    Single(Kind),
    Union(Vec<Kind>),
    Model(String),
    Timestamp,
}

impl PropertyType {
    ///
    /// CONSTRUCTION
    ///

    /// Descriptor for a single type name; `timestamp` yields the sentinel.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == TIMESTAMP {
            Self::Timestamp
        } else {
            Self::Single(Kind::parse(name))
        }
    }

    pub fn union<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Union(
            names
                .into_iter()
                .map(|name| Kind::parse(name.as_ref()))
                .collect(),
        )
    }

    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    ///
    /// INSPECTION
    ///

    #[must_use]
    pub const fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    #[must_use]
    pub const fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp)
    }

    /// Equality for single descriptors, membership for unions.
    #[must_use]
    pub fn matches(&self, kind: &str) -> bool {
        match self {
            Self::Single(single) => single.name() == kind,
            Self::Union(members) => members.iter().any(|member| member.name() == kind),
            Self::Model(name) => name == kind,
            Self::Timestamp => kind == TIMESTAMP,
        }
    }

    /// Canonical text; union members are joined with `|`.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(kind) => f.write_str(kind.name()),
            Self::Union(members) => {
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str("|")?;
                    }
                    f.write_str(member.name())?;
                }
                Ok(())
            }
            Self::Model(name) => f.write_str(name),
            Self::Timestamp => f.write_str(TIMESTAMP),
        }
    }
}

///
/// CONVERSIONS
///

impl From<&str> for PropertyType {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<Kind> for PropertyType {
    fn from(kind: Kind) -> Self {
        Self::Single(kind)
    }
}

impl<const N: usize> From<[&str; N]> for PropertyType {
    fn from(names: [&str; N]) -> Self {
        Self::union(names)
    }
}

impl From<&[&str]> for PropertyType {
    fn from(names: &[&str]) -> Self {
        Self::union(names)
    }
}

impl From<Vec<&str>> for PropertyType {
    fn from(names: Vec<&str>) -> Self {
        Self::union(names)
    }
}

impl From<Vec<String>> for PropertyType {
    fn from(names: Vec<String>) -> Self {
        Self::union(names)
    }
}

///
/// TESTS
///
