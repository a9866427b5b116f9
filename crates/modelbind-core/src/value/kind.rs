use std::fmt::{self, Display};

///
/// Kind
///
/// One declared type name. Primitive names map to their own variant; the
/// empty name is the untyped kind; any other name is kept verbatim.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Mixed,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
    Null,
    Named(String),
}

impl Kind {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "" => Self::Mixed,
            "bool" => Self::Bool,
            "int" => Self::Int,
            "float" => Self::Float,
            "string" => Self::String,
            "array" => Self::Array,
            "object" => Self::Object,
            "null" => Self::Null,
            other => Self::Named(other.to_string()),
        }
    }

    /// Canonical type name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Mixed => "",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
            Self::Named(name) => name,
        }
    }

    /// Returns true for the kinds the registry coerces values into.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Float | Self::String)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}
