use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier selecting the inter-particle force formula.
///
/// Kept opaque: the formulas live in the simulation backends, which agree on
/// identifiers like `"1"`. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForceFunction(Cow<'static, str>);

impl ForceFunction {
    /// Usable in `const` items
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric form of the identifier, when it is one.
    /// Shaders switch on this value.
    pub fn index(&self) -> Option<u32> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for ForceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ForceFunction {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
