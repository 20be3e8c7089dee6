use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reference-counted, immutable string for zero-cost cloning.
///
/// Target node and uniform names appear in every write command and get
/// cloned once per tick per timeline; wrapping `Arc<str>` makes that a
/// refcount bump instead of a heap allocation.
///
/// Implements `PartialEq<&str>` so assertions like
/// `assert_eq!(command.target(), "tear-overlay")` work naturally.
#[derive(Debug, Clone, Eq)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for SharedStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Same Arc pointer means equal without a scan.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl PartialEq<str> for SharedStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SharedStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::hash::Hash for SharedStr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl std::ops::Deref for SharedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for SharedStr {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedStr {
    #[inline]
    fn from(s: &str) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl From<String> for SharedStr {
    #[inline]
    fn from(s: String) -> Self {
        SharedStr(Arc::from(s.as_str()))
    }
}

impl std::fmt::Display for SharedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Hand-rolled serde to avoid serde's `rc` feature flag. Deserializes via an
// owned String so non-borrowing formats (TOML with escapes) work.

impl Serialize for SharedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SharedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SharedStr(Arc::from(s.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_same_content() {
        let a = SharedStr::from("hero-atoms");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(&*a, &*b);
    }

    #[test]
    fn eq_against_str() {
        let s = SharedStr::from("uProgress");
        assert_eq!(s, "uProgress");
        assert!(s != "uOpacity");
    }

    #[test]
    fn hashmap_lookup_by_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(SharedStr::from("galaxy-disk"), 1u32);
        assert_eq!(map.get("galaxy-disk"), Some(&1));
    }

    #[test]
    fn serde_roundtrip() {
        let s = SharedStr::from("tear-overlay");
        let json = serde_json::to_string(&s).unwrap_or_default();
        assert_eq!(json, "\"tear-overlay\"");
        let back: SharedStr = serde_json::from_str(&json).unwrap_or_else(|_| SharedStr::from(""));
        assert_eq!(back, s);
    }

    #[test]
    fn display() {
        let s = SharedStr::from("sphere-07");
        assert_eq!(format!("{s}"), "sphere-07");
    }
}
