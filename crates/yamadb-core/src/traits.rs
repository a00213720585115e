// crates/yamadb-core/src/traits.rs

use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the peak database.
///
/// This abstraction controls how textual and floating-point data are stored
/// internally (for example to swap in more compact types later) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and the associated
/// types must be serializable so databases can be cached via bincode.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;

    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Convenient alias used in examples.
pub type StandardBackend = DefaultBackend;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Centralizes Unicode-aware, accent- and case-insensitive comparisons based
/// on [`fold_key`]. Implementors provide a `&str` view of their canonical
/// name via [`NameMatch::name_str`].
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Equality on folded form.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Substring match on folded form.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);
    impl NameMatch for Named {
        fn name_str(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn name_match_folds() {
        assert!(Named("Hotaka-dake").is_named("hotaka-dake"));
        assert!(Named("Mt. Asahi").name_contains("asahi"));
        assert!(!Named("Mt. Asahi").name_contains("fuji"));
    }
}
