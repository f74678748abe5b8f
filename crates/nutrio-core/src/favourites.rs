//! # Favourites
//!
//! The favourites list as it lives in device settings: a JSON array of
//! product ids under a single key.
//!
//! ## Toggle Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Per-id state machine                                 │
//! │                                                                         │
//! │                 toggle(id)                                              │
//! │      ┌────────┐ ─────────────► ┌─────────┐                              │
//! │      │ absent │                │ present │                              │
//! │      └────────┘ ◄───────────── └─────────┘                              │
//! │                 toggle(id)                                              │
//! │                                                                         │
//! │  present → remove first occurrence (order of the rest is kept)          │
//! │  absent  → append at the end                                            │
//! │                                                                         │
//! │  There is no add/remove. Check `contains` first if you need one.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Encoding
//! `["id-1","id-2"]`, compact, no trailing whitespace. The same encoding the
//! first release of the app wrote, so existing installs keep their lists.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Ordered list of favourite product ids.
///
/// The list never contains the same id twice as long as it is only mutated
/// through [`FavouriteIds::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavouriteIds(Vec<String>);

impl FavouriteIds {
    /// Creates an empty list.
    pub fn new() -> Self {
        FavouriteIds(Vec::new())
    }

    /// Decodes a persisted value.
    ///
    /// ## Returns
    /// * `Ok(FavouriteIds)` - value was a JSON array of strings
    /// * `Err(CoreError::Decode)` - anything else
    pub fn decode(raw: &str) -> CoreResult<Self> {
        serde_json::from_str::<Vec<String>>(raw)
            .map(FavouriteIds)
            .map_err(CoreError::Decode)
    }

    /// Encodes the list for storage.
    pub fn encode(&self) -> CoreResult<String> {
        serde_json::to_string(&self.0).map_err(CoreError::Encode)
    }

    /// Exact-match membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    /// Flips membership of `id`.
    ///
    /// ## Returns
    /// `true` if `id` is a favourite after the call, `false` if it was removed.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.0.iter().position(|existing| existing == id) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(id.to_string());
                true
            }
        }
    }

    /// Consumes the list, returning the ids in stored order.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Number of favourites.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no favourites.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EMPTY_FAVOURITES;

    fn ids(values: &[&str]) -> FavouriteIds {
        FavouriteIds(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_default_value_decodes_to_empty() {
        let decoded = FavouriteIds::decode(EMPTY_FAVOURITES).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_keeps_order() {
        let decoded = FavouriteIds::decode(r#"["b","a","c"]"#).unwrap();
        assert_eq!(decoded, ids(&["b", "a", "c"]));
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        for raw in ["not json", "", "null", "{}", r#"{"a":1}"#, "[1,2]", r#""p-1""#, "[\"a\""] {
            assert!(
                matches!(FavouriteIds::decode(raw), Err(CoreError::Decode(_))),
                "expected decode failure for {raw:?}"
            );
        }
    }

    #[test]
    fn test_encode_is_compact_json_array() {
        assert_eq!(ids(&["p-1", "p-2"]).encode().unwrap(), r#"["p-1","p-2"]"#);
        assert_eq!(FavouriteIds::new().encode().unwrap(), EMPTY_FAVOURITES);
    }

    #[test]
    fn test_encode_escapes_ids() {
        let list = ids(&["a\"b", "молоко"]);
        let encoded = list.encode().unwrap();
        assert_eq!(FavouriteIds::decode(&encoded).unwrap(), list);
    }

    #[test]
    fn test_toggle_appends_absent_id() {
        let mut list = ids(&["a"]);
        assert!(list.toggle("b"));
        assert_eq!(list, ids(&["a", "b"]));
    }

    #[test]
    fn test_toggle_removes_present_id_and_keeps_order() {
        let mut list = ids(&["a", "b", "c"]);
        assert!(!list.toggle("b"));
        assert_eq!(list, ids(&["a", "c"]));
    }

    #[test]
    fn test_toggle_matches_exactly() {
        let mut list = ids(&["Milk"]);
        assert!(list.toggle("milk"));
        assert!(list.toggle(" Milk"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_toggle_removes_only_first_of_foreign_duplicates() {
        // Lists written by something other than toggle may hold duplicates.
        let mut list = ids(&["a", "b", "a"]);
        list.toggle("a");
        assert_eq!(list, ids(&["b", "a"]));
    }

    #[test]
    fn test_membership_follows_parity() {
        let mut list = FavouriteIds::new();
        for n in 1..=9 {
            list.toggle("x");
            assert_eq!(list.contains("x"), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut list = ids(&["a", "b"]);
        for id in ["a", "c", "c", "b", "c", "a", "a"] {
            list.toggle(id);
            for candidate in ["a", "b", "c"] {
                let count = list.0.iter().filter(|v| *v == candidate).count();
                assert!(count <= 1, "{candidate} appears {count} times");
            }
        }
    }
}
