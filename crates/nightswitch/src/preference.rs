//! Typed view over the stored preference.

use crate::store::{PreferenceStore, StoreError, DARK_MODE_KEY};

/// The user's recorded theme choice, in its plain reading.
///
/// The wire encoding is the store's literal strings: `"true"` for dark,
/// `"false"` for light. Values outside those two read as no preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// Dark mode was last active (`"true"` on the wire).
    Dark,
    /// Light mode was last active (`"false"` on the wire).
    Light,
}

impl Preference {
    /// The string stored for this preference.
    pub fn as_store_value(self) -> &'static str {
        match self {
            Preference::Dark => "true",
            Preference::Light => "false",
        }
    }

    /// Parses a stored string; unrecognized values are `None`.
    pub fn from_store_value(value: &str) -> Option<Self> {
        match value {
            "true" => Some(Preference::Dark),
            "false" => Some(Preference::Light),
            _ => None,
        }
    }

    /// Reads the preference from a store. `Ok(None)` means unset or
    /// unrecognized.
    pub fn load(store: &dyn PreferenceStore) -> Result<Option<Self>, StoreError> {
        Ok(store
            .get(DARK_MODE_KEY)?
            .as_deref()
            .and_then(Self::from_store_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn wire_values_round_trip() {
        assert_eq!(
            Preference::from_store_value(Preference::Dark.as_store_value()),
            Some(Preference::Dark)
        );
        assert_eq!(
            Preference::from_store_value(Preference::Light.as_store_value()),
            Some(Preference::Light)
        );
    }

    #[test]
    fn unrecognized_values_read_as_unset() {
        assert_eq!(Preference::from_store_value("maybe"), None);
        assert_eq!(Preference::from_store_value(""), None);
        assert_eq!(Preference::from_store_value("TRUE"), None);
    }

    #[test]
    fn load_reads_the_store() {
        let store = MemoryStore::with_entry(DARK_MODE_KEY, "true");
        assert_eq!(Preference::load(&store).unwrap(), Some(Preference::Dark));

        let empty = MemoryStore::new();
        assert_eq!(Preference::load(&empty).unwrap(), None);
    }
}
