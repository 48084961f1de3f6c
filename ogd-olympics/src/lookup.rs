use crate::country::Country;
use crate::store::DatasetStore;

/// Country resolution against the store's current value at call time.
/// A store holding `None` resolves nothing; misses are absent results,
/// not errors.
pub trait CountryLookup {
    fn find_by_id(&self, id: u32) -> Option<&Country>;
    /// Case-insensitive exact match on the country name.
    fn find_by_name(&self, name: &str) -> Option<&Country>;
}

impl CountryLookup for DatasetStore {
    fn find_by_id(&self, id: u32) -> Option<&Country> {
        self.current()?.iter().find(|country| country.id == id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Country> {
        let wanted = name.to_lowercase();
        self.current()?
            .iter()
            .find(|country| country.country.to_lowercase() == wanted)
    }
}
