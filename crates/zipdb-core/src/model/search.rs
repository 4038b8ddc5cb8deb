// crates/zipdb-core/src/model/search.rs
use crate::common::DbStats;
use crate::error::{Result, ZipError};
use crate::geo::{haversine_miles, BoundingBox, SearchPoint};
use crate::model::record::{ZipDb, ZipRecord};
use crate::text::fold_key;
use crate::traits::{NameMatch, ZipBackend};

/// Checks that a zip code (or zip-code prefix) is a string of 1 to 5
/// ASCII digits. Five digits bound the value at 99999 by construction.
fn validate_code(code: &str) -> Result<()> {
    if code.is_empty() || code.len() > 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ZipError::InvalidCode(code.to_owned()));
    }
    Ok(())
}

impl<B: ZipBackend> ZipDb<B> {
    /// Read-only slice of all records, in store order.
    pub fn records(&self) -> &[ZipRecord<B>] {
        &self.records
    }

    /// Aggregate statistics for the database.
    pub fn stats(&self) -> DbStats {
        DbStats {
            records: self.records.len(),
            decommissioned: self.records.iter().filter(|r| r.decommissioned).count(),
            with_location: self
                .records
                .iter()
                .filter(|r| r.coordinates().is_some())
                .count(),
        }
    }

    /// Look up the record for exactly this zip code.
    ///
    /// An absent code is `Ok(None)`, a normal outcome; only a malformed
    /// code is an error.
    pub fn find_exact(&self, code: &str) -> Result<Option<&ZipRecord<B>>> {
        validate_code(code)?;
        // Linear scan over the flat record vector; the table is small
        // enough that no key index is warranted.
        Ok(self.records.iter().find(|r| r.code.as_ref() == code))
    }

    /// All records whose zip code starts with the given digits.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<&ZipRecord<B>>> {
        validate_code(prefix)?;
        Ok(self
            .records
            .iter()
            .filter(|r| r.code.as_ref().starts_with(prefix))
            .collect())
    }

    /// All records served by an area code containing the given fragment.
    ///
    /// The fragment is matched against each area code individually, so
    /// `"216"` matches a record listing `419,216` but `"9,5"` matches
    /// nothing.
    pub fn find_by_area_code(&self, fragment: &str) -> Vec<&ZipRecord<B>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|r| r.area_codes.iter().any(|ac| ac.contains(fragment)))
            .collect()
    }

    /// All records whose county name *loosely matches* the given substring
    /// (case-insensitive, accent-insensitive, via [`fold_key`]).
    pub fn find_by_county(&self, county: &str) -> Vec<&ZipRecord<B>> {
        let q = fold_key(county);
        if q.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|r| fold_key(r.county()).contains(&q))
            .collect()
    }

    /// All records matching a city name within a state.
    ///
    /// Both predicates are folded substring matches; an empty `state`
    /// fragment matches every state. With `include_secondary`, a match in
    /// any of the record's acceptable city names also qualifies (logical
    /// OR with the primary-city match).
    pub fn find_by_city(
        &self,
        city: &str,
        state: &str,
        include_secondary: bool,
    ) -> Vec<&ZipRecord<B>> {
        let q_city = fold_key(city);
        if q_city.is_empty() {
            return Vec::new();
        }
        let q_state = fold_key(state);

        self.records
            .iter()
            .filter(|r| {
                if !fold_key(r.state()).contains(&q_state) {
                    return false;
                }
                if r.name_contains(city) {
                    return true;
                }
                include_secondary
                    && r.secondary_cities
                        .iter()
                        .any(|c| fold_key(c).contains(&q_city))
            })
            .collect()
    }

    /// The store's rectangle predicate: records whose coordinates fall
    /// strictly inside the box. Records without coordinates never match.
    pub fn records_in_box<'a, 'b>(
        &'a self,
        bbox: &'b BoundingBox,
    ) -> impl Iterator<Item = &'a ZipRecord<B>> + 'b
    where
        'a: 'b,
    {
        self.records.iter().filter(move |r| match r.coordinates() {
            Some((lat, lng)) => bbox.contains_strict(lat, lng),
            None => false,
        })
    }

    /// All records within `distance_miles` of `center`, in store order.
    ///
    /// Two-phase filter: a bounding rectangle narrows the candidate set
    /// cheaply, then each candidate is checked against the exact
    /// great-circle distance (inclusive bound). Results are not sorted by
    /// distance; callers needing nearest-first ordering sort client-side.
    ///
    /// A zero distance always yields an empty result: the rectangle
    /// collapses to an empty open interval, which excludes even a record
    /// stored at exactly `center`.
    pub fn find_within_radius(
        &self,
        center: SearchPoint,
        distance_miles: f64,
    ) -> Result<Vec<&ZipRecord<B>>> {
        if !distance_miles.is_finite() || distance_miles < 0.0 {
            return Err(ZipError::InvalidDistance(distance_miles));
        }

        let bbox = BoundingBox::around(center, distance_miles);

        Ok(self
            .records_in_box(&bbox)
            .filter(|r| match r.coordinates() {
                Some((lat, lng)) => {
                    let there = SearchPoint::new_unchecked(lat, lng);
                    haversine_miles(center, there) <= distance_miles
                }
                None => false,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::validate_code;

    #[test]
    fn code_validation() {
        assert!(validate_code("44102").is_ok());
        assert!(validate_code("4").is_ok());
        assert!(validate_code("").is_err());
        assert!(validate_code("441021").is_err());
        assert!(validate_code("4410a").is_err());
        assert!(validate_code("-4410").is_err());
        assert!(validate_code(" 4410").is_err());
    }
}
