//! Remote location lookup for partial postcodes.
//!
//! The booking wizard's only external interface: given a partial postcode
//! string, ask a remote HTTP endpoint for matching `{postcode, area}`
//! candidates. Results are deduplicated by the (postcode, area) pair
//! before display.
//!
//! Lookup failures are surfaced to the caller as [`BookingError`] values
//! and shown inline; they are never fatal and nothing is retried
//! automatically.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::params::LookupQuery;

/// Default lookup endpoint.
pub const DEFAULT_LOOKUP_URL: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";

/// One location candidate returned by the lookup service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Candidate postcode
    pub postcode: String,
    /// Area name; may be absent in the response
    #[serde(default)]
    pub area: String,
}

/// Remove duplicate (postcode, area) pairs, preserving first-seen order.
pub fn dedup_locations(locations: Vec<Location>) -> Vec<Location> {
    let mut unique: Vec<Location> = Vec::with_capacity(locations.len());
    for location in locations {
        if !unique.contains(&location) {
            unique.push(location);
        }
    }
    unique
}

/// Seam for the remote location lookup service.
#[async_trait]
pub trait LocationLookup {
    /// Fetch location candidates for a partial postcode.
    ///
    /// Returned candidates are already deduplicated. Queries below the
    /// minimum length resolve to an empty list without touching the
    /// network.
    async fn search(&self, query: &LookupQuery) -> Result<Vec<Location>>;
}

/// HTTP implementation of the lookup seam.
pub struct HttpLocationLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLocationLookup {
    /// Create a client against the default endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_LOOKUP_URL)
    }

    /// Create a client against a custom endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpLocationLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationLookup for HttpLocationLookup {
    async fn search(&self, query: &LookupQuery) -> Result<Vec<Location>> {
        if !query.is_searchable() {
            return Ok(Vec::new());
        }

        let partial = query.partial.trim().to_uppercase();
        debug!("Location lookup for partial postcode {partial}");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("postcode", partial.as_str())])
            .send()
            .await
            .map_err(|e| BookingError::lookup("Failed to fetch location data").with_source(e))?;

        if !response.status().is_success() {
            return Err(BookingError::LookupStatus {
                status: response.status().as_u16(),
            });
        }

        let locations: Vec<Location> = response
            .json()
            .await
            .map_err(|e| BookingError::lookup("Failed to decode location data").with_source(e))?;

        Ok(dedup_locations(locations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(postcode: &str, area: &str) -> Location {
        Location {
            postcode: postcode.to_string(),
            area: area.to_string(),
        }
    }

    #[test]
    fn test_dedup_removes_repeated_pairs() {
        let results = dedup_locations(vec![
            loc("NR32 1AB", "Lowestoft"),
            loc("NR32 1AB", "Lowestoft"),
            loc("NR32 1AB", "Oulton Broad"),
            loc("NR33 0AA", "Lowestoft"),
            loc("NR32 1AB", "Lowestoft"),
        ]);

        assert_eq!(
            results,
            vec![
                loc("NR32 1AB", "Lowestoft"),
                loc("NR32 1AB", "Oulton Broad"),
                loc("NR33 0AA", "Lowestoft"),
            ]
        );
    }

    #[test]
    fn test_dedup_preserves_order() {
        let results = dedup_locations(vec![loc("B", ""), loc("A", ""), loc("B", "")]);
        assert_eq!(results, vec![loc("B", ""), loc("A", "")]);
    }

    #[test]
    fn test_short_queries_skip_the_network() {
        let lookup = HttpLocationLookup::with_base_url("http://127.0.0.1:1/unreachable");
        let query = LookupQuery::new("NR3");
        assert!(!query.is_searchable());

        let results = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(lookup.search(&query))
            .expect("short query must not error");
        assert!(results.is_empty());
    }

    #[test]
    fn test_unreachable_endpoint_surfaces_a_lookup_error() {
        // Port 1 refuses the connection, so this never leaves the host.
        let lookup = HttpLocationLookup::with_base_url("http://127.0.0.1:1/");
        let query = LookupQuery::new("NR32");
        assert!(query.is_searchable());

        let err = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(lookup.search(&query))
            .expect_err("unreachable endpoint must error");
        assert!(matches!(err, BookingError::Lookup { .. }));
        assert!(err.to_string().contains("Failed to fetch location data"));
    }

    #[test]
    fn test_location_area_defaults_to_empty() {
        let location: Location = serde_json::from_str(r#"{"postcode":"NR32 1AB"}"#).unwrap();
        assert_eq!(location.area, "");
    }
}
