// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Configuration for constructing a [`RingCache`](crate::RingCache).
//!
//! The configuration is usually loaded from JSON supplied by the host application:
//!
//! ```json
//! { "capacity": 1024, "log_evictions": true }
//! ```
//!
//! | Field           | Type   | Default  | Description                                  |
//! |-----------------|--------|----------|----------------------------------------------|
//! | `capacity`      | `i64`  | required | Number of slots in the ring, must be > 0.    |
//! | `log_evictions` | `bool` | `false`  | Emit a `trace!` record for every eviction.   |
//!
//! Capacity is signed here because this is the boundary where untrusted input arrives.
//! Zero and negative values are rejected by
//! [`RingCache::from_config`](crate::RingCache::from_config).

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a [`RingCache`](crate::RingCache).
///
/// # Examples
///
/// ```
/// use ringcache::RingCacheConfigBuilder;
///
/// let config = RingCacheConfigBuilder::default()
///     .capacity(16)
///     .log_evictions(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.capacity, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct RingCacheConfig {
    /// The fixed number of slots in the ring.
    pub capacity: i64,
    /// If each eviction should be logged at `trace` level.
    #[serde(default)]
    #[builder(default)]
    pub log_evictions: bool,
}

impl RingCacheConfig {
    /// Creates a new [`RingCacheConfig`] instance with eviction logging disabled.
    #[must_use]
    pub const fn new(capacity: i64) -> Self {
        Self {
            capacity,
            log_evictions: false,
        }
    }

    /// Parses a configuration from a JSON string.
    ///
    /// The capacity is not validated here, only when the cache is constructed.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed or is missing the `capacity` field.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new_disables_eviction_logging() {
        let config = RingCacheConfig::new(8);
        assert_eq!(config.capacity, 8);
        assert!(!config.log_evictions);
    }

    #[rstest]
    #[case(r#"{"capacity": 3}"#, RingCacheConfig::new(3))]
    #[case(r#"{"capacity": -5}"#, RingCacheConfig::new(-5))]
    #[case(
        r#"{"capacity": 10, "log_evictions": true}"#,
        RingCacheConfig { capacity: 10, log_evictions: true }
    )]
    fn test_from_json(#[case] json: &str, #[case] expected: RingCacheConfig) {
        assert_eq!(RingCacheConfig::from_json(json).unwrap(), expected);
    }

    #[rstest]
    #[case(r#"{}"#)]
    #[case(r#"{"capacity": "ten"}"#)]
    #[case("not json")]
    fn test_from_json_invalid(#[case] json: &str) {
        assert!(RingCacheConfig::from_json(json).is_err());
    }

    #[rstest]
    fn test_json_round_trip_preserves_fields() {
        let config = RingCacheConfig {
            capacity: 42,
            log_evictions: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RingCacheConfig::from_json(&json).unwrap(), config);
    }

    #[rstest]
    fn test_builder_defaults_log_evictions() {
        let config = RingCacheConfigBuilder::default()
            .capacity(4)
            .build()
            .unwrap();
        assert_eq!(config, RingCacheConfig::new(4));
    }

    #[rstest]
    fn test_builder_requires_capacity() {
        assert!(RingCacheConfigBuilder::default().build().is_err());
    }
}
