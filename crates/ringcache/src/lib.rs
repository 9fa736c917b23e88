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

//! A fixed-capacity key/value cache with FIFO eviction over a circular slot array.
//!
//! The [`RingCache`] pre-allocates `capacity` slots at construction. Each insertion writes
//! into the slot under the cursor, reclaiming whatever key occupied it, then advances the
//! cursor by one. Eviction order is therefore strictly insertion order, and no allocation
//! happens after construction.
//!
//! # Examples
//!
//! ```
//! use ringcache::RingCache;
//!
//! let mut cache: RingCache<&str, u32> = RingCache::new(2).unwrap();
//! assert!(!cache.add("a", 1));
//! assert!(!cache.add("b", 2));
//!
//! // The oldest entry is reclaimed once the ring wraps
//! assert!(cache.add("c", 3));
//! assert!(!cache.contains("a"));
//! assert_eq!(cache.get("c"), Some(&3));
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.

pub mod config;
pub mod error;
pub mod ring;

pub use crate::{
    config::{RingCacheConfig, RingCacheConfigBuilder},
    error::RingCacheError,
    ring::{EvictCallback, RingCache},
};
