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

//! Error types for the ring cache.

/// Errors raised when constructing a [`RingCache`](crate::RingCache).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingCacheError {
    /// The requested capacity was zero or negative.
    #[error("invalid capacity {capacity}: must be greater than zero")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: i64,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "invalid capacity 0: must be greater than zero")]
    #[case(-5, "invalid capacity -5: must be greater than zero")]
    fn test_invalid_capacity_display(#[case] capacity: i64, #[case] expected: &str) {
        let err = RingCacheError::InvalidCapacity { capacity };
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn test_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<RingCacheError>();
    }

    #[rstest]
    fn test_converts_into_anyhow() {
        let result: anyhow::Result<()> = Err(RingCacheError::InvalidCapacity { capacity: 0 }.into());
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<RingCacheError>(),
            Some(&RingCacheError::InvalidCapacity { capacity: 0 })
        );
    }
}
