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

use iai::black_box;
use ringcache::RingCache;

fn filled(capacity: usize) -> RingCache<u64, u64> {
    let mut cache = RingCache::new(capacity).unwrap();
    for i in 0..capacity as u64 {
        cache.add(i, i);
    }
    cache
}

fn bench_new() {
    black_box(RingCache::<u64, u64>::new(1024)).unwrap();
}

fn bench_fill_1024() {
    black_box(filled(1024));
}

fn bench_add_evicting() {
    let mut cache = filled(64);
    for i in 64..128u64 {
        black_box(cache.add(i, i));
    }
}

fn bench_get() {
    let cache = filled(64);
    for i in 0..64u64 {
        black_box(cache.get(&i));
    }
}

fn bench_remove() {
    let mut cache = filled(64);
    for i in 0..64u64 {
        black_box(cache.remove(&i));
    }
}

fn bench_purge() {
    let mut cache = filled(1024);
    cache.purge();
    black_box(cache);
}

iai::main!(
    bench_new,
    bench_fill_1024,
    bench_add_evicting,
    bench_get,
    bench_remove,
    bench_purge,
);
