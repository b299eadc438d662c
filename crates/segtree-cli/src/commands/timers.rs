// Dweve SegTree - Segment Tree Benchmark Suite
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Timers command - lists timer backends.

use crate::error::CliError;
use segtree_bench::timer_availability;

/// Formats one line per backend with its availability.
pub fn format_timers() -> String {
    timer_availability()
        .into_iter()
        .map(|(kind, status)| match status {
            Ok(()) => format!("{:<16} available", kind.as_str()),
            Err(reason) => format!("{:<16} unavailable ({})", kind.as_str(), reason),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the timer backends.
pub fn timers() -> Result<(), CliError> {
    println!("{}", format_timers());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_backend() {
        let text = format_timers();
        for name in ["monotonic", "high-resolution", "tsc", "tick"] {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(text.lines().next().unwrap().ends_with("available"));
    }
}
