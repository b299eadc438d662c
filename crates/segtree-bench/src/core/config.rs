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

//! Centralized benchmark configuration.
//!
//! Provides standardized configuration for benchmark execution including
//! domain sizes, size sweeps, trial counts, modes and timer selection.
//! Configurations can be built in code or loaded from a JSON file.

use crate::error::{BenchError, Result};
use crate::timer::{TimerKind, DEFAULT_CALIBRATION};
use segtree_core::{Limits, SegTreeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default domain size for a single-size run.
pub const DEFAULT_SIZE: usize = 1_000_000;

/// Default number of operations replayed per size.
pub const DEFAULT_OPERATIONS: usize = 1_000_000;

/// Default number of timed trials per tree.
pub const DEFAULT_TRIALS: usize = 10;

/// Default upper bound of generated leaf values (inclusive).
pub const DEFAULT_MAX_VALUE: i64 = 32_767;

/// How an operation stream is replayed against a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchMode {
    /// Every record is a closed range query `[left, right]`.
    Query,
    /// Every record assigns `right` at position `left`.
    Update,
    /// Each record is dispatched on its own kind.
    Mixed,
}

impl BenchMode {
    /// Returns a short identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Update => "update",
            Self::Mixed => "mixed",
        }
    }

    /// Returns all modes.
    pub fn all() -> &'static [BenchMode] {
        &[Self::Query, Self::Update, Self::Mixed]
    }
}

impl fmt::Display for BenchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchMode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "update" => Ok(Self::Update),
            "mixed" => Ok(Self::Mixed),
            other => Err(BenchError::invalid_config(
                "mode",
                format!("unknown mode '{}' (expected query, update or mixed)", other),
            )),
        }
    }
}

/// Progression of domain sizes for a sweep.
///
/// Sizes begin at `start` and grow by `linear_step` while below
/// `linear_limit`, then multiply by `factor`, stopping once `max` would be
/// exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSweep {
    /// First size.
    pub start: usize,
    /// Additive step for small sizes.
    pub linear_step: usize,
    /// Sizes below this grow linearly.
    pub linear_limit: usize,
    /// Multiplier for larger sizes.
    pub factor: usize,
    /// Largest size (inclusive).
    pub max: usize,
}

impl Default for SizeSweep {
    fn default() -> Self {
        Self {
            start: 1_000,
            linear_step: 1_000,
            linear_limit: 10_000,
            factor: 2,
            max: 1_000_000,
        }
    }
}

impl SizeSweep {
    /// Checks that the progression is finite and non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(BenchError::invalid_config("sweep.start", "must be positive"));
        }
        if self.linear_step == 0 && self.start < self.linear_limit {
            return Err(BenchError::invalid_config(
                "sweep.linear_step",
                "must be positive while below linear_limit",
            ));
        }
        if self.factor < 2 {
            return Err(BenchError::invalid_config("sweep.factor", "must be at least 2"));
        }
        if self.start > self.max {
            return Err(BenchError::invalid_config(
                "sweep.max",
                format!("must be at least start ({})", self.start),
            ));
        }
        Ok(())
    }

    /// Expands the progression into concrete sizes.
    pub fn sizes(&self) -> Result<Vec<usize>> {
        self.validate()?;

        let mut sizes = Vec::new();
        let mut size = self.start;
        while size <= self.max {
            sizes.push(size);
            let next = if size < self.linear_limit {
                size.saturating_add(self.linear_step)
            } else {
                size.saturating_mul(self.factor)
            };
            if next <= size {
                break;
            }
            size = next;
        }
        Ok(sizes)
    }
}

/// Centralized benchmark configuration.
///
/// # Example
///
/// ```no_run
/// use segtree_bench::core::config::{BenchConfig, BenchMode};
/// use segtree_bench::timer::TimerKind;
///
/// let config = BenchConfig::default()
///     .with_sizes(&[1_000, 10_000])
///     .with_trials(5)
///     .with_modes(vec![BenchMode::Query])
///     .with_timer(TimerKind::HighResolution)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Domain sizes to test.
    pub sizes: Vec<usize>,
    /// Operations generated per size.
    pub operations: usize,
    /// Timed trials per tree per mode.
    pub trials: usize,
    /// Modes to run, in order.
    pub modes: Vec<BenchMode>,
    /// Timer backend.
    pub timer: TimerKind,
    /// Calibration window for the cycle counter, in milliseconds.
    pub calibration_ms: u64,
    /// Seed for repeatable workloads; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Largest generated leaf value (inclusive).
    pub max_value: i64,
    /// Capacity limits applied to every tree.
    pub limits: Limits,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![DEFAULT_SIZE],
            operations: DEFAULT_OPERATIONS,
            trials: DEFAULT_TRIALS,
            modes: vec![BenchMode::Query, BenchMode::Update],
            timer: TimerKind::default(),
            calibration_ms: DEFAULT_CALIBRATION.as_millis() as u64,
            seed: None,
            max_value: DEFAULT_MAX_VALUE,
            limits: Limits::default(),
        }
    }
}

impl BenchConfig {
    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| BenchError::Io(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Sets custom domain sizes.
    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Replaces the sizes with the expansion of `sweep`.
    pub fn with_sweep(mut self, sweep: &SizeSweep) -> Result<Self> {
        self.sizes = sweep.sizes()?;
        Ok(self)
    }

    /// Sets the number of operations per size.
    pub fn with_operations(mut self, operations: usize) -> Self {
        self.operations = operations;
        self
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the modes to run.
    pub fn with_modes(mut self, modes: Vec<BenchMode>) -> Self {
        self.modes = modes;
        self
    }

    /// Sets the timer backend.
    pub fn with_timer(mut self, timer: TimerKind) -> Self {
        self.timer = timer;
        self
    }

    /// Sets the cycle counter calibration window.
    pub fn with_calibration(mut self, window: Duration) -> Self {
        self.calibration_ms = window.as_millis() as u64;
        self
    }

    /// Sets a fixed workload seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the largest generated leaf value.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Sets the tree capacity limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Calibration window as a [`Duration`].
    pub fn calibration(&self) -> Duration {
        Duration::from_millis(self.calibration_ms)
    }

    /// Rejects configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::invalid_config("sizes", "at least one size is required"));
        }
        for &size in &self.sizes {
            if size == 0 {
                return Err(BenchError::invalid_config("sizes", "sizes must be positive"));
            }
            if size > self.limits.max_len {
                return Err(SegTreeError::CapacityExceeded {
                    requested: size,
                    max: self.limits.max_len,
                }
                .into());
            }
        }
        if self.operations == 0 {
            return Err(BenchError::invalid_config("operations", "must be positive"));
        }
        if self.trials == 0 {
            return Err(BenchError::invalid_config("trials", "must be positive"));
        }
        if self.modes.is_empty() {
            return Err(BenchError::invalid_config("modes", "at least one mode is required"));
        }
        if self.max_value < 0 {
            return Err(BenchError::invalid_config("max_value", "must not be negative"));
        }
        for &size in &self.sizes {
            check_sum_range(size, self.max_value)?;
        }
        Ok(())
    }
}

/// Rejects a domain whose sums could leave the `i64` range.
///
/// Generated leaves lie in `[0, max_value]` and update records write values
/// in `[0, size - 1]`, so no range sum can exceed
/// `max(max_value, size - 1) * size`.
pub fn check_sum_range(size: usize, max_value: i64) -> Result<()> {
    let too_large = || {
        BenchError::invalid_config(
            "max_value",
            format!(
                "{} leaves of up to {} can overflow a 64-bit sum",
                size, max_value
            ),
        )
    };
    let n = i64::try_from(size).map_err(|_| too_large())?;
    let largest_leaf = max_value.max(n.saturating_sub(1)).max(0);
    largest_leaf.checked_mul(n).ok_or_else(too_large)?;
    Ok(())
}
