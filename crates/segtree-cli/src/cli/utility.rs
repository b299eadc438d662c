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

//! Check commands: tree cross-validation and timer discovery.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Check commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Replay a random workload against both trees and compare every answer
    Verify {
        /// Domain size
        #[arg(short, long, default_value_t = 1_000)]
        size: usize,

        /// Number of operations
        #[arg(short = 'q', long, default_value_t = 1_000)]
        operations: usize,

        /// Workload seed
        #[arg(long)]
        seed: Option<u64>,

        /// Largest generated leaf value
        #[arg(long)]
        max_value: Option<i64>,
    },

    /// List timer backends and whether this host supports them
    Timers,
}

impl UtilityCommands {
    /// Execute the check command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Verify {
                size,
                operations,
                seed,
                max_value,
            } => commands::verify(size, operations, seed, max_value),
            UtilityCommands::Timers => commands::timers(),
        }
    }
}
