/* hwtrig | config.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use snafu::ensure;

use crate::errors::{InvalidRangeSnafu, NoPassesSnafu, TableError, UnitOutOfRangeSnafu};
use crate::table::TrigFn;
use crate::units::{HW_FULL_SCALE, HW_RIGHT_ANGLE};

/******************************************************************************/

/// Layout of a generated table
///
/// The default layout is the one the firmware expects: units 0 to 375 for sin, cos and tan, in
/// that order.
#[derive(Clone, Debug, PartialEq)]
pub struct TableConfig {
    first: u16,
    last: u16,
    passes: Vec<TrigFn>
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            first: 0,
            last: HW_RIGHT_ANGLE,
            passes: TrigFn::ALL.to_vec()
        }
    }
}

impl TableConfig {
    /// Builds a custom layout covering `first..=last` for each function of `passes`
    pub fn new(first: u16, last: u16, passes: &[TrigFn]) -> Result<Self, TableError> {
        ensure!(first <= last, InvalidRangeSnafu { first, last });
        ensure!(last <= HW_FULL_SCALE, UnitOutOfRangeSnafu { unit: last });
        ensure!(!passes.is_empty(), NoPassesSnafu);
        Ok(Self {
            first,
            last,
            passes: passes.to_vec()
        })
    }

    pub fn first(&self) -> u16 {
        self.first
    }

    pub fn last(&self) -> u16 {
        self.last
    }

    pub fn passes(&self) -> &[TrigFn] {
        &self.passes
    }

    /// Number of data lines in each pass
    pub fn entries_per_pass(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Total number of lines, headers included
    pub fn line_count(&self) -> usize {
        self.passes.len() * (2 + self.entries_per_pass())
    }
}

/******************************************************************************/
