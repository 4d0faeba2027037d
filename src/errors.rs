/* hwtrig | errors.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use snafu::prelude::*;
use std::io;

use crate::units::HW_FULL_SCALE;

/******************************************************************************/

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TableError {
    #[snafu(display("could not write table output: {source}"))]
    Write { source: io::Error },
    #[snafu(display("table range is reversed: first unit {first} is after last unit {last}"))]
    InvalidRange { first: u16, last: u16 },
    #[snafu(display("unit {unit} is beyond the servo full scale of {}", HW_FULL_SCALE))]
    UnitOutOfRange { unit: u16 },
    #[snafu(display("table needs at least one trig function"))]
    NoPasses,
}
