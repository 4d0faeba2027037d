/* hwtrig | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Trig lookup tables for hiwonder bus-servo units */

/******************************************************************************/

#![doc = include_str!("../README.md")]

/******************************************************************************/

mod config;
mod errors;
mod repr;
mod table;
mod units;

pub use config::TableConfig;
pub use errors::TableError;
pub use repr::Repr;
pub use table::{write_table, Entry, Line, TableLines, TrigFn};
pub use units::{
    unit_to_degrees, unit_to_radians, DEGREES_PER_HW, HW_FULL_SCALE, HW_PER_HALF_TURN, HW_RIGHT_ANGLE,
    RADIANS_PER_HW
};
