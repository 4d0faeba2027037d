/* hwtrig | units.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Hiwonder bus-servo angular units */

/******************************************************************************/

use core::f64::consts::PI;

/******************************************************************************/

/// Number of servo units spanning 180 degrees
pub const HW_PER_HALF_TURN: f64 = 750.0;
/// Highest position a hiwonder bus-servo accepts (240 degrees)
pub const HW_FULL_SCALE: u16 = 1000;
/// Servo position corresponding to 90 degrees
pub const HW_RIGHT_ANGLE: u16 = 375;
/// Angle covered by a single servo unit
pub const DEGREES_PER_HW: f64 = 180.0 / HW_PER_HALF_TURN;
/// Radians covered by a single servo unit
pub const RADIANS_PER_HW: f64 = PI / HW_PER_HALF_TURN;

/******************************************************************************/

/// Converts a servo position to degrees
///
/// Example: 375 --> 90.0
pub fn unit_to_degrees(unit: u16) -> f64 {
    DEGREES_PER_HW * unit as f64
}

/// Converts a servo position to radians
///
/// The scale factor is applied first, so the result for 375 is the `f64`
/// nearest to `(PI / 750) * 375`, which is one ulp short of `FRAC_PI_2`.
pub fn unit_to_radians(unit: u16) -> f64 {
    RADIANS_PER_HW * unit as f64
}

/******************************************************************************/
