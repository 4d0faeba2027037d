/* hwtrig | table.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Trig table passes and line emission */

/******************************************************************************/

use core::fmt;
use std::io::Write;

use log::{debug, info};
use snafu::ResultExt;

use crate::config::TableConfig;
use crate::errors::{TableError, WriteSnafu};
use crate::repr::Repr;
use crate::units::{unit_to_degrees, unit_to_radians};

/******************************************************************************/

/// Trig function computed by a table pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan
}

impl TrigFn {
    /// All functions, in the order the firmware table lists them
    pub const ALL: [TrigFn; 3] = [TrigFn::Sin, TrigFn::Cos, TrigFn::Tan];

    /// Name used in the pass title
    pub fn name(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan"
        }
    }

    /// Evaluates the function
    ///
    /// Tangent is not clamped near 90 degrees: `tan(unit_to_radians(375))` is a large finite value.
    pub fn eval(self, rads: f64) -> f64 {
        match self {
            TrigFn::Sin => rads.sin(),
            TrigFn::Cos => rads.cos(),
            TrigFn::Tan => rads.tan()
        }
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/******************************************************************************/

/// One data row of a pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub hw: u16,
    pub rads: f64,
    pub degs: f64,
    pub value: f64
}

impl Entry {
    pub fn new(func: TrigFn, hw: u16) -> Self {
        let rads = unit_to_radians(hw);
        Self {
            hw,
            rads,
            degs: unit_to_degrees(hw),
            value: func.eval(rads)
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t; HW:{:3} Rads:{} Degs:{}", Repr(self.value), self.hw, Repr(self.rads), Repr(self.degs))
    }
}

/// A single output line, without its line terminator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Separator,
    Title(TrigFn),
    Entry(Entry)
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Separator => f.write_str(";"),
            Line::Title(func) => write!(f, ";{}", func),
            Line::Entry(entry) => fmt::Display::fmt(entry, f)
        }
    }
}

/******************************************************************************/

/// Emission state
#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Separator,
    Title,
    Entries,
    Done
}

/// Iterator over every line of a table, in output order
pub struct TableLines<'a> {
    config: &'a TableConfig,
    state: State,
    pass: usize,
    hw: u16
}

impl<'a> TableLines<'a> {
    pub fn new(config: &'a TableConfig) -> Self {
        Self {
            config,
            state: if config.passes().is_empty() { State::Done } else { State::Separator },
            pass: 0,
            hw: config.first()
        }
    }

    /// Checks if every line has been produced
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    fn func(&self) -> TrigFn {
        self.config.passes()[self.pass]
    }
}

impl Iterator for TableLines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        match self.state {
            State::Separator => {
                self.state = State::Title;
                Some(Line::Separator)
            },

            State::Title => {
                self.hw = self.config.first();
                self.state = State::Entries;
                Some(Line::Title(self.func()))
            },

            State::Entries => {
                let entry = Entry::new(self.func(), self.hw);
                if self.hw < self.config.last() {
                    self.hw += 1;
                } else {
                    // Move on to the next pass
                    self.pass += 1;
                    self.state = if self.pass < self.config.passes().len() { State::Separator } else { State::Done };
                }
                Some(Line::Entry(entry))
            },

            State::Done => None
        }
    }
}

/******************************************************************************/

/// Writes the whole table, one line per `\n`, and returns the number of lines written
pub fn write_table<W: Write>(config: &TableConfig, out: &mut W) -> Result<usize, TableError> {
    info!(
        "emitting {} pass(es) over HW {}..={} ({} lines)",
        config.passes().len(),
        config.first(),
        config.last(),
        config.line_count()
    );

    let mut count = 0;
    for line in TableLines::new(config) {
        if let Line::Title(func) = line {
            debug!("{} pass", func);
        }
        writeln!(out, "{}", line).context(WriteSnafu)?;
        count += 1;
    }
    out.flush().context(WriteSnafu)?;

    info!("wrote {} lines", count);
    Ok(count)
}

/******************************************************************************/
