// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs and dials of a render.  Once set, this object should not
//! be mutated; everything downstream copies what it needs out of it.

/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Tuning for the solver, the root registry and pixel preparation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Accepted Newton steps every starting point must take.
    pub steps: usize,
    /// A step whose squared magnitude is at or above this does not
    /// count towards `steps`.
    pub divergence: f64,
    /// Hard ceiling on passes through the solver loop, accepted or
    /// not.
    pub max_attempts: usize,
    /// Squared distance within which two converged points are the same
    /// root.
    pub root_tolerance: f64,
    /// Substituted for any starting coordinate component that is
    /// exactly zero.
    pub zero_offset: f64,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            steps: 30,
            divergence: 0.5,
            max_attempts: 30 * 10,
            root_tolerance: 0.01,
            zero_offset: 0.0001,
        }
    }
}
