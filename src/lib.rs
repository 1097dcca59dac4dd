#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton fractal renderer
//!
//! Newton's method finds a root of a polynomial by repeatedly sliding
//! a guess `x` down the tangent line: `x ← x - f(x)/f'(x)`.  Which root
//! it lands on depends, sometimes wildly, on where it starts.  Start
//! the method from every point of a rectangle of the complex plane,
//! color each point by the root it reached, and the boundaries between
//! the basins of attraction turn out to be fractal.
//!
//! This crate draws that picture for `x³ + 1`.  Roots are not known in
//! advance: each converged point is compared against the roots found
//! so far and either joins one of them or becomes a new one.  Colors
//! are assigned in order of discovery and darkened by how long the
//! point took to settle.

#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod complex;
pub mod errors;
pub mod output;
pub mod palette;
pub mod planes;
pub mod polynomial;
pub mod renderer;
pub mod roots;
pub mod settings;
pub mod solver;

pub use complex::Complex;
pub use errors::NewtonError;
pub use output::write_image;
pub use polynomial::Polynomial;
pub use renderer::{NewtonRenderer, Render};
pub use roots::RootRegistry;
pub use settings::Settings;
pub use solver::{NewtonSolver, Solution};
