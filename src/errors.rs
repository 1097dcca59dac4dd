// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Things that can stop a render.  Numeric trouble inside the solver
//! is not among them.

use std::io;

/// The error type for every fallible operation in the crate.
#[derive(Debug, Fail)]
pub enum NewtonError {
    /// The corners of the complex plane are out of order.
    #[fail(display = "invalid plane: {}", reason)]
    InvalidPlane {
        /// What was wrong with the corners.
        reason: String,
    },

    /// The image has no pixels.
    #[fail(display = "image size {}x{} has no pixels", width, height)]
    EmptyImage {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Writing the output failed.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for NewtonError {
    fn from(e: io::Error) -> NewtonError {
        NewtonError::Io(e)
    }
}
