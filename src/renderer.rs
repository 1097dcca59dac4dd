// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton fractal renderer
//!
//! For every pixel: map it onto the complex plane, nudge it off the
//! axes, run Newton's method, ask the root registry which root the
//! result belongs to, and shade the pixel by root and iteration count.
//!
//! Pixels are independent of one another except through the root
//! registry, which hands out ids in the order roots are first seen.
//! The traversal is therefore strictly sequential; the same arguments
//! always yield the same ids and the same image.

use complex::Complex;
use errors::NewtonError;
use image::RgbImage;
use palette::shade;
use planes::{Pixel, PlaneMapper};
use polynomial::Polynomial;
use roots::RootRegistry;
use settings::Settings;
use solver::{NewtonSolver, Solution};

/// A finished render: the pixels, and the roots that colored them.
pub struct Render {
    /// One RGB value per pixel.
    pub image: RgbImage,
    /// Every root discovered, indexed by the id used to pick its color.
    pub roots: RootRegistry,
}

/// Holds everything needed to draw one Newton fractal.  Once built it
/// is never mutated; per-render state lives inside `render`.
pub struct NewtonRenderer {
    plane: PlaneMapper,
    polynomial: Polynomial,
    derivative: Polynomial,
    solver: NewtonSolver,
    settings: Settings,
}

impl NewtonRenderer {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane, and the polynomial
    /// whose roots are being hunted.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex,
        rightupper: Complex,
        polynomial: Polynomial,
        settings: Settings,
    ) -> Result<Self, NewtonError> {
        let plane = PlaneMapper::new(width, height, leftlower, rightupper)?;
        let derivative = polynomial.derive();
        Ok(NewtonRenderer {
            plane,
            polynomial,
            derivative,
            solver: NewtonSolver::from_settings(&settings),
            settings,
        })
    }

    /// The polynomial being drawn.
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Its derivative.
    pub fn derivative(&self) -> &Polynomial {
        &self.derivative
    }

    /// The most passes the solver may take for one pixel.
    pub fn max_iterations(&self) -> usize {
        self.solver.max_attempts()
    }

    /// Runs Newton's method from the point under `pixel`.
    pub fn solve_pixel(&self, pixel: &Pixel) -> Solution {
        let start = self
            .plane
            .pixel_to_point(pixel)
            .avoid_zero(self.settings.zero_offset);
        self.solver.solve(&self.polynomial, &self.derivative, start)
    }

    /// Draws the whole image with a fresh root registry.
    pub fn render(&self) -> Render {
        let mut roots = RootRegistry::new(self.settings.root_tolerance);
        let mut image = RgbImage::new(
            self.plane.integral_plane.0 as u32,
            self.plane.integral_plane.1 as u32,
        );
        info!(
            "rendering {}x{} pixels of {}",
            self.plane.integral_plane.0, self.plane.integral_plane.1, self.polynomial
        );
        for pixel in self.plane.pixels() {
            let solution = self.solve_pixel(&pixel);
            let id = roots.classify(solution.root);
            image.put_pixel(
                pixel.0 as u32,
                pixel.1 as u32,
                shade(id, solution.iterations),
            );
        }
        info!("render complete, {} roots found", roots.len());
        Render { image, roots }
    }
}
