// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Incremental clustering of converged points.  A root's identity is
//! its position in the registry; entries are only ever appended, so
//! identities stay put for the lifetime of a render.

use complex::Complex;

/// The roots discovered so far, in order of discovery.
#[derive(Clone, Debug)]
pub struct RootRegistry {
    roots: Vec<Complex>,
    tolerance: f64,
}

impl RootRegistry {
    /// An empty registry.  Two points are the same root when their
    /// squared distance is at most `tolerance`.
    pub fn new(tolerance: f64) -> RootRegistry {
        RootRegistry {
            roots: vec![],
            tolerance,
        }
    }

    /// Returns the id of the known root near `point`, registering
    /// `point` as a new root if none is near enough.  When several
    /// known roots are within tolerance the last one registered wins.
    pub fn classify(&mut self, point: Complex) -> usize {
        let tolerance = self.tolerance;
        match self
            .roots
            .iter()
            .rposition(|root| point.distance_squared(*root) <= tolerance)
        {
            Some(id) => id,
            None => {
                self.roots.push(point);
                debug!("root {} discovered at {}", self.roots.len() - 1, point);
                self.roots.len() - 1
            }
        }
    }

    /// The root registered under `id`.
    pub fn get(&self, id: usize) -> Option<Complex> {
        self.roots.get(id).cloned()
    }

    /// All roots, indexed by id.
    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    /// The number of distinct roots seen.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True until the first point is classified.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl Default for RootRegistry {
    fn default() -> RootRegistry {
        RootRegistry::new(0.01)
    }
}
