// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Root ids pick a base color; iteration counts darken it.

use image::Rgb;
use num::clamp;

/// Base colors, cycled through by root id.
pub const COLORS: [[u8; 3]; 9] = [
    [255, 0, 0],     // red
    [0, 0, 255],     // blue
    [0, 128, 0],     // green
    [255, 255, 0],   // yellow
    [255, 165, 0],   // orange
    [255, 0, 255],   // fuchsia
    [255, 215, 0],   // gold
    [0, 255, 255],   // cyan
    [255, 0, 255],   // magenta
];

/// The color of a pixel whose starting point converged on root
/// `root_id` after `iterations` passes.  Each channel loses twice the
/// iteration count, floored at zero.
pub fn shade(root_id: usize, iterations: usize) -> Rgb<u8> {
    let base = COLORS[root_id % COLORS.len()];
    let darken = clamp(iterations.saturating_mul(2), 0, 255) as i32;
    let channel = |c: u8| clamp(i32::from(c) - darken, 0, 255) as u8;
    Rgb([channel(base[0]), channel(base[1]), channel(base[2])])
}
