// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished render to disk as a PNG.

use errors::NewtonError;
use image::png::PNGEncoder;
use image::{ColorType, RgbImage};
use std::fs::File;
use std::path::Path;

/// Encodes `image` as an 8-bit RGB PNG at `path`, replacing whatever
/// was there.
pub fn write_image(path: &Path, image: &RgbImage) -> Result<(), NewtonError> {
    let (width, height) = image.dimensions();
    let output = File::create(path)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(image, width, height, ColorType::RGB(8))?;
    info!("wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb};
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([0, 128, 0]));
        write_image(&path, &img).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(back.to_rgb().get_pixel(2, 1), &Rgb([0, 128, 0]));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("out.png");
        match write_image(&path, &RgbImage::new(1, 1)) {
            Err(NewtonError::Io(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
