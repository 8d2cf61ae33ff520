// Saves the current framebuffer as a PNG (key S).
use crate::error::Error;
use crate::types::FrameBuffer;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Unpack 0x00RRGGBB pixels into an RGB image of the same size.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
    })
}

/// Write `fb` into `dir` as `bezier-<unix millis>.png` and return the path.
pub fn save_png(fb: &FrameBuffer, dir: &Path) -> Result<PathBuf, Error> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let path = dir.join(format!("bezier-{millis}.png"));
    to_rgb_image(fb).save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_channels() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.pixels[1] = 0x00_E6_29_37;
        let img = to_rgb_image(&fb);
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([0xE6, 0x29, 0x37]));
    }

    #[test]
    fn saved_png_reads_back() {
        let dir = std::env::temp_dir().join(format!("bezier-drag-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(0x00_F5_F5_F5);
        fb.pixels[4] = 0x00_00_00_00;
        let path = save_png(&fb, &dir).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0xF5, 0xF5, 0xF5]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 0, 0]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let fb = FrameBuffer::new(1, 1);
        let dir = std::env::temp_dir().join("bezier-drag-no-such-dir/nested");
        assert!(matches!(save_png(&fb, &dir), Err(Error::Screenshot(_))));
    }
}
