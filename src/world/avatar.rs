//! Avatar images: photo capture, preview processing and persistence.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Size of the capture preview area
pub const CAPTURE_WIDTH: u32 = 400;
pub const CAPTURE_HEIGHT: u32 = 300;
/// Side of the square avatar preview and of the generated fallback avatar
pub const AVATAR_SIZE: u32 = 200;
/// Longest accepted player name, in characters
pub const MAX_NAME_LEN: usize = 20;

/// Errors that can occur while capturing or storing an avatar
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("No photo source available")]
    SourceUnavailable,

    #[error("Photo capture cancelled")]
    Cancelled,

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Something that can produce a photo of the player.
pub trait PhotoSource {
    /// Human-readable name for logs and the UI
    fn name(&self) -> &str;

    /// Grab one frame
    fn capture(&mut self) -> Result<RgbImage, AvatarError>;
}

/// Lets the player pick an existing picture with the native file dialog.
#[derive(Debug, Default)]
pub struct FilePhotoSource {
    last_dir: Option<PathBuf>,
}

impl FilePhotoSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhotoSource for FilePhotoSource {
    fn name(&self) -> &str {
        "Picture file"
    }

    fn capture(&mut self) -> Result<RgbImage, AvatarError> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Choose a photo")
            .add_filter("Images", &["png", "jpg", "jpeg"]);
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }

        let path = dialog.pick_file().ok_or(AvatarError::Cancelled)?;
        self.last_dir = path.parent().map(Path::to_path_buf);

        tracing::info!("Loading photo from {}", path.display());
        let img = image::open(&path).map_err(|e| AvatarError::ImageError(e.to_string()))?;
        Ok(img.to_rgb8())
    }
}

/// Photo source that always returns the same still image.
#[derive(Debug, Clone)]
pub struct StillPhotoSource {
    image: RgbImage,
}

impl StillPhotoSource {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }
}

impl PhotoSource for StillPhotoSource {
    fn name(&self) -> &str {
        "Still image"
    }

    fn capture(&mut self) -> Result<RgbImage, AvatarError> {
        Ok(self.image.clone())
    }
}

/// Generated avatar used when no photo can be taken.
pub fn default_avatar() -> RgbImage {
    RgbImage::from_fn(AVATAR_SIZE, AVATAR_SIZE, |x, y| {
        Rgb([(100 + x / 3) as u8, (150 + y / 3) as u8, 200])
    })
}

/// Mirror a raw capture and fit it to the preview area.
pub fn prepare_capture(photo: &RgbImage) -> RgbImage {
    let mirrored = imageops::flip_horizontal(photo);
    imageops::resize(&mirrored, CAPTURE_WIDTH, CAPTURE_HEIGHT, FilterType::Triangle)
}

/// Take a photo from `source`, falling back to [`default_avatar`].
///
/// Returns the image and whether it came from the source.
pub fn capture_or_default(source: Option<&mut dyn PhotoSource>) -> (RgbImage, bool) {
    let Some(source) = source else {
        return (default_avatar(), false);
    };

    match source.capture() {
        Ok(photo) => (prepare_capture(&photo), true),
        Err(AvatarError::Cancelled) => {
            tracing::debug!("Photo capture cancelled, using generated avatar");
            (default_avatar(), false)
        }
        Err(e) => {
            tracing::warn!("Photo capture from {} failed: {}", source.name(), e);
            (default_avatar(), false)
        }
    }
}

fn rgb_to_hsv(p: Rgb<u8>) -> (f32, f32, f32) {
    let [r, g, b] = p.0.map(|c| c as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb<u8> {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb([to_u8(r), to_u8(g), to_u8(b)])
}

/// Scale saturation by `0.5 + tone`. A tone of exactly 0.5 returns the image as is.
pub fn apply_skin_tone(image: &RgbImage, tone: f32) -> RgbImage {
    if tone == 0.5 {
        return image.clone();
    }

    let factor = 0.5 + tone.clamp(0.0, 1.0);
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let (h, s, v) = rgb_to_hsv(*pixel);
        *pixel = hsv_to_rgb(h, (s * factor).min(1.0), v);
    }
    out
}

/// Square preview of a captured image with the skin tone applied.
pub fn avatar_preview(captured: &RgbImage, skin_tone: f32) -> RgbImage {
    let square = imageops::resize(captured, AVATAR_SIZE, AVATAR_SIZE, FilterType::Triangle);
    apply_skin_tone(&square, skin_tone)
}

/// Write the avatar as PNG, creating parent directories.
pub fn save_avatar(image: &RgbImage, path: &Path) -> Result<(), AvatarError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AvatarError::IoError(e.to_string()))?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AvatarError::ImageError(e.to_string()))?;

    tracing::info!("Saved avatar to {}", path.display());
    Ok(())
}

/// Load a saved avatar scaled to `width` by `height` for use as a sprite.
pub fn load_sprite(path: &Path, width: u32, height: u32) -> Result<RgbaImage, AvatarError> {
    let img = image::open(path).map_err(|e| AvatarError::ImageError(e.to_string()))?;
    Ok(imageops::resize(&img.to_rgba8(), width, height, FilterType::Triangle))
}

/// Trim and truncate a typed name; blank names become "Player".
pub fn sanitize_name(name: &str) -> String {
    let trimmed: String = name.trim().chars().take(MAX_NAME_LEN).collect();
    if trimmed.is_empty() {
        "Player".to_string()
    } else {
        trimmed
    }
}
