//! Obtaining avatar images: from a camera or from a picked file, always
//! cropped and resized to requested dimensions.

mod camera;
pub mod crop;

use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use mediatype::names::IMAGE;
use mediatype::{media_type, MediaTypeBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::profile::ImageRef;

/// Dimensions of the resulting image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureOptions {
    pub width: u32,
    pub height: u32,
    /// Crop to the centred square before resizing.
    pub cropping: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        CaptureOptions {
            width: 100,
            height: 100,
            cropping: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureSource {
    Camera,
    Gallery,
}

/// Result of a successful capture, already stored in cache directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub mime: MediaTypeBuf,
}

impl From<CapturedImage> for ImageRef {
    fn from(c: CapturedImage) -> Self {
        ImageRef {
            path: c.path,
            width: c.width,
            height: c.height,
            mime: c.mime,
        }
    }
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture was cancelled")]
    Cancelled,
    #[error("permission denied")]
    PermissionDenied,
    #[error("no camera is configured")]
    CameraUnavailable,
    #[error("camera failed: {0}")]
    Camera(String),
    #[error("{0} is not an image")]
    NotAnImage(String),
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("could not resize image: {0}")]
    Resize(String),
    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for CaptureError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::PermissionDenied => CaptureError::PermissionDenied,
            _ => CaptureError::Io(e),
        }
    }
}

impl CaptureError {
    /// User backed out, nothing really went wrong.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, CaptureError::Cancelled)
    }

    /// Short text for a transient notice.
    pub fn user_message(&self) -> String {
        match self {
            CaptureError::Cancelled => "No photo was taken".to_string(),
            CaptureError::PermissionDenied => "Access to the photo was denied".to_string(),
            CaptureError::CameraUnavailable => "No camera is available".to_string(),
            e => format!("Could not use the photo: {e}"),
        }
    }
}

/// Turns image files into avatars.
#[derive(Clone, Debug)]
pub struct ImageService {
    cache_dir: PathBuf,
    camera_command: Vec<String>,
}

impl ImageService {
    /// `camera_command` is a program with arguments, `{output}` in any of
    /// them is replaced by the path the photo has to be written to.
    pub fn new(cache_dir: PathBuf, camera_command: Vec<String>) -> ImageService {
        ImageService {
            cache_dir,
            camera_command,
        }
    }

    fn timestamped(&self, prefix: &str, extension: &str) -> PathBuf {
        let now = chrono::Local::now().format("%Y%m%d-%H%M%S%.6f");
        self.cache_dir.join(format!("{prefix}-{now}.{extension}"))
    }

    /// Takes a photo with the configured camera command.
    pub async fn open_camera(&self, options: CaptureOptions) -> Result<CapturedImage, CaptureError> {
        tokio::fs::create_dir_all(&self.cache_dir).await?;

        let shot = self.timestamped("shot", "jpg");
        let result = match camera::shoot(&self.camera_command, &shot).await {
            Ok(()) => self.process(&shot, options).await,
            Err(e) => Err(e),
        };

        // the camera may have written something even when it failed
        self.discard(&shot).await;
        result
    }

    /// Removes image previously produced by this service. Files outside
    /// of cache directory are never touched.
    pub async fn discard(&self, path: &Path) {
        if !path.starts_with(&self.cache_dir) {
            debug!("Not discarding {:?}, it is not cached", path);
            return;
        }

        match tokio::fs::remove_file(path).await {
            Ok(()) => debug!("Discarded {:?}", path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove {:?}: {}", path, e),
        }
    }

    /// Crops and resizes image in `path` and stores the result as PNG.
    pub async fn process(
        &self,
        path: &Path,
        options: CaptureOptions,
    ) -> Result<CapturedImage, CaptureError> {
        let bytes = tokio::fs::read(path).await?;
        let not_an_image = || CaptureError::NotAnImage(path.display().to_string());

        let format = image::guess_format(&bytes).map_err(|_| not_an_image())?;
        match format.to_mime_type().parse::<MediaTypeBuf>() {
            Ok(mt) if mt.ty() == IMAGE => {}
            _ => return Err(not_an_image()),
        }

        tokio::fs::create_dir_all(&self.cache_dir).await?;
        let target = self.timestamped("avatar", "png");

        info!("Processing {:?} into {:?}", path, target);

        let out = target.clone();
        tokio::task::spawn_blocking(move || -> Result<(), CaptureError> {
            let rgba = image::load_from_memory_with_format(&bytes, format)?.to_rgba8();
            let (width, height) = rgba.dimensions();
            let pixels = crop::fit(rgba.into_raw(), width, height, &options)?;

            image::RgbaImage::from_raw(options.width, options.height, pixels)
                .ok_or_else(|| CaptureError::Resize("buffer size mismatch".to_string()))?
                .save_with_format(&out, ImageFormat::Png)?;

            Ok(())
        })
        .await
        .map_err(|e| CaptureError::Resize(e.to_string()))??;

        Ok(CapturedImage {
            path: target,
            width: options.width,
            height: options.height,
            mime: MediaTypeBuf::from(media_type!(IMAGE / PNG)),
        })
    }
}
