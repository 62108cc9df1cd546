use std::io;
use crate::core::error::CoreError;
use rust_i18n::t;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Image(image::ImageError),
    Core(CoreError),
    EmptyRaster,
    PointerCapture(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "{}", t!("error.io_error", err = err.to_string())),
            AppError::Image(err) => write!(f, "{}", t!("error.image_error", err = err.to_string())),
            AppError::Core(err) => write!(f, "{}", err),
            AppError::EmptyRaster => write!(f, "{}", t!("error.empty_raster")),
            AppError::PointerCapture(msg) => write!(f, "{}", t!("error.pointer_capture", msg = msg.to_string())),
        }
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError { fn from(err: io::Error) -> Self { AppError::Io(err) } }
impl From<image::ImageError> for AppError { fn from(err: image::ImageError) -> Self { AppError::Image(err) } }
impl From<CoreError> for AppError { fn from(err: CoreError) -> Self { AppError::Core(err) } }

pub type Result<T> = std::result::Result<T, AppError>;
