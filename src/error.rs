// One error type for the whole program.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed

    #[error("Input error: {0}")]
    Io(#[from] std::io::Error), // Reading stdin / the scene file failed
    #[error("Input ended before {what} was read")]
    MissingValue { what: String },
    #[error("Could not read {what} from {token:?}")]
    InvalidValue { what: String, token: String },
    #[error("Number of steps must be at least 1")]
    ZeroSteps,
    #[error("Number of steps {steps} is too large (max {max})")]
    TooManySteps { steps: usize, max: usize },
    #[error("Control point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("Degree {degree} is too large (max {max})")]
    DegreeTooLarge { degree: usize, max: usize },
    #[error("A degree {degree} curve needs {} control points, got {count}", .degree + 1)]
    TooFewControlPoints { degree: usize, count: usize },

    #[error("Screenshot error: {0}")]
    Screenshot(#[from] image::ImageError), // Encoding/writing the PNG failed
}
