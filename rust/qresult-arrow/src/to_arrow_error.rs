//! Utilities for converting qresult errors to Arrow-compatible errors.

use arrow_schema::ArrowError;
use qresult_common::error::Error;

/// Trait for converting types into an [`ArrowError`].
pub trait ToArrowError {
    fn to_arrow_err(self) -> ArrowError;
}

/// Trait for converting results with custom errors into Arrow-compatible results.
pub trait ToArrowResult {
    type Success;

    fn to_arrow_res(self) -> Result<Self::Success, ArrowError>;
}

impl<T, E> ToArrowResult for Result<T, E>
where
    E: ToArrowError,
{
    type Success = T;

    fn to_arrow_res(self) -> Result<Self::Success, ArrowError> {
        self.map_err(|e| e.to_arrow_err())
    }
}

impl ToArrowError for Error {
    /// Maps invalid arguments to `ArrowError::InvalidArgumentError`.
    ///
    /// Every other error, decoding failures included, is carried unchanged
    /// inside `ArrowError::ExternalError` and can be recovered with a downcast.
    fn to_arrow_err(self) -> ArrowError {
        use qresult_common::error::ErrorKind;
        match self.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                ArrowError::InvalidArgumentError(format!("{name}: {message}"))
            }
            _ => ArrowError::ExternalError(self.into()),
        }
    }
}
