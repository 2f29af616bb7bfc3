use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json<T>` whose rejections are reported through `AppError`, so malformed
/// bodies share the same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidatedJson<T>(pub T);
