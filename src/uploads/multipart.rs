/**
 * Multipart Intake
 *
 * This module reads the uploaded file out of a multipart request body.
 * The MIME filter runs before anything touches disk or the database, so
 * a rejected upload has no side effects.
 */

use axum::extract::Multipart;

use crate::error::ApiError;
use crate::uploads::storage::is_allowed_image;

/// An uploaded image that passed the MIME filter
#[derive(Debug)]
pub struct UploadedImage {
    /// Original filename as sent by the client (used for the extension)
    pub original_name: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

/// Read the `file` field from a multipart body
///
/// # Errors
///
/// * `400 File must be an image` - field present but not png/jpeg/jpg
/// * `400 Filename not available` - no `file` field in the body
pub async fn read_image_field(mut multipart: Multipart) -> Result<UploadedImage, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Malformed multipart body: {:?}", e);
        ApiError::bad_request("Filename not available")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_allowed_image(&content_type) {
            tracing::warn!("Rejected upload with content type: {}", content_type);
            return Err(ApiError::bad_request("File must be an image"));
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read upload body: {:?}", e);
            ApiError::bad_request("Filename not available")
        })?;

        return Ok(UploadedImage {
            original_name,
            bytes: bytes.to_vec(),
        });
    }

    tracing::warn!("Multipart body without a file field");
    Err(ApiError::bad_request("Filename not available"))
}
