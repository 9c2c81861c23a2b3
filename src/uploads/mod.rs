//! Uploads Module
//!
//! Multipart image intake and local disk storage. Both the user and
//! publication image endpoints share this path; only the destination
//! directory differs.
//!
//! # Upload Flow
//!
//! 1. The handler receives a multipart body and looks for the `file` field
//! 2. The field's MIME type is checked against the image allow-list
//! 3. The bytes are written under a randomized filename
//! 4. The owning row's `image` column is updated by the handler
//!
//! No cleanup is performed if the row update after step 3 fails; the file
//! is left behind on disk.

/// Filename generation and disk storage
pub mod storage;

/// Multipart field intake
pub mod multipart;

pub use multipart::read_image_field;
pub use storage::store_image;
