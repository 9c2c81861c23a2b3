/**
 * Upload Storage
 *
 * This module generates randomized filenames for uploaded images and
 * writes them to local disk. Filenames combine the upload timestamp with
 * a random number so that concurrent uploads of the same original name
 * never collide, and so that original names never reach the filesystem.
 */

use std::path::Path;

use rand::Rng;

/// MIME types accepted by the image endpoints
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// Check a content type against the image allow-list
pub fn is_allowed_image(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// Generate a stored filename for an upload
///
/// The result is `{unix_millis}_{random}{ext}` where `ext` is taken from
/// the original filename (including the dot) and `random` is a five digit
/// number.
pub fn random_filename(original: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = rand::thread_rng().gen_range(10000..20000);
    let ext = Path::new(original)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    format!("{millis}_{random}{ext}")
}

/// Write uploaded bytes to `dir` under a randomized name
///
/// Creates the directory if it does not exist and returns the stored
/// filename (not the full path).
pub async fn store_image(
    dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> std::io::Result<String> {
    tokio::fs::create_dir_all(dir).await?;

    let filename = random_filename(original_name);
    tokio::fs::write(dir.join(&filename), bytes).await?;

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list() {
        assert!(is_allowed_image("image/png"));
        assert!(is_allowed_image("image/jpeg"));
        assert!(is_allowed_image("image/jpg"));
        assert!(!is_allowed_image("image/gif"));
        assert!(!is_allowed_image("application/pdf"));
        assert!(!is_allowed_image("text/plain"));
    }

    #[test]
    fn test_random_filename_keeps_extension() {
        let name = random_filename("avatar.png");
        assert!(name.ends_with(".png"));
        assert!(name.contains('_'));
    }

    #[test]
    fn test_random_filename_without_extension() {
        let name = random_filename("avatar");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_random_filenames_do_not_collide() {
        // Same millisecond is likely; the random suffix keeps them apart.
        let names: std::collections::HashSet<String> =
            (0..8).map(|_| random_filename("a.png")).collect();
        assert!(names.len() > 1);
    }

    #[tokio::test]
    async fn test_store_image_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("images").join("users");

        let filename = store_image(&target, "avatar.jpg", b"not really a jpeg")
            .await
            .unwrap();

        let stored = tokio::fs::read(target.join(&filename)).await.unwrap();
        assert_eq!(stored, b"not really a jpeg");
        assert!(filename.ends_with(".jpg"));
    }
}
