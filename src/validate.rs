//! Write-time validation
//!
//! Length bounds and email checks applied before any row is written. The
//! messages match the `errors` array entries described in the API contract.

/// Bounds for user names (characters)
pub const NAME_BOUNDS: (usize, usize) = (3, 50);
/// Bounds for plaintext passwords (characters)
pub const PASSWORD_BOUNDS: (usize, usize) = (6, 50);
/// Bounds for publication titles (characters)
pub const TITLE_BOUNDS: (usize, usize) = (3, 50);
/// Bounds for publication and comment content (characters)
pub const CONTENT_BOUNDS: (usize, usize) = (3, 255);

fn within(value: &str, bounds: (usize, usize)) -> bool {
    let len = value.chars().count();
    len >= bounds.0 && len <= bounds.1
}

/// Basic email shape check: a non-empty user part and a host part with a dot
pub fn is_valid_email(email: &str) -> bool {
    let Some((user, host)) = email.split_once('@') else {
        return false;
    };
    !user.is_empty() && host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
}

/// Validate user fields, collecting every failure
///
/// The password is only checked when a plaintext password is supplied;
/// updates that leave the password untouched pass `None`.
pub fn user_errors(name: &str, email: &str, password: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();

    if !within(name, NAME_BOUNDS) {
        errors.push("Name must be between 3 and 50 characters".to_string());
    }
    if !is_valid_email(email) {
        errors.push("Invalid email".to_string());
    }
    if let Some(password) = password {
        if !within(password, PASSWORD_BOUNDS) {
            errors.push("Password must be between 6 and 50 characters".to_string());
        }
    }

    errors
}

/// Validate a publication title
pub fn title_error(title: &str) -> Option<String> {
    if within(title, TITLE_BOUNDS) {
        None
    } else {
        Some("Title must be between 3 and 50 characters".to_string())
    }
}

/// Validate publication or comment content
pub fn content_error(content: &str) -> Option<String> {
    if within(content, CONTENT_BOUNDS) {
        None
    } else {
        Some("Content must be between 3 and 255 characters".to_string())
    }
}

/// Validate publication fields, collecting every failure
pub fn publication_errors(title: &str, content: &str) -> Vec<String> {
    title_error(title)
        .into_iter()
        .chain(content_error(content))
        .collect()
}

/// Validate comment content
pub fn comment_errors(content: &str) -> Vec<String> {
    content_error(content).into_iter().collect()
}
