// ============================================================================
// Log Sanitization
// ============================================================================
//
// Form fields arrive from anonymous visitors and end up in log lines. Before
// logging, values are stripped of newlines, ANSI escapes and other control
// characters, then truncated. Email addresses are masked so that logs carry
// enough to correlate a submission without holding the full address.
//
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum logged length of a single user-provided value, in characters.
const MAX_LOG_LENGTH: usize = 200;

static ANSI_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("ANSI escape pattern is valid")
});

/// Makes a user-provided string safe to put in a single log line.
///
/// ```
/// use bl_interiors::utils::log_sanitizer::sanitize_for_log;
///
/// assert_eq!(sanitize_for_log("admin\nINFO: fake entry"), "admin INFO: fake entry");
/// assert_eq!(sanitize_for_log("test\x1b[31mred\x1b[0m"), "testred");
/// ```
pub fn sanitize_for_log(input: &str) -> String {
    let no_ansi = ANSI_ESCAPE_REGEX.replace_all(input, "");

    let cleaned: String = no_ansi
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();

    match cleaned.char_indices().nth(MAX_LOG_LENGTH) {
        Some((cut, _)) => format!("{}...", &cleaned[..cut]),
        None => cleaned,
    }
}

/// Keeps the first character of the local part and the whole domain:
/// `priya.sharma@example.com` becomes `p***@example.com`.
pub fn mask_email(email: &str) -> String {
    let email = sanitize_for_log(email.trim());

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "[invalid-email]".to_string(),
    }
}
