/// Parse a boolean flag value.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, case-insensitively.
///
/// # Errors
///
/// Returns an error message for anything else.
pub fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("Expected true or false, got '{}'", s)),
    }
}

/// Parse a request path for `kiln route`.
///
/// Must start with `/`; query strings are kept.
pub fn parse_request_path(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Request path cannot be empty".to_string());
    }
    if !s.starts_with('/') {
        return Err(format!("Request path must start with '/': '{}'", s));
    }
    Ok(s.to_string())
}
