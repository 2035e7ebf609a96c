/// Parse a `KEY=VALUE` environment descriptor entry.
///
/// The value may be empty and may itself contain `=`; the key may not be
/// empty or contain whitespace.
///
/// # Errors
///
/// Returns an error message if there is no `=` or the key is invalid.
pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got '{}'", s));
    };

    if key.is_empty() {
        return Err(format!("environment key cannot be empty: '{}'", s));
    }

    if key.chars().any(char::is_whitespace) {
        return Err(format!("environment key cannot contain whitespace: '{}'", key));
    }

    Ok((key.to_string(), value.to_string()))
}
