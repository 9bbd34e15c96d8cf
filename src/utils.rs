//! Placeholder expansion helpers.

/// Replaces environment variable placeholders in a string.
///
/// Placeholders use the format `${env:VAR_NAME}`. An unset variable is
/// replaced with an empty string. Incomplete placeholders and
/// placeholders with other prefixes are left untouched.
///
/// # Example
///
/// ```rust
/// use sitetool::utils::replace_env_placeholders;
///
/// unsafe { std::env::set_var("MY_VAR", "hello"); }
/// assert_eq!(replace_env_placeholders("Value: ${env:MY_VAR}"), "Value: hello");
/// ```
pub fn replace_env_placeholders(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let body = &rest[start + 2..];

        let Some(end) = body.find('}') else {
            // No closing brace, keep the tail as-is.
            result.push_str(&rest[start..]);
            return result;
        };

        let placeholder = &body[..end];
        if let Some(name) = placeholder.strip_prefix("env:") {
            if let Ok(value) = std::env::var(name) {
                debug!("using {name}={value}");
                result.push_str(&value);
            }
        } else {
            result.push_str("${");
            result.push_str(placeholder);
            result.push('}');
        }
        rest = &body[end + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_replace_env_placeholders() {
        unsafe {
            env::set_var("TEST_HOME", "/home/test");
            env::set_var("TEST_PATH", "/usr/local/bin");
        }

        assert_eq!(replace_env_placeholders("${env:TEST_HOME}"), "/home/test");

        assert_eq!(
            replace_env_placeholders("${env:TEST_HOME}:${env:TEST_PATH}"),
            "/home/test:/usr/local/bin"
        );

        // Unset variables become empty strings, not errors.
        assert_eq!(replace_env_placeholders("${env:NON_EXISTENT}"), "");

        assert_eq!(
            replace_env_placeholders("Path: ${env:TEST_HOME}/bin"),
            "Path: /home/test/bin"
        );

        // Placeholders with other prefixes stay untouched.
        assert_eq!(
            replace_env_placeholders("${not_env:placeholder}"),
            "${not_env:placeholder}"
        );

        assert_eq!(
            replace_env_placeholders("Just a normal string"),
            "Just a normal string"
        );

        assert_eq!(replace_env_placeholders(""), "");
    }

    #[test]
    fn test_malformed_placeholders() {
        assert_eq!(replace_env_placeholders("${"), "${");
        assert_eq!(replace_env_placeholders("${env"), "${env");
        assert_eq!(replace_env_placeholders("${env:VAR"), "${env:VAR");
        assert_eq!(replace_env_placeholders("{env:VAR}"), "{env:VAR}");
        assert_eq!(replace_env_placeholders("$"), "$");

        unsafe {
            env::set_var("TEST_TRAILING", "value");
        }
        assert_eq!(replace_env_placeholders("${env:TEST_TRAILING}}"), "value}");
    }

    #[test]
    fn test_empty_values() {
        // Empty variable name resolves to nothing.
        assert_eq!(replace_env_placeholders("${env:}"), "");

        unsafe {
            env::set_var("TEST_EMPTY", "");
        }
        assert_eq!(replace_env_placeholders("${env:TEST_EMPTY}"), "");
    }
}
