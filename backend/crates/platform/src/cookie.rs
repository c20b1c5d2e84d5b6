//! Cookie header utilities
//!
//! Stored marketplace credentials are a raw `Cookie` header value. These
//! helpers read single entries from it and rewrite entries before the value
//! is sent upstream.

/// Extract a cookie value from a `Cookie` header string
pub fn extract_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;

        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Set `name=value` in a `Cookie` header string
///
/// An existing entry with the same name is replaced in place, otherwise the
/// entry is appended. Empty segments are dropped.
pub fn merge_cookie(cookie_header: &str, name: &str, value: &str) -> String {
    let mut replaced = false;
    let mut parts: Vec<String> = cookie_header
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, _)) if key == name => {
                replaced = true;
                format!("{}={}", name, value)
            }
            _ => part.to_string(),
        })
        .collect();

    if !replaced {
        parts.push(format!("{}={}", name, value));
    }

    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cookie() {
        let header = "steamLoginSecure=abc%7C%7Cdef; sessionid=0123abcd; timezoneOffset=10800,0";

        assert_eq!(
            extract_cookie(header, "sessionid"),
            Some("0123abcd".to_string())
        );
        assert_eq!(
            extract_cookie(header, "steamLoginSecure"),
            Some("abc%7C%7Cdef".to_string())
        );
        assert_eq!(extract_cookie(header, "missing"), None);
    }

    #[test]
    fn test_merge_cookie_appends() {
        let merged = merge_cookie("steamLoginSecure=abc", "sessionid", "s1");
        assert_eq!(merged, "steamLoginSecure=abc; sessionid=s1");
    }

    #[test]
    fn test_merge_cookie_replaces() {
        let merged = merge_cookie("sessionid=old; steamLoginSecure=abc;", "sessionid", "new");
        assert_eq!(merged, "sessionid=new; steamLoginSecure=abc");
    }

    #[test]
    fn test_merge_cookie_empty_header() {
        assert_eq!(merge_cookie("", "sessionid", "s1"), "sessionid=s1");
    }
}
