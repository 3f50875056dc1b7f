use regex::Regex;
use std::borrow::Cow;

/// Look up a query parameter anywhere in `uri`.
///
/// Returns `None` when the parameter does not appear, `Some("")` when it
/// appears without a value, and the decoded value otherwise (`+` is read as a
/// space before percent-decoding).
///
/// ```rust
/// use authdog::session::get_param_from_uri;
///
/// let uri = "https://www.example.com/path?param=value";
/// assert_eq!(get_param_from_uri(uri, "param").as_deref(), Some("value"));
/// assert_eq!(get_param_from_uri(uri, "param2"), None);
/// ```
pub fn get_param_from_uri(uri: &str, param: &str) -> Option<String> {
    let pattern = format!(r"[?&]{}(=([^&#]*)|&|#|$)", regex::escape(param));
    let re = Regex::new(&pattern).expect("escaped parameter name is a valid pattern");
    let caps = re.captures(uri)?;

    let Some(raw) = caps.get(2) else {
        return Some(String::new());
    };

    Some(decode_component(raw.as_str()))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes()))
            .into_owned(),
    }
}
