/// Join the API base URL with a server-relative path.
///
/// Leading slashes on `path` are dropped so both `/opts/k8s` and
/// `opts/k8s` resolve under the base URL.
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_slash() {
        assert_eq!(join_url("http://api", "/opts/k8s"), "http://api/opts/k8s");
        assert_eq!(join_url("http://api/", "opts/k8s"), "http://api/opts/k8s");
    }

    #[test]
    fn keeps_absolute_urls() {
        assert_eq!(join_url("http://api", "https://other/x"), "https://other/x");
    }

    #[test]
    fn empty_path_is_base() {
        assert_eq!(join_url("http://api", "/"), "http://api");
    }
}
