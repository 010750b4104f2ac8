use urlencoding::encode;

/// Build the query string used to request the next options page.
///
/// Every pair is prefixed with `&`, so `[("region", "us-east1")]` becomes
/// `?&region=us-east1`. No pairs yields an empty string.
pub fn build_options_query(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let mut out = String::from("?");
    for (k, v) in pairs {
        out.push('&');
        out.push_str(&encode(k));
        out.push('=');
        out.push_str(&encode(v));
    }
    out
}
