use axum::http::{header::HOST, HeaderMap, Uri};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Absolute URL for a stored artifact, built from the request's scheme and host.
pub fn artifact_url(headers: &HeaderMap, uri: &Uri, public_path: &str) -> String {
    format!("{}://{}{}", scheme(headers), host(headers, uri), public_path)
}

fn scheme(headers: &HeaderMap) -> &'static str {
    let forwarded = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().eq_ignore_ascii_case("https"))
        .unwrap_or(false);

    if forwarded {
        "https"
    } else {
        "http"
    }
}

fn host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_url_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("media.local:8080"));
        let uri: Uri = "/upload_avatar_base64".parse().unwrap();

        assert_eq!(
            artifact_url(&headers, &uri, "/avatars/abc.png"),
            "http://media.local:8080/avatars/abc.png"
        );
    }

    #[test]
    fn test_url_honours_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));
        let uri: Uri = "/upload_file_base64".parse().unwrap();

        assert_eq!(
            artifact_url(&headers, &uri, "/file/abc.txt"),
            "https://example.com/file/abc.txt"
        );
    }

    #[test]
    fn test_url_falls_back_to_uri_authority() {
        let headers = HeaderMap::new();
        let uri: Uri = "http://10.0.0.5:9000/upload_file_base64".parse().unwrap();
        assert_eq!(
            artifact_url(&headers, &uri, "/file/abc"),
            "http://10.0.0.5:9000/file/abc"
        );

        let uri: Uri = "/upload_file_base64".parse().unwrap();
        assert_eq!(artifact_url(&headers, &uri, "/file/abc"), "http://localhost/file/abc");
    }
}
