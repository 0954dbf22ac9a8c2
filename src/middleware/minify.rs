use axum::{body::Body, response::Response};
use std::sync::LazyLock;

static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_doctype: false,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

pub fn minify(html: &[u8]) -> Vec<u8> {
    minify_html::minify(html, &MINIFY_CFG)
}

/// Minifies `text/html` responses in release builds.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            use axum::{body::to_bytes, http::header};

            let is_html = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|h| h.to_str().ok())
                .is_some_and(|content_type| content_type.contains("text/html"));

            if is_html {
                let (mut parts, body) = response.into_parts();
                let bytes = match to_bytes(body, usize::MAX).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to buffer HTML response");
                        return Response::from_parts(parts, Body::empty());
                    }
                };
                parts.headers.remove(header::CONTENT_LENGTH);

                return Response::from_parts(parts, Body::from(minify(&bytes)));
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_keeps_content() {
        let html = b"<html>\n  <body>\n    <p>  Get in Touch  </p>\n  </body>\n</html>";
        let minified = String::from_utf8(minify(html)).unwrap();

        assert!(minified.len() < html.len());
        assert!(minified.contains("Get in Touch"));
        assert!(minified.contains("</p>"));
    }
}
