//! Delivery URL assembly.
//!
//! The remote service addresses a stored asset as
//! `https://<host>/<cloud>/<kind>/upload/<resource id>.<ext>`; a compiled
//! directive string is spliced immediately after the `/upload/` marker.
//! The directive characters are URL-safe by construction, so no escaping
//! happens here.

use crate::error::{ClipforgeError, ClipforgeResult};

const UPLOAD_MARKER: &str = "/upload/";

/// Insert `directive` into `base_delivery_url` after the `/upload/` marker.
///
/// An empty directive returns the base URL unchanged. A base URL without
/// the marker is a caller bug (the gateway always returns marked URLs) and
/// is reported as a precondition error.
pub fn assemble(base_delivery_url: &str, directive: &str) -> ClipforgeResult<String> {
    if directive.is_empty() {
        return Ok(base_delivery_url.to_string());
    }

    let Some(idx) = base_delivery_url.find(UPLOAD_MARKER) else {
        return Err(ClipforgeError::precondition(format!(
            "delivery URL has no '{UPLOAD_MARKER}' marker: {base_delivery_url}"
        )));
    };

    let split = idx + UPLOAD_MARKER.len();
    Ok(format!(
        "{}{}/{}",
        &base_delivery_url[..split],
        directive,
        &base_delivery_url[split..]
    ))
}

/// Canonical base delivery URL for an uploaded resource.
pub fn delivery_base(cloud_name: &str, resource_kind: &str, resource_id: &str) -> String {
    format!("https://res.mediacloud.com/{cloud_name}/{resource_kind}/upload/{resource_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splices_after_upload_marker() {
        let url = assemble(
            "https://res.mediacloud.com/demo/video/upload/abc123.mp4",
            "e_reverse,fl_loop",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://res.mediacloud.com/demo/video/upload/e_reverse,fl_loop/abc123.mp4"
        );
    }

    #[test]
    fn empty_directive_returns_base() {
        let base = "https://res.mediacloud.com/demo/video/upload/abc123.mp4";
        assert_eq!(assemble(base, "").unwrap(), base);
    }

    #[test]
    fn chained_stages_keep_their_slashes() {
        let url = assemble(
            "https://res.mediacloud.com/demo/image/upload/pic.jpg",
            "e_zoompan:center/w_1920,h_1080,f_mp4",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://res.mediacloud.com/demo/image/upload/e_zoompan:center/w_1920,h_1080,f_mp4/pic.jpg"
        );
    }

    #[test]
    fn missing_marker_is_a_precondition_error() {
        let err = assemble("https://example.com/no-marker.mp4", "w_100").unwrap_err();
        assert!(err.to_string().contains("precondition"));
    }

    #[test]
    fn delivery_base_contains_marker() {
        let base = delivery_base("demo", "video", "abc123.mp4");
        assert!(base.contains("/upload/"));
        assert!(base.ends_with("abc123.mp4"));
    }
}
