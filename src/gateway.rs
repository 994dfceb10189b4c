//! Upload/resource gateway for the remote media API.
//!
//! The one I/O-bearing collaborator around the pure core: multipart upload
//! of a local file, deletion, and metadata lookup. No retry, cancellation,
//! or timeout policy lives here; a caller that wants those wraps the
//! futures itself.

use std::path::Path;

use crate::error::{ClipforgeError, ClipforgeResult};

/// Identifier and addressing data returned by a successful upload.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedResource {
    pub resource_id: String,
    pub delivery_url: String,
    pub format: String,
}

/// Remote-side metadata for a stored resource.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    pub resource_id: String,
    pub format: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub bytes: Option<u64>,
}

pub struct MediaGateway {
    http: reqwest::Client,
    api_base: String,
    cloud_name: String,
    upload_preset: String,
}

impl MediaGateway {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self::with_api_base("https://api.mediacloud.com/v1", cloud_name, upload_preset)
    }

    /// Point the gateway at a non-default API host (test servers, regional
    /// endpoints).
    pub fn with_api_base(
        api_base: impl Into<String>,
        cloud_name: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
        }
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    fn endpoint(&self, tail: &str) -> String {
        format!("{}/{}/{tail}", self.api_base, self.cloud_name)
    }

    /// Upload one media file, returning its resource id and base delivery
    /// URL. The caller compiles directives separately and splices them with
    /// [`crate::url::assemble`].
    #[tracing::instrument(skip(self), fields(cloud = %self.cloud_name))]
    pub async fn upload(&self, path: &Path) -> ClipforgeResult<UploadedResource> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClipforgeError::gateway(format!("read '{}': {e}", path.display())))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.bin".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.as_ref())
            .map_err(|e| ClipforgeError::gateway(format!("mime '{mime}': {e}")))?;
        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", part);

        tracing::info!(path = %path.display(), %mime, "uploading media file");

        let response = self
            .http
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClipforgeError::gateway(format!("upload request failed: {e}")))?;

        let response = check_status(response).await?;
        let resource: UploadedResource = response
            .json()
            .await
            .map_err(|e| ClipforgeError::gateway(format!("decode upload response: {e}")))?;

        tracing::info!(resource_id = %resource.resource_id, "upload complete");
        Ok(resource)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, resource_id: &str) -> ClipforgeResult<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("resources/{resource_id}")))
            .send()
            .await
            .map_err(|e| ClipforgeError::gateway(format!("delete request failed: {e}")))?;
        check_status(response).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_info(&self, resource_id: &str) -> ClipforgeResult<ResourceInfo> {
        let response = self
            .http
            .get(self.endpoint(&format!("resources/{resource_id}")))
            .send()
            .await
            .map_err(|e| ClipforgeError::gateway(format!("info request failed: {e}")))?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClipforgeError::gateway(format!("decode info response: {e}")))
    }
}

async fn check_status(response: reqwest::Response) -> ClipforgeResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClipforgeError::gateway(format!(
        "remote returned {status}: {body}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_scoped_to_the_cloud() {
        let gw = MediaGateway::with_api_base("https://api.test/v1/", "demo", "unsigned");
        assert_eq!(gw.endpoint("upload"), "https://api.test/v1/demo/upload");
        assert_eq!(
            gw.endpoint("resources/abc"),
            "https://api.test/v1/demo/resources/abc"
        );
    }

    #[test]
    fn upload_response_decodes_camel_case() {
        let json = r#"{
            "resourceId": "abc123",
            "deliveryUrl": "https://res.mediacloud.com/demo/video/upload/abc123.mp4",
            "format": "mp4"
        }"#;
        let resource: UploadedResource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.resource_id, "abc123");
        assert_eq!(resource.format, "mp4");
    }

    #[test]
    fn resource_info_tolerates_missing_media_fields() {
        let json = r#"{"resourceId": "abc123", "format": "gif"}"#;
        let info: ResourceInfo = serde_json::from_str(json).unwrap();
        assert!(info.width.is_none());
        assert!(info.duration.is_none());
    }
}
