use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::server::{
    config::CloudinaryConfig,
    error::upload::UploadError,
    image_host::{ImageFile, ImageHost, UploadedImage},
};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    width: Option<u32>,
    height: Option<u32>,
    format: Option<String>,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Signed upload client for the Cloudinary REST API.
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(http: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{}/image/{}", API_BASE, self.config.cloud_name, action)
    }

    /// Signs the parameters as `k1=v1&k2=v2<secret>` with keys sorted, hex encoded SHA-1.
    pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
        let mut sorted = params.to_vec();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let joined = sorted
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha1::new();
        hasher.update(joined.as_bytes());
        hasher.update(api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    async fn rejected(response: reqwest::Response) -> UploadError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        UploadError::Rejected { status, message }
    }
}

#[async_trait]
impl ImageHost for CloudinaryClient {
    async fn upload(&self, file: ImageFile) -> Result<UploadedImage, UploadError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = Self::sign(
            &[
                ("folder", self.config.folder.as_str()),
                ("timestamp", timestamp.as_str()),
            ],
            &self.config.api_secret,
        );

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;

        let form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.config.folder.clone())
            .text("signature", signature);

        let response = self
            .http
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        tracing::debug!(public_id = %body.public_id, file_name = %file.file_name, "Uploaded image");

        Ok(UploadedImage {
            url: body.secure_url,
            public_id: body.public_id,
            width: body.width,
            height: body.height,
            format: body.format,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<bool, UploadError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = Self::sign(
            &[("public_id", public_id), ("timestamp", timestamp.as_str())],
            &self.config.api_secret,
        );

        let response = self
            .http
            .post(self.endpoint("destroy"))
            .form(&[
                ("public_id", public_id),
                ("api_key", self.config.api_key.as_str()),
                ("timestamp", timestamp.as_str()),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        Ok(body.result == "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_sorted_parameters() {
        let unordered = CloudinaryClient::sign(&[("timestamp", "1315060510"), ("folder", "trips")], "secret");
        let ordered = CloudinaryClient::sign(&[("folder", "trips"), ("timestamp", "1315060510")], "secret");

        assert_eq!(unordered, ordered);
        assert_eq!(unordered.len(), 40);
    }

    #[test]
    fn signature_matches_known_digest() {
        // sha1("public_id=sample&timestamp=1315060510abcd")
        let signature = CloudinaryClient::sign(
            &[("public_id", "sample"), ("timestamp", "1315060510")],
            "abcd",
        );

        let mut hasher = Sha1::new();
        hasher.update(b"public_id=sample&timestamp=1315060510abcd");
        assert_eq!(signature, hex::encode(hasher.finalize()));
    }
}
