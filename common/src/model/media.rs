use serde::{Deserialize, Serialize};

/// An image field as stored by the content backend: either a bare URL string
/// (older rows) or a structured object with optional file metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Bare(String),
    Structured {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
}

/// File metadata carried by a structured image reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageMetadata<'a> {
    pub filename: Option<&'a str>,
    pub size: Option<u64>,
    pub mime_type: Option<&'a str>,
}

impl ImageRef {
    pub fn url(&self) -> &str {
        match self {
            ImageRef::Bare(url) => url,
            ImageRef::Structured { url, .. } => url,
        }
    }

    /// Metadata of a structured reference; `None` for bare URLs and for
    /// structured references that carry nothing but the URL.
    pub fn metadata(&self) -> Option<ImageMetadata<'_>> {
        match self {
            ImageRef::Bare(_) => None,
            ImageRef::Structured {
                filename,
                size,
                mime_type,
                ..
            } => {
                if filename.is_none() && size.is_none() && mime_type.is_none() {
                    return None;
                }
                Some(ImageMetadata {
                    filename: filename.as_deref(),
                    size: *size,
                    mime_type: mime_type.as_deref(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_parses_as_bare() {
        let image: ImageRef = serde_json::from_str("\"https://cdn.example/a.jpg\"").unwrap();
        assert_eq!(image, ImageRef::Bare("https://cdn.example/a.jpg".to_string()));
        assert_eq!(image.url(), "https://cdn.example/a.jpg");
        assert!(image.metadata().is_none());
    }

    #[test]
    fn structured_object_exposes_metadata() {
        let image: ImageRef = serde_json::from_str(
            r#"{"url":"https://cdn.example/hero.jpg","filename":"hero.jpg","size":2048,"type":"image/jpeg"}"#,
        )
        .unwrap();
        assert_eq!(image.url(), "https://cdn.example/hero.jpg");
        let meta = image.metadata().unwrap();
        assert_eq!(meta.filename, Some("hero.jpg"));
        assert_eq!(meta.size, Some(2048));
        assert_eq!(meta.mime_type, Some("image/jpeg"));
    }

    #[test]
    fn structured_object_without_metadata_has_none() {
        let image: ImageRef = serde_json::from_str(r#"{"url":"/media/a.png"}"#).unwrap();
        assert_eq!(image.url(), "/media/a.png");
        assert!(image.metadata().is_none());
    }

    #[test]
    fn object_without_url_is_rejected() {
        assert!(serde_json::from_str::<ImageRef>(r#"{"filename":"a.png"}"#).is_err());
    }
}
