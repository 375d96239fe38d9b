use axum::extract::Multipart;
use std::collections::{BTreeMap, HashMap};

use crate::server::{error::AppError, image_host::ImageFile};

/// Splits `prefix[index].attr` into its index and attribute.
///
/// Returns `None` for any other shape, including a missing attribute.
pub fn parse_indexed<'a>(prefix: &str, name: &'a str) -> Option<(usize, &'a str)> {
    let rest = name.strip_prefix(prefix)?.strip_prefix('[')?;
    let (index, attr) = rest.split_once("].")?;
    let index = index.parse().ok()?;

    if attr.is_empty() {
        return None;
    }

    Some((index, attr))
}

/// One indexed group of parts, e.g. everything under `images[2]`.
#[derive(Debug, Default)]
pub struct IndexedPart {
    pub file: Option<ImageFile>,
    pub text: HashMap<String, String>,
}

impl IndexedPart {
    pub fn text(&self, attr: &str) -> Option<&str> {
        self.text.get(attr).map(String::as_str)
    }
}

/// Parts of a multipart body grouped by their index, in ascending index order.
#[derive(Debug, Default)]
pub struct IndexedParts {
    entries: BTreeMap<usize, IndexedPart>,
}

impl IndexedParts {
    pub fn insert_text(&mut self, index: usize, attr: &str, value: String) {
        self.entries
            .entry(index)
            .or_default()
            .text
            .insert(attr.to_string(), value);
    }

    pub fn insert_file(&mut self, index: usize, file: ImageFile) {
        self.entries.entry(index).or_default().file = Some(file);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_parts(self) -> impl Iterator<Item = (usize, IndexedPart)> {
        self.entries.into_iter()
    }
}

/// A multipart body split into plain text fields and indexed groups.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub indexed: IndexedParts,
}

/// Drains a multipart body, grouping `prefix[i].file` uploads and `prefix[i].<attr>`
/// text values by index. Other fields are kept as plain text.
pub async fn read_form(mut multipart: Multipart, prefix: &str) -> Result<MultipartForm, AppError> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match parse_indexed(prefix, &name) {
            Some((index, "file")) => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await?;

                form.indexed.insert_file(
                    index,
                    ImageFile {
                        file_name,
                        content_type,
                        bytes,
                    },
                );
            }
            Some((index, attr)) => {
                let attr = attr.to_string();
                let value = field.text().await?;
                form.indexed.insert_text(index, &attr, value);
            }
            None => {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn parses_indexed_field_names() {
        assert_eq!(parse_indexed("images", "images[0].file"), Some((0, "file")));
        assert_eq!(
            parse_indexed("images", "images[12].alt_text"),
            Some((12, "alt_text"))
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parse_indexed("images", "payload"), None);
        assert_eq!(parse_indexed("images", "images[x].file"), None);
        assert_eq!(parse_indexed("images", "images[1]"), None);
        assert_eq!(parse_indexed("images", "images[1]."), None);
        assert_eq!(parse_indexed("images", "photos[1].file"), None);
    }

    #[test]
    fn groups_parts_in_index_order() {
        let mut parts = IndexedParts::default();
        parts.insert_text(2, "alt_text", "Sunset".to_string());
        parts.insert_file(
            0,
            ImageFile {
                file_name: "beach.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: Bytes::from_static(b"jpeg"),
            },
        );
        parts.insert_text(0, "alt_text", "Beach".to_string());

        let groups: Vec<_> = parts.into_parts().collect();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 0);
        assert!(groups[0].1.file.is_some());
        assert_eq!(groups[0].1.text("alt_text"), Some("Beach"));
        assert_eq!(groups[1].0, 2);
        assert!(groups[1].1.file.is_none());
    }
}
