//! Typed payload objects.
//!
//! Objects are a closed set of kinds. Processes and the HTTP adapter branch
//! on [`ObjectKind`], so adding a kind is a deliberate, compiler-checked change.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Extensions treated as UTF-8 text when loading a file.
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "text", "csv", "tsv", "md", "log", "xml", "html", "yaml", "yml",
];

/// Extensions treated as images when loading a file.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

/// Errors raised while loading or saving objects.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The object could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Kind discriminant for [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Dictionary,
    Array,
    Text,
    Image,
    Pdf,
    Binary,
}

impl ObjectKind {
    /// Stable lowercase name, as used in JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::Array => "array",
            Self::Text => "text",
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value carried by an [`Object`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    Dictionary(Map<String, Value>),
    Array(Vec<Value>),
    Text(String),
    /// Encoded image bytes and the extension (without dot) they were read with.
    Image { bytes: Vec<u8>, extension: String },
    Pdf(Vec<u8>),
    Binary {
        bytes: Vec<u8>,
        extension: Option<String>,
    },
}

/// A named, typed value inside a [`crate::Payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    name: String,
    data: ObjectData,
}

impl Object {
    /// Create an object with an explicit name.
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Build an object from an arbitrary JSON value.
    ///
    /// Strings stay text, maps become dictionaries, arrays stay arrays and
    /// scalars are kept as their JSON rendering. `null` is not convertible.
    pub fn from_value(value: Value) -> Option<Self> {
        let data = match value {
            Value::Null => return None,
            Value::String(text) => ObjectData::Text(text),
            Value::Object(map) => ObjectData::Dictionary(map),
            Value::Array(items) => ObjectData::Array(items),
            scalar @ (Value::Bool(_) | Value::Number(_)) => ObjectData::Text(scalar.to_string()),
        };
        Some(Self::new(String::new(), data))
    }

    /// Classify raw file content by its extension.
    pub fn from_bytes(extension: Option<&str>, bytes: Vec<u8>) -> Self {
        let ext = extension.map(str::to_ascii_lowercase);
        let data = match ext.as_deref() {
            Some("json") => match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(map)) => ObjectData::Dictionary(map),
                Ok(Value::Array(items)) => ObjectData::Array(items),
                _ => ObjectData::Binary {
                    bytes,
                    extension: ext,
                },
            },
            Some("pdf") => ObjectData::Pdf(bytes),
            Some(e) if IMAGE_EXTENSIONS.contains(&e) => ObjectData::Image {
                bytes,
                extension: e.to_string(),
            },
            Some(e) if TEXT_EXTENSIONS.contains(&e) => match String::from_utf8(bytes) {
                Ok(text) => ObjectData::Text(text),
                Err(err) => ObjectData::Binary {
                    bytes: err.into_bytes(),
                    extension: ext,
                },
            },
            _ => ObjectData::Binary {
                bytes,
                extension: ext,
            },
        };
        Self::new(String::new(), data)
    }

    /// Read a file and classify it by extension.
    pub async fn open(path: &Path) -> Result<Self, ObjectError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ObjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path.extension().and_then(|e| e.to_str());
        let mut object = Self::from_bytes(extension, bytes);
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            object.name = stem.to_string();
        }
        Ok(object)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub const fn data(&self) -> &ObjectData {
        &self.data
    }

    pub const fn kind(&self) -> ObjectKind {
        match self.data {
            ObjectData::Dictionary(_) => ObjectKind::Dictionary,
            ObjectData::Array(_) => ObjectKind::Array,
            ObjectData::Text(_) => ObjectKind::Text,
            ObjectData::Image { .. } => ObjectKind::Image,
            ObjectData::Pdf(_) => ObjectKind::Pdf,
            ObjectData::Binary { .. } => ObjectKind::Binary,
        }
    }

    /// Extension (with leading dot) used when saving this object.
    pub fn default_extension(&self) -> String {
        match &self.data {
            ObjectData::Dictionary(_) | ObjectData::Array(_) => ".json".to_string(),
            ObjectData::Text(_) => ".txt".to_string(),
            ObjectData::Image { extension, .. } if !extension.is_empty() => {
                format!(".{extension}")
            }
            ObjectData::Image { .. } => ".png".to_string(),
            ObjectData::Pdf(_) => ".pdf".to_string(),
            ObjectData::Binary {
                extension: Some(ext),
                ..
            } if !ext.is_empty() => format!(".{ext}"),
            ObjectData::Binary { .. } => ".bin".to_string(),
        }
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> Result<usize, ObjectError> {
        Ok(self.to_bytes()?.len())
    }

    fn to_bytes(&self) -> Result<Vec<u8>, ObjectError> {
        let bytes = match &self.data {
            ObjectData::Dictionary(map) => serde_json::to_vec_pretty(map)?,
            ObjectData::Array(items) => serde_json::to_vec_pretty(items)?,
            ObjectData::Text(text) => text.as_bytes().to_vec(),
            ObjectData::Image { bytes, .. }
            | ObjectData::Pdf(bytes)
            | ObjectData::Binary { bytes, .. } => bytes.clone(),
        };
        Ok(bytes)
    }

    /// Write the object to `path`.
    pub async fn save(&self, path: &Path) -> Result<(), ObjectError> {
        let bytes = self.to_bytes()?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| ObjectError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_keeps_type() {
        let text = Object::from_value(json!("hello")).unwrap();
        assert_eq!(text.kind(), ObjectKind::Text);

        let dict = Object::from_value(json!({"a": 1})).unwrap();
        assert_eq!(dict.kind(), ObjectKind::Dictionary);

        let array = Object::from_value(json!([1, 2])).unwrap();
        assert_eq!(array.kind(), ObjectKind::Array);

        let number = Object::from_value(json!(42)).unwrap();
        assert_eq!(number.data(), &ObjectData::Text("42".to_string()));

        assert!(Object::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_from_bytes_classifies_by_extension() {
        let dict = Object::from_bytes(Some("json"), br#"{"k": "v"}"#.to_vec());
        assert_eq!(dict.kind(), ObjectKind::Dictionary);

        let array = Object::from_bytes(Some("JSON"), b"[1, 2, 3]".to_vec());
        assert_eq!(array.kind(), ObjectKind::Array);

        let broken = Object::from_bytes(Some("json"), b"{not json".to_vec());
        assert_eq!(broken.kind(), ObjectKind::Binary);
        assert_eq!(broken.default_extension(), ".json");

        let image = Object::from_bytes(Some("PNG"), vec![0x89, b'P', b'N', b'G']);
        assert_eq!(image.kind(), ObjectKind::Image);
        assert_eq!(image.default_extension(), ".png");

        let pdf = Object::from_bytes(Some("pdf"), b"%PDF-1.4".to_vec());
        assert_eq!(pdf.kind(), ObjectKind::Pdf);

        let text = Object::from_bytes(Some("txt"), b"plain".to_vec());
        assert_eq!(text.data(), &ObjectData::Text("plain".to_string()));

        let not_utf8 = Object::from_bytes(Some("txt"), vec![0xff, 0xfe]);
        assert_eq!(not_utf8.kind(), ObjectKind::Binary);

        let unknown = Object::from_bytes(None, vec![1, 2, 3]);
        assert_eq!(unknown.default_extension(), ".bin");
    }

    #[test]
    fn test_default_extensions() {
        let dict = Object::new("result", ObjectData::Dictionary(Map::new()));
        assert_eq!(dict.default_extension(), ".json");

        let text = Object::new("note", ObjectData::Text(String::new()));
        assert_eq!(text.default_extension(), ".txt");

        let pdf = Object::new("doc", ObjectData::Pdf(Vec::new()));
        assert_eq!(pdf.default_extension(), ".pdf");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ObjectKind::Dictionary).unwrap();
        assert_eq!(json, "\"dictionary\"");
        assert_eq!(ObjectKind::Pdf.to_string(), "pdf");
    }

    #[tokio::test]
    async fn test_save_and_open_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");

        let mut map = Map::new();
        map.insert("score".to_string(), json!(0.5));
        let object = Object::new("result", ObjectData::Dictionary(map.clone()));
        object.save(&path).await.unwrap();

        let loaded = Object::open(&path).await.unwrap();
        assert_eq!(loaded.name(), "result");
        assert_eq!(loaded.data(), &ObjectData::Dictionary(map));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let object = Object::new("out", ObjectData::Text("x".to_string()));

        let err = object.save(&path).await.unwrap_err();
        assert!(matches!(err, ObjectError::Io { .. }));
    }
}
