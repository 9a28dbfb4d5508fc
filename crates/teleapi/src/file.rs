//! Media sources attached to requests.
//!
//! A source either has to be uploaded as a multipart part ([`UploadFile`]) or
//! is referenced by a string the server resolves ([`InlineFile`]). Only the
//! first can be opened and only the second has an inline value.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use tokio::io::AsyncRead;

use crate::error::{Error, Result};
use crate::params::Params;

pub type BoxedReader = Box<dyn AsyncRead + Send + Sync + Unpin>;

#[derive(Debug, Clone)]
pub enum InputFile {
    Upload(UploadFile),
    Inline(InlineFile),
}

impl InputFile {
    /// A file on the local filesystem, opened when the request is sent.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Upload(UploadFile::Path(path.into()))
    }

    pub fn bytes(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self::Upload(UploadFile::Bytes {
            name: name.into(),
            data: data.into(),
        })
    }

    /// A caller-supplied stream. It can be sent once; later sends fail.
    pub fn reader(name: impl Into<String>, reader: impl AsyncRead + Send + Sync + Unpin + 'static) -> Self {
        Self::Upload(UploadFile::Reader {
            name: name.into(),
            reader: SharedReader::new(Box::new(reader)),
        })
    }

    /// A URL the server downloads the file from.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Inline(InlineFile(InlineKind::Url(url.into())))
    }

    /// A file already stored on the server.
    pub fn file_id(file_id: impl Into<String>) -> Self {
        Self::Inline(InlineFile(InlineKind::FileId(file_id.into())))
    }

    pub fn requires_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    pub fn as_inline(&self) -> Option<&InlineFile> {
        match self {
            Self::Inline(inline) => Some(inline),
            Self::Upload(_) => None,
        }
    }

    pub fn as_upload(&self) -> Option<&UploadFile> {
        match self {
            Self::Upload(upload) => Some(upload),
            Self::Inline(_) => None,
        }
    }
}

/// Inline files encode as their string value. Upload files have no JSON form
/// and must be swapped for an attachment placeholder first.
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Inline(inline) => serializer.serialize_str(inline.value()),
            Self::Upload(upload) => Err(S::Error::custom(format!(
                "file `{}` must be uploaded as a multipart attachment",
                upload.name()
            ))),
        }
    }
}

/// A reference resolved by the server: URL, file id or `attach://` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFile(InlineKind);

#[derive(Debug, Clone, PartialEq, Eq)]
enum InlineKind {
    Url(String),
    FileId(String),
    Attach(String),
}

impl InlineFile {
    /// Placeholder pointing at the multipart part called `name`.
    pub(crate) fn attach(name: &str) -> Self {
        Self(InlineKind::Attach(format!("attach://{name}")))
    }

    /// The string sent in place of file contents.
    pub fn value(&self) -> &str {
        match &self.0 {
            InlineKind::Url(value) | InlineKind::FileId(value) | InlineKind::Attach(value) => {
                value
            }
        }
    }

    pub fn is_attachment(&self) -> bool {
        matches!(self.0, InlineKind::Attach(_))
    }
}

#[derive(Debug, Clone)]
pub enum UploadFile {
    Path(PathBuf),
    Bytes { name: String, data: Bytes },
    Reader { name: String, reader: SharedReader },
}

impl UploadFile {
    /// File name reported in the multipart part.
    pub fn name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map_or_else(|| "file".to_string(), |name| name.to_string_lossy().into_owned()),
            Self::Bytes { name, .. } | Self::Reader { name, .. } => name.clone(),
        }
    }

    /// Opens the source for reading. Paths are opened here, not at construction.
    pub async fn open(&self) -> Result<Upload> {
        let name = self.name();
        let body = match self {
            Self::Path(path) => open_path(path).await?,
            Self::Bytes { data, .. } => UploadBody::Bytes(data.clone()),
            Self::Reader { reader, .. } => UploadBody::Reader {
                reader: reader.take()?,
                length: None,
            },
        };
        Ok(Upload { name, body })
    }
}

async fn open_path(path: &Path) -> Result<UploadBody> {
    let io_error = |source| Error::Io {
        path: Some(path.to_path_buf()),
        source,
    };
    let file = tokio::fs::File::open(path).await.map_err(io_error)?;
    let length = file.metadata().await.map_err(io_error)?.len();
    Ok(UploadBody::Reader {
        reader: Box::new(file),
        length: Some(length),
    })
}

/// A stream shared between clones of a request; the first `open` takes it.
#[derive(Clone)]
pub struct SharedReader(Arc<Mutex<Option<BoxedReader>>>);

impl SharedReader {
    fn new(reader: BoxedReader) -> Self {
        Self(Arc::new(Mutex::new(Some(reader))))
    }

    fn take(&self) -> Result<BoxedReader> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or_else(|| Error::Io {
                path: None,
                source: io::Error::other("upload stream was already consumed"),
            })
    }
}

impl fmt::Debug for SharedReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedReader")
    }
}

/// An opened upload ready to become a multipart part.
pub struct Upload {
    pub name: String,
    pub body: UploadBody,
}

pub enum UploadBody {
    Bytes(Bytes),
    Reader {
        reader: BoxedReader,
        length: Option<u64>,
    },
}

/// A file part of a multipart request: field name plus upload source.
#[derive(Debug, Clone)]
pub struct RequestFile {
    pub name: String,
    pub file: UploadFile,
}

impl RequestFile {
    pub fn new(name: impl Into<String>, file: UploadFile) -> Self {
        Self {
            name: name.into(),
            file,
        }
    }
}

/// Parts for every field whose file must be uploaded.
///
/// Fields holding inline files or `None` contribute nothing; their value goes
/// through [`Params::add_inline_file`].
pub fn upload_parts<'a>(
    fields: impl IntoIterator<Item = (&'a str, Option<&'a InputFile>)>,
) -> Vec<RequestFile> {
    fields
        .into_iter()
        .filter_map(|(name, file)| match file? {
            InputFile::Upload(upload) => Some(RequestFile::new(name, upload.clone())),
            InputFile::Inline(_) => None,
        })
        .collect()
}

impl Params {
    /// Writes the inline value of `file`; upload files are left to the parts.
    pub fn add_inline_file(&mut self, key: &str, file: &InputFile) {
        if let InputFile::Inline(inline) = file {
            self.insert(key, inline.value());
        }
    }

    /// [`Params::add_inline_file`] over the same field list given to [`upload_parts`].
    pub fn add_inline_files<'a>(
        &mut self,
        fields: impl IntoIterator<Item = (&'a str, Option<&'a InputFile>)>,
    ) {
        for (key, file) in fields {
            if let Some(file) = file {
                self.add_inline_file(key, file);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    async fn read_all(body: UploadBody) -> Vec<u8> {
        match body {
            UploadBody::Bytes(data) => data.to_vec(),
            UploadBody::Reader { mut reader, .. } => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf).await.unwrap();
                buf
            }
        }
    }

    #[test]
    fn test_requires_upload_by_variant() {
        assert!(InputFile::path("a.jpg").requires_upload());
        assert!(InputFile::bytes("a.jpg", vec![1, 2]).requires_upload());
        assert!(InputFile::reader("a.bin", &b"xyz"[..]).requires_upload());
        assert!(!InputFile::url("https://example.com/a.jpg").requires_upload());
        assert!(!InputFile::file_id("AgAD").requires_upload());
    }

    #[test]
    fn test_inline_value_is_stable() {
        let file = InputFile::url("https://example.com/a.jpg");
        let inline = file.as_inline().unwrap();
        assert_eq!(inline.value(), "https://example.com/a.jpg");
        assert_eq!(inline.value(), inline.value());
        assert_eq!(
            serde_json::to_string(&file).unwrap(),
            "\"https://example.com/a.jpg\""
        );
        assert_eq!(InlineFile::attach("file-0").value(), "attach://file-0");
        assert!(InlineFile::attach("file-0").is_attachment());
    }

    #[test]
    fn test_upload_file_cannot_be_serialized() {
        let file = InputFile::bytes("photo.jpg", vec![0]);
        let err = serde_json::to_string(&file).unwrap_err();
        assert!(err.to_string().contains("photo.jpg"));
    }

    #[test]
    fn test_upload_names() {
        assert_eq!(UploadFile::Path(PathBuf::from("/tmp/cat.png")).name(), "cat.png");
        assert_eq!(UploadFile::Path(PathBuf::from("/")).name(), "file");
    }

    #[tokio::test]
    async fn test_open_path_reads_at_open_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let file = UploadFile::Path(path.clone());

        std::fs::write(&path, b"hello").unwrap();
        let upload = file.open().await.unwrap();
        assert_eq!(upload.name, "note.txt");
        assert!(matches!(upload.body, UploadBody::Reader { length: Some(5), .. }));
        assert_eq!(read_all(upload.body).await, b"hello");
    }

    #[tokio::test]
    async fn test_open_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.jpg");
        let err = UploadFile::Path(path.clone()).open().await.err().unwrap();
        assert!(matches!(err, Error::Io { path: Some(ref p), .. } if *p == path));
    }

    #[tokio::test]
    async fn test_reader_is_consumed_once() {
        let file = InputFile::reader("data.bin", &b"abc"[..]);
        let upload = file.as_upload().unwrap().clone();
        let first = upload.open().await.unwrap();
        assert_eq!(read_all(first.body).await, b"abc");
        let err = upload.open().await.err().unwrap();
        assert!(matches!(err, Error::Io { path: None, .. }));
    }

    #[test]
    fn test_upload_parts_skip_inline_files() {
        let photo = InputFile::url("https://example.com/p.jpg");
        let thumb = InputFile::path("thumb.jpg");
        let parts = upload_parts([
            ("photo", Some(&photo)),
            ("thumbnail", Some(&thumb)),
            ("cover", None),
        ]);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "thumbnail");

        let mut params = Params::new();
        params.add_inline_file("photo", &photo);
        params.add_inline_file("thumbnail", &thumb);
        assert_eq!(params.get("photo"), Some("https://example.com/p.jpg"));
        assert!(!params.contains_key("thumbnail"));
    }
}
