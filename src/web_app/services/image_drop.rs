// web_app/services/image_drop.rs - Dropped image handling
//
// Only builds a local preview. Uploading the bytes is left to whoever creates
// or updates the product with an ImageUpload.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::web_app::api::ImageUpload;

/// Something released over the drop zone
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropEntry {
    /// A regular file with its contents
    File(ImageUpload),
    /// A dropped folder
    Directory { name: String },
    /// A drag item that is not backed by a file (text, link, ...)
    TransferItem { kind: String },
}

impl DropEntry {
    pub fn is_file(&self) -> bool {
        matches!(self, DropEntry::File(_))
    }
}

/// `data:` URL of the file, the same string a browser FileReader produces
pub fn data_url(file: &ImageUpload) -> String {
    let mime = if file.mime.is_empty() {
        "application/octet-stream"
    } else {
        file.mime.as_str()
    };
    format!("data:{};base64,{}", mime, BASE64.encode(&file.bytes))
}

/// File to preview from a drop, only the first entry counts
pub fn first_file(entries: &[DropEntry]) -> Option<&ImageUpload> {
    match entries.first() {
        Some(DropEntry::File(file)) => Some(file),
        Some(other) => {
            tracing::debug!("Ignoring non-file drop entry: {:?}", other);
            None
        }
        None => None,
    }
}
