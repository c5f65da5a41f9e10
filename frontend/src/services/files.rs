//! File picker adapter and preview handles for selected images.

use web_sys::{File, HtmlInputElement, Url};

use crate::SelectedFile;

/// Allocates and releases preview handles for picked files.
pub trait PreviewStore {
    /// Platform file handle.
    type Source;

    /// Allocate a preview for `source`, `None` if the platform refuses.
    fn create(&self, source: &Self::Source) -> Option<String>;

    /// Release a handle returned by [`PreviewStore::create`].
    fn revoke(&self, preview: &str);
}

/// Object URLs (`blob:`) for browser files.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreviews;

impl PreviewStore for BrowserPreviews {
    type Source = File;

    fn create(&self, file: &File) -> Option<String> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Could not create preview for {}: {:?}", file.name(), e);
                None
            }
        }
    }

    fn revoke(&self, preview: &str) {
        if let Err(e) = Url::revoke_object_url(preview) {
            log::warn!("Could not revoke preview {}: {:?}", preview, e);
        }
    }
}

/// Files currently selected in a `<input type="file">`.
pub fn selected_files(input: &HtmlInputElement) -> Vec<SelectedFile<File>> {
    let Some(files) = input.files() else {
        return Vec::new();
    };

    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| SelectedFile {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            source: file,
        })
        .collect()
}
