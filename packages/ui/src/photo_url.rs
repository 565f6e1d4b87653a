//! Blob URLs for the profile photo.
//!
//! One URL is created per selected photo and revoked when the photo changes
//! or the component using it unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use card::{ObjectUrls, PhotoRef, PhotoUrlCache};
use dioxus::prelude::*;

/// Browser `URL.createObjectURL` / `URL.revokeObjectURL`.
pub struct BlobUrls;

#[cfg(target_arch = "wasm32")]
impl ObjectUrls for BlobUrls {
    fn create(&self, photo: &PhotoRef) -> Option<String> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(photo.bytes()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(photo.mime());
        let blob = match web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!("Failed to wrap {} in a blob: {:?}", photo.file_name(), e);
                return None;
            }
        };
        match web_sys::Url::create_object_url_with_blob(&blob) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!("Failed to create object URL: {:?}", e);
                None
            }
        }
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            tracing::warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}

// Off the web there are no blob URLs; the preview shows the placeholder avatar.
#[cfg(not(target_arch = "wasm32"))]
impl ObjectUrls for BlobUrls {
    fn create(&self, _photo: &PhotoRef) -> Option<String> {
        None
    }

    fn revoke(&self, _url: &str) {}
}

/// Display URL for `photo`, stable across re-renders while the photo is
/// unchanged.
pub fn use_photo_url(photo: Option<PhotoRef>) -> Option<String> {
    let cache = use_hook(|| Rc::new(RefCell::new(PhotoUrlCache::new())));

    use_drop({
        let cache = cache.clone();
        move || cache.borrow_mut().release(&BlobUrls)
    });

    let mut urls = cache.borrow_mut();
    urls.resolve(photo.as_ref(), &BlobUrls)
}
