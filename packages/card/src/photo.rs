//! Display URL lifecycle for the profile photo.
//!
//! A temporary URL is created once per photo and revoked when the photo
//! changes or the owner is dropped. The platform side (blob URLs in the
//! browser) implements [`ObjectUrls`].

use crate::models::PhotoRef;

/// Creates and releases temporary URLs for image bytes.
pub trait ObjectUrls {
    fn create(&self, photo: &PhotoRef) -> Option<String>;
    fn revoke(&self, url: &str);
}

/// Holds at most one live URL, for the most recently shown photo.
#[derive(Debug, Default)]
pub struct PhotoUrlCache {
    current: Option<(u64, String)>,
}

impl PhotoUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL for `photo`, creating it if the photo changed and revoking the
    /// previous one.
    pub fn resolve<U: ObjectUrls>(&mut self, photo: Option<&PhotoRef>, urls: &U) -> Option<String> {
        let Some(photo) = photo else {
            self.release(urls);
            return None;
        };
        if let Some((id, url)) = &self.current {
            if *id == photo.id() {
                return Some(url.clone());
            }
        }
        self.release(urls);
        let url = urls.create(photo)?;
        self.current = Some((photo.id(), url.clone()));
        Some(url)
    }

    /// Revoke the live URL, if any.
    pub fn release<U: ObjectUrls>(&mut self, urls: &U) {
        if let Some((_, url)) = self.current.take() {
            urls.revoke(&url);
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeUrls {
        created: RefCell<Vec<String>>,
        revoked: RefCell<Vec<String>>,
    }

    impl ObjectUrls for FakeUrls {
        fn create(&self, photo: &PhotoRef) -> Option<String> {
            let url = format!("blob:{}", photo.id());
            self.created.borrow_mut().push(url.clone());
            Some(url)
        }

        fn revoke(&self, url: &str) {
            self.revoked.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_same_photo_reuses_url() {
        let urls = FakeUrls::default();
        let mut cache = PhotoUrlCache::new();
        let photo = PhotoRef::new("a.png", vec![1]);

        let first = cache.resolve(Some(&photo), &urls);
        let second = cache.resolve(Some(&photo.clone()), &urls);
        assert_eq!(first, second);
        assert_eq!(urls.created.borrow().len(), 1);
        assert!(urls.revoked.borrow().is_empty());
    }

    #[test]
    fn test_new_photo_revokes_old_url() {
        let urls = FakeUrls::default();
        let mut cache = PhotoUrlCache::new();
        let a = PhotoRef::new("a.png", vec![1]);
        let b = PhotoRef::new("b.png", vec![2]);

        let url_a = cache.resolve(Some(&a), &urls).unwrap();
        let url_b = cache.resolve(Some(&b), &urls).unwrap();
        assert_ne!(url_a, url_b);
        assert_eq!(*urls.revoked.borrow(), vec![url_a]);

        cache.release(&urls);
        assert_eq!(urls.revoked.borrow().len(), 2);
        assert!(!cache.is_live());

        // Releasing twice does not double-revoke
        cache.release(&urls);
        assert_eq!(urls.revoked.borrow().len(), 2);
    }

    #[test]
    fn test_clearing_photo_revokes() {
        let urls = FakeUrls::default();
        let mut cache = PhotoUrlCache::new();
        let a = PhotoRef::new("a.png", vec![1]);

        cache.resolve(Some(&a), &urls);
        assert_eq!(cache.resolve(None, &urls), None);
        assert_eq!(urls.revoked.borrow().len(), 1);
    }
}
