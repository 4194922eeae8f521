use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct UrlLog {
    created: Vec<String>,
    revoked: Vec<String>,
    fail_for: Option<&'static str>,
}

#[derive(Clone, Default)]
struct FakeUrls(Rc<RefCell<UrlLog>>);

impl FakeUrls {
    fn failing_for(name: &'static str) -> Self {
        let urls = Self::default();
        urls.0.borrow_mut().fail_for = Some(name);
        urls
    }

    fn created(&self) -> Vec<String> {
        self.0.borrow().created.clone()
    }

    fn revoked(&self) -> Vec<String> {
        self.0.borrow().revoked.clone()
    }
}

impl PreviewUrls for FakeUrls {
    type File = &'static str;

    fn create(&self, file: &Self::File) -> Result<String, PreviewError> {
        let mut log = self.0.borrow_mut();
        if log.fail_for == Some(*file) {
            return Err(PreviewError("blob unavailable".to_owned()));
        }
        let url = format!("blob:local/{}-{}", file, log.created.len());
        log.created.push(url.clone());
        Ok(url)
    }

    fn revoke(&self, url: &str) {
        self.0.borrow_mut().revoked.push(url.to_owned());
    }

    fn same_file(&self, a: &Self::File, b: &Self::File) -> bool {
        a == b
    }
}

// =============================================================
// Placeholder fallback
// =============================================================

#[test]
fn resolve_without_image_returns_placeholder() {
    let urls = FakeUrls::default();
    let mut preview = ImagePreview::new(urls.clone());
    assert_eq!(preview.resolve(None), PLACEHOLDER_AVATAR_URL);
    assert!(urls.created().is_empty());
    assert!(preview.current_url().is_none());
}

#[test]
fn resolve_falls_back_to_placeholder_when_creation_fails() {
    let urls = FakeUrls::failing_for("broken.png");
    let mut preview = ImagePreview::new(urls.clone());
    assert_eq!(preview.resolve(Some(&"broken.png")), PLACEHOLDER_AVATAR_URL);
    assert!(preview.current_url().is_none());
    assert!(urls.revoked().is_empty());
}

#[test]
fn placeholder_is_a_remote_url() {
    assert!(PLACEHOLDER_AVATAR_URL.starts_with("https://"));
}

// =============================================================
// Scoped URL lifecycle
// =============================================================

#[test]
fn resolve_reuses_url_while_same_image_selected() {
    let urls = FakeUrls::default();
    let mut preview = ImagePreview::new(urls.clone());

    let first = preview.resolve(Some(&"me.png"));
    let second = preview.resolve(Some(&"me.png"));
    let third = preview.resolve(Some(&"me.png"));

    assert_eq!(first, "blob:local/me.png-0");
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(urls.created().len(), 1);
    assert!(urls.revoked().is_empty());
}

#[test]
fn changing_image_revokes_previous_url() {
    let urls = FakeUrls::default();
    let mut preview = ImagePreview::new(urls.clone());

    let old = preview.resolve(Some(&"old.png"));
    let new = preview.resolve(Some(&"new.png"));

    assert_ne!(old, new);
    assert_eq!(urls.revoked(), vec![old]);
    assert_eq!(preview.current_url(), Some(new.as_str()));
}

#[test]
fn clearing_image_revokes_url() {
    let urls = FakeUrls::default();
    let mut preview = ImagePreview::new(urls.clone());

    let url = preview.resolve(Some(&"me.png"));
    assert_eq!(preview.resolve(None), PLACEHOLDER_AVATAR_URL);

    assert_eq!(urls.revoked(), vec![url]);
    assert!(preview.current_url().is_none());
}

#[test]
fn failed_creation_after_success_releases_previous_url() {
    let urls = FakeUrls::failing_for("broken.png");
    let mut preview = ImagePreview::new(urls.clone());

    let good = preview.resolve(Some(&"good.png"));
    assert_eq!(preview.resolve(Some(&"broken.png")), PLACEHOLDER_AVATAR_URL);

    assert_eq!(urls.revoked(), vec![good]);
    assert!(preview.current_url().is_none());
}

#[test]
fn drop_revokes_live_url() {
    let urls = FakeUrls::default();
    let url = {
        let mut preview = ImagePreview::new(urls.clone());
        preview.resolve(Some(&"me.png"))
    };
    assert_eq!(urls.revoked(), vec![url]);
}

#[test]
fn release_is_idempotent() {
    let urls = FakeUrls::default();
    let mut preview = ImagePreview::new(urls.clone());
    preview.resolve(Some(&"me.png"));

    preview.release();
    preview.release();
    drop(preview);

    assert_eq!(urls.revoked().len(), 1);
}
