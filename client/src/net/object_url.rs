//! `URL.createObjectURL` previews for picked image files.
//!
//! Only meaningful in the browser; SSR renders the placeholder avatar.

/// Browser [`registration::PreviewUrls`] backed by `web_sys::Url`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrls;

#[cfg(feature = "hydrate")]
impl registration::PreviewUrls for ObjectUrls {
    type File = web_sys::File;

    fn create(&self, file: &web_sys::File) -> Result<String, registration::PreviewError> {
        web_sys::Url::create_object_url_with_blob(file).map_err(|e| registration::PreviewError(format!("{e:?}")))
    }

    fn revoke(&self, url: &str) {
        let _ = web_sys::Url::revoke_object_url(url);
    }

    fn same_file(&self, a: &web_sys::File, b: &web_sys::File) -> bool {
        js_sys::Object::is(a.as_ref(), b.as_ref())
    }
}
