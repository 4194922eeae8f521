//! Profile image preview as a scoped resource.
//!
//! An [`ImagePreview`] owns at most one live preview URL. The URL is created
//! once per selected image, revoked as soon as the selection changes or is
//! cleared, and revoked again on drop so unmounting the form releases it.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Shown when no image is selected or a preview URL cannot be created.
pub const PLACEHOLDER_AVATAR_URL: &str = "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR_aZ5dsa-PRx_4ozdsfmRi6kNoZdG18gCv8Em9EtWrHCYJD3OT5sKer3_UfZ4c2uc8lrg&usqp=CAU";

/// Failure to mint a preview URL for a selected file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to create preview URL: {0}")]
pub struct PreviewError(pub String);

/// Platform capability for short-lived, locally resolvable image URLs.
pub trait PreviewUrls {
    type File: Clone;

    /// Mint a URL that renders `file`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError`] when the platform refuses to create a URL.
    fn create(&self, file: &Self::File) -> Result<String, PreviewError>;

    /// Release a URL previously returned by [`create`](Self::create).
    fn revoke(&self, url: &str);

    /// Whether two handles refer to the same selected file.
    fn same_file(&self, a: &Self::File, b: &Self::File) -> bool;
}

/// Preview handle for the currently selected profile image.
pub struct ImagePreview<U: PreviewUrls> {
    urls: U,
    current: Option<(U::File, String)>,
}

impl<U: PreviewUrls> ImagePreview<U> {
    pub fn new(urls: U) -> Self {
        Self { urls, current: None }
    }

    /// URL to display for `profile`.
    ///
    /// Reuses the live URL while the same file stays selected. Falls back to
    /// [`PLACEHOLDER_AVATAR_URL`] when nothing is selected or creation fails.
    pub fn resolve(&mut self, profile: Option<&U::File>) -> String {
        let Some(file) = profile else {
            self.release();
            return PLACEHOLDER_AVATAR_URL.to_owned();
        };

        if let Some((held, url)) = &self.current {
            if self.urls.same_file(held, file) {
                return url.clone();
            }
        }

        self.release();
        match self.urls.create(file) {
            Ok(url) => {
                self.current = Some((file.clone(), url.clone()));
                url
            }
            Err(e) => {
                log::warn!("profile preview unavailable: {e}");
                PLACEHOLDER_AVATAR_URL.to_owned()
            }
        }
    }

    /// Live preview URL, if one is held.
    pub fn current_url(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, url)| url.as_str())
    }

    /// Revoke the live preview URL, if any.
    pub fn release(&mut self) {
        if let Some((_, url)) = self.current.take() {
            self.urls.revoke(&url);
        }
    }
}

impl<U: PreviewUrls> Drop for ImagePreview<U> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<U: PreviewUrls> std::fmt::Debug for ImagePreview<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePreview")
            .field("current_url", &self.current_url())
            .finish_non_exhaustive()
    }
}
