//! `reqwest` multipart transport for the register endpoint.
//!
//! `RequestBuilder::multipart` writes an explicit
//! `multipart/form-data; boundary=...` content type.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use registration::{RegisterReply, RegisterTransport, RegistrationForm, ResponseBody, TransportError};
use reqwest::multipart::{Form, Part};

use crate::image::LocalImage;

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn multipart_form(form: RegistrationForm<'_, LocalImage>) -> Result<Form, TransportError> {
    let mut multipart = Form::new();
    for (name, value) in form.text_parts() {
        multipart = multipart.text(name, value.to_owned());
    }
    let profile = Part::bytes(form.profile.bytes.clone())
        .file_name(form.profile.file_name.clone())
        .mime_str(form.profile.mime_type)
        .map_err(|e| TransportError::Build(e.to_string()))?;
    Ok(multipart.part(form.profile_part(), profile))
}

#[async_trait(?Send)]
impl RegisterTransport for ReqwestTransport {
    type File = LocalImage;

    async fn register(&self, url: &str, form: RegistrationForm<'_, LocalImage>) -> Result<RegisterReply, TransportError> {
        let body = multipart_form(form)?;
        let response = self
            .client
            .post(url)
            .multipart(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.unwrap_or_default();
        tracing::debug!(status, body_len = bytes.len(), "register response received");
        Ok(RegisterReply::new(status, ResponseBody::parse(&bytes)))
    }
}
