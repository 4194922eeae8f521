//! Register endpoint transport for the browser.
//!
//! Client-side (hydrate): a real multipart `fetch` via `gloo-net` with a
//! `web_sys::FormData` body. The browser writes the
//! `multipart/form-data; boundary=...` header itself; setting it by hand would
//! drop the boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP response, whatever its status, comes back as `Ok` so the
//! submission handler can read the server `message`; only requests that never
//! settled map to `TransportError`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use registration::{ClientConfig, config::BASE_URL_ENV};

/// API config baked in at build time from `REGISTER_API_BASE_URL`.
pub fn api_config() -> ClientConfig {
    config_from(option_env!("REGISTER_API_BASE_URL"))
}

fn config_from(raw: Option<&str>) -> ClientConfig {
    ClientConfig::from_base_url(raw).unwrap_or_else(|e| {
        leptos::logging::warn!("{BASE_URL_ENV}: {e}; falling back to same-origin API");
        ClientConfig::default()
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn js_error_message(context: &str, detail: &str) -> String {
    format!("{context}: {detail}")
}

/// `fetch`-based [`registration::RegisterTransport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl registration::RegisterTransport for FetchTransport {
    type File = web_sys::File;

    async fn register(
        &self,
        url: &str,
        form: registration::RegistrationForm<'_, web_sys::File>,
    ) -> Result<registration::RegisterReply, registration::TransportError> {
        use registration::{RegisterReply, ResponseBody, TransportError};

        let build_err = |context: &str, e: wasm_bindgen::JsValue| {
            TransportError::Build(js_error_message(context, &format!("{e:?}")))
        };

        let body = web_sys::FormData::new().map_err(|e| build_err("FormData", e))?;
        for (name, value) in form.text_parts() {
            body.append_with_str(name, value)
                .map_err(|e| build_err(name, e))?;
        }
        body.append_with_blob_and_filename(form.profile_part(), form.profile, &form.profile.name())
            .map_err(|e| build_err(form.profile_part(), e))?;

        let resp = gloo_net::http::Request::post(url)
            .body(body)
            .map_err(|e| TransportError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        let bytes = resp.binary().await.unwrap_or_default();
        Ok(RegisterReply::new(status, ResponseBody::parse(&bytes)))
    }
}
