//! HTTP client for the contact form endpoint.
//!
//! Posts the form fields as multipart `FormData` with
//! `Accept: application/json`, the same request a plain form post makes
//! plus the JSON preference.

use async_trait::async_trait;
use gloo_net::http::Request;
use lp_api_types::FormSubmission;
use lp_page_core::{FormTransport, TransportError, TransportReply};
use tracing::debug;
use web_sys::FormData;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn to_form_data(submission: &FormSubmission) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(|e| TransportError::Request(format!("{e:?}")))?;
    for (name, value) in submission.iter() {
        data.append_with_str(name, value)
            .map_err(|e| TransportError::Request(format!("{e:?}")))?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl FormTransport for FetchTransport {
    async fn post_form(
        &self,
        action: &str,
        submission: &FormSubmission,
    ) -> Result<TransportReply, TransportError> {
        let request = Request::post(action)
            .header("Accept", "application/json")
            .body(to_form_data(submission)?)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        debug!(status, bytes = body.len(), "form endpoint replied");
        Ok(TransportReply::new(status, body))
    }
}
