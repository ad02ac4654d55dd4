//! `fetch`-backed transport

use async_trait::async_trait;
use campusconnect::{ApiError, ApiRequest, ApiResponse, FormPart, HttpTransport, Method, RequestBody};
use gloo_net::http::{Request, RequestBuilder};

#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value).map_err(js_error)?,
            FormPart::File { name, attachment } => {
                let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(&attachment.mime_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(
                    &js_sys::Array::of1(&bytes.into()),
                    &options,
                )
                .map_err(js_error)?;
                form.append_with_blob_and_filename(name, &blob, &attachment.file_name)
                    .map_err(js_error)?;
            }
        }
    }
    Ok(form)
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            RequestBody::Empty => builder.send().await,
            RequestBody::Json(value) => {
                let request = builder
                    .body(value.to_string())
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                request.send().await
            }
            RequestBody::Multipart(parts) => {
                let request = builder
                    .body(form_data(&parts)?)
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                request.send().await
            }
        };

        let response = sent.map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}
