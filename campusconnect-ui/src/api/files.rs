//! File inputs and downloads

use campusconnect::models::Attachment;
use campusconnect::Download;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const REVOKE_DELAY_MS: u32 = 1000;

/// First file selected in an `<input type="file">` change event
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
    input.files()?.get(0)
}

/// Read a browser file into an upload attachment
pub async fn read_attachment(file: web_sys::File) -> Result<Attachment, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(Attachment {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// Hand a generated file to the browser as a download
pub fn trigger_download(download: &Download) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(download.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&download.content.as_str().into()),
        &options,
    )
    .map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "not an anchor")?;
    anchor.set_href(&url);
    anchor.set_download(&download.file_name);
    anchor.click();

    // Revoking in the same tick can cancel the download in some browsers
    gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            web_sys::console::error_1(&format!("Failed to revoke download URL: {:?}", e).into());
        }
    })
    .forget();
    Ok(())
}
