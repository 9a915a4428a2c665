use crate::error::AttendanceError;
use wasm_bindgen::JsCast;

fn download_error(message: &str) -> AttendanceError {
    AttendanceError::Download(message.to_string())
}

pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), AttendanceError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&array, &options)
        .map_err(|_| download_error("failed to create blob"))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| download_error("failed to create object URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| download_error("no document"))?;
    let element = document
        .create_element("a")
        .map_err(|_| download_error("failed to create link"))?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| download_error("failed to cast anchor"))?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or_else(|| download_error("no body"))?
        .append_child(&a)
        .map_err(|_| download_error("append failed"))?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
