use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Request, RequestInit, Response};

use shared::constants::{HEADER_CREDENTIALS, ROOT_API};

pub fn connect_json_send<T: serde::Serialize>(url: &str, credentials: &str, data: T) {
    if credentials.is_empty() {
        log::warn!("connect_json_send: no credentials for {url}");
    }
    match serde_wasm_bindgen::to_value(&data) {
        Ok(data) => {
            let url = url.to_string();
            let credentials = credentials.to_string();
            spawn_local(async move {
                if let Err(err) = send(&url, &credentials, data).await {
                    log::error!("connect_json_send {url}: {:?}", err);
                }
            });
        }
        Err(err) => {
            log::error!("connect_json_send: {:?}", err);
        }
    }
}

async fn send(url: &str, credentials: &str, data: JsValue) -> Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(web_sys::RequestCredentials::Include);
    let body = js_sys::JSON::stringify(&data)?;
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(&format!("/{ROOT_API}/{url}"), &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set(HEADER_CREDENTIALS, credentials)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from(resp.status()));
    }

    let json = JsFuture::from(resp.json()?).await?;

    Ok(json)
}
