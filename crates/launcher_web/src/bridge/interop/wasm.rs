use js_sys::Promise;
use launcher_runtime::ACTION_GET_STARTUP_URL;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function invokeApi() {
  const tauri = window.__TAURI__;
  if (!tauri || !tauri.core || typeof tauri.core.invoke !== 'function') {
    throw new Error('Tauri invoke transport is unavailable in this webview');
  }
  return tauri.core.invoke;
}

export async function launcherDispatch(action) {
  return await invokeApi()('launcher_dispatch', { action });
}

export async function launcherOpenExternalUrl(url) {
  return await invokeApi()('external_open_url', { url });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = launcherDispatch)]
    fn launcher_dispatch(action: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = launcherOpenExternalUrl)]
    fn launcher_open_external_url(url: &str) -> Result<Promise, JsValue>;
}

fn js_error(context: &str, err: JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => format!("{context}: {err:?}"),
    }
}

pub async fn startup_url() -> Result<Option<String>, String> {
    let promise = launcher_dispatch(ACTION_GET_STARTUP_URL)
        .map_err(|err| js_error("launcher dispatch failed", err))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|err| js_error("launcher dispatch failed", err))?;
    from_value(value).map_err(|err| format!("launcher dispatch returned malformed payload: {err}"))
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    let promise = launcher_open_external_url(url)
        .map_err(|err| js_error("external URL open failed", err))?;
    JsFuture::from(promise)
        .await
        .map_err(|err| js_error("external URL open failed", err))?;
    Ok(())
}
