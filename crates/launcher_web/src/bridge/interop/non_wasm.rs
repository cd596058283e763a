fn unsupported() -> String {
    "Launcher bridge transport is only available when compiled for wasm32".to_string()
}

pub async fn startup_url() -> Result<Option<String>, String> {
    Ok(None)
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}
