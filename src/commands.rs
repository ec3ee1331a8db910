use crate::api;
use crate::error::FormError;
use crate::form::InvoiceSession;
use crate::transform;
use crate::types::{
    field_label, InvoiceForm, DETAIL_COLUMN_ORDER, HEADER_FIELD_ORDER, TOTAL_FIELD_ORDER,
};
use serde::Serialize;
use std::sync::Mutex;
use tauri::{AppHandle, State};

pub struct AppState {
    pub session: Mutex<InvoiceSession>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// Fixed render order for the webview: header inputs, detail columns, totals.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormLayout {
    pub header_fields: Vec<FieldSpec>,
    pub detail_columns: Vec<FieldSpec>,
    pub total_fields: Vec<FieldSpec>,
}

fn specs(keys: &[&'static str]) -> Vec<FieldSpec> {
    keys.iter()
        .copied()
        .map(|key| FieldSpec {
            key,
            label: field_label(key),
        })
        .collect()
}

fn lock_session<'a>(state: &'a State<'a, AppState>) -> Result<std::sync::MutexGuard<'a, InvoiceSession>, FormError> {
    state
        .session
        .lock()
        .map_err(|e| FormError::Internal(format!("session lock poisoned: {e}")))
}

#[tauri::command]
pub fn get_app_version(app: AppHandle) -> String {
    app.package_info().version.to_string()
}

/// Whether the extraction endpoint was configured explicitly or the
/// localhost default is in use.
#[tauri::command]
pub fn get_api_status() -> String {
    let _ = dotenvy::dotenv();
    match std::env::var("INVOICE_API_ENDPOINT") {
        Ok(v) if !v.trim().is_empty() => "configured".to_string(),
        _ => "default".to_string(),
    }
}

#[tauri::command]
pub fn get_form_layout() -> FormLayout {
    FormLayout {
        header_fields: specs(&HEADER_FIELD_ORDER),
        detail_columns: specs(&DETAIL_COLUMN_ORDER),
        total_fields: specs(&TOTAL_FIELD_ORDER),
    }
}

/// Store the chosen document path. No validation of type or size.
#[tauri::command]
pub fn select_document(state: State<AppState>, path: String) -> Result<(), FormError> {
    lock_session(&state)?.select_document(path);
    Ok(())
}

/// Send the selected document to the extraction endpoint, convert the wire
/// response to form shape and replace the session state with it.
#[tauri::command]
pub async fn extract_invoice(state: State<'_, AppState>) -> Result<InvoiceForm, FormError> {
    let document_path = lock_session(&state)?.document_path()?.to_string();
    let base_url = api::endpoint();

    // The lock is not held while the request is in flight.
    let extracted = tauri::async_runtime::spawn_blocking(move || {
        api::extract(&base_url, &document_path)
    })
    .await
    .map_err(|e| FormError::Internal(e.to_string()))??;

    let form = transform::to_form(extracted.headers, extracted.details);
    lock_session(&state)?.replace_form(form.clone());
    Ok(form)
}

#[tauri::command]
pub fn get_invoice(state: State<AppState>) -> Result<Option<InvoiceForm>, FormError> {
    Ok(lock_session(&state)?.form().cloned())
}

#[tauri::command]
pub fn edit_header_field(
    state: State<AppState>,
    field: String,
    value: String,
) -> Result<InvoiceForm, FormError> {
    let mut session = lock_session(&state)?;
    session.edit_header_field(&field, value)?;
    session.loaded_form().cloned()
}

#[tauri::command]
pub fn edit_detail_field(
    state: State<AppState>,
    index: usize,
    field: String,
    value: String,
) -> Result<InvoiceForm, FormError> {
    let mut session = lock_session(&state)?;
    session.edit_detail_field(index, &field, value)?;
    session.loaded_form().cloned()
}

/// Convert the current form back to wire shape and post it. The
/// acknowledgment is returned untouched; concurrent submits are not guarded.
#[tauri::command]
pub async fn submit_invoice(state: State<'_, AppState>) -> Result<serde_json::Value, FormError> {
    let payload = {
        let session = lock_session(&state)?;
        transform::to_wire(session.loaded_form()?)
    };
    let base_url = api::endpoint();

    tauri::async_runtime::spawn_blocking(move || api::submit(&base_url, &payload))
        .await
        .map_err(|e| FormError::Internal(e.to_string()))?
}
