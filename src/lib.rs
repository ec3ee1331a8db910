mod api;
mod commands;
mod error;
mod form;
mod transform;
mod types;

use commands::AppState;
use form::InvoiceSession;
use std::sync::Mutex;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Load .env from app data dir so users can point the app at a
            // non-default invoice service without a shell environment.
            let app_data_dir = app.path().app_data_dir().map_err(|e| e.to_string())?;
            let env_path = app_data_dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
            app.manage(AppState {
                session: Mutex::new(InvoiceSession::new()),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_version,
            commands::get_api_status,
            commands::get_form_layout,
            commands::select_document,
            commands::extract_invoice,
            commands::get_invoice,
            commands::edit_header_field,
            commands::edit_detail_field,
            commands::submit_invoice,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
