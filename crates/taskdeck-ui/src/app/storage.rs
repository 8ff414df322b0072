use taskdeck_core::autosave::{self, FormSnapshot};

const TOKEN_STORAGE_KEY: &str = "taskdeck.token";

pub const TASK_FORM_ID: &str = "task-form";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn load_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

pub fn load_form_snapshot(form_id: &str) -> FormSnapshot {
    let stored = local_storage()
        .and_then(|storage| storage.get_item(&autosave::storage_key(form_id)).ok().flatten());

    match stored {
        Some(raw) => FormSnapshot::from_json(&raw).unwrap_or_default(),
        None => FormSnapshot::default(),
    }
}

pub fn save_form_snapshot(form_id: &str, snapshot: &FormSnapshot) {
    let Some(storage) = local_storage() else {
        return;
    };
    if snapshot.is_empty() {
        let _ = storage.remove_item(&autosave::storage_key(form_id));
    } else if let Some(json) = snapshot.to_json() {
        let _ = storage.set_item(&autosave::storage_key(form_id), &json);
    }
}

pub fn clear_form_snapshot(form_id: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(&autosave::storage_key(form_id));
    }
}
