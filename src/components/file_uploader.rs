//! Attachment picker for the post editor.
//!
//! Files are checked (count, size, type) and uploaded one at a time as soon
//! as they are picked; only uploaded files end up in the attachment list.

use leptos::prelude::*;

use crate::util::files::{ACCEPT_ATTR, AttachmentList, MAX_FILE_BYTES, MAX_FILES, format_file_size};

#[component]
pub fn FileUploader(attachments: RwSignal<AttachmentList>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        upload_selection(&ev, attachments);
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let uploading = move || attachments.with(|a| a.uploading);

    view! {
        <div class="file-uploader">
            <div class="upload-area">
                <input
                    type="file"
                    id="file-input"
                    multiple=true
                    accept=ACCEPT_ATTR
                    disabled=uploading
                    style="display: none"
                    on:change=on_change
                />
                <label for="file-input" class="upload-button" class:disabled=uploading>
                    {move || if uploading() { "업로드 중..." } else { "파일 선택" }}
                </label>
                <span class="upload-info">
                    "최대 " {MAX_FILES} "개, " {format_file_size(MAX_FILE_BYTES)} "까지"
                </span>
            </div>

            <Show when=move || attachments.with(|a| !a.errors.is_empty())>
                <div class="error-messages">
                    {move || attachments.with(|a| a.errors.clone()).into_iter().map(|error| view! {
                        <div class="error-message">
                            {error}
                            <button class="error-close" on:click=move |_| attachments.update(AttachmentList::clear_errors)>
                                "×"
                            </button>
                        </div>
                    }).collect_view()}
                </div>
            </Show>

            <Show when=move || attachments.with(|a| !a.items.is_empty())>
                <div class="file-list">
                    <h4>"선택된 파일 (" {move || attachments.with(|a| a.items.len())} "/" {MAX_FILES} ")"</h4>
                    {move || attachments.with(|a| a.items.clone()).into_iter().map(|file| {
                        let id = file.id;
                        view! {
                            <div class="file-item">
                                <div class="file-info">
                                    <span class="file-name">{file.name}</span>
                                    {(file.size > 0).then(|| view! {
                                        <span class="file-size">{format_file_size(file.size)}</span>
                                    })}
                                </div>
                                <button
                                    type="button"
                                    class="remove-file-btn"
                                    on:click=move |_| attachments.update(|a| a.remove(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(feature = "csr")]
fn upload_selection(ev: &leptos::ev::Event, attachments: RwSignal<AttachmentList>) {
    use wasm_bindgen::JsCast;

    use crate::net::api;
    use crate::util::files::{FileCandidate, accept_upload, check_count, check_file};

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return;
    };
    let Some(list) = input.files() else {
        return;
    };
    let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
    // Allow picking the same file again after removing it.
    input.set_value("");

    let existing = attachments.with_untracked(|a| a.items.len());
    if let Err(message) = check_count(existing, files.len()) {
        attachments.update(|a| a.errors = vec![message]);
        return;
    }

    attachments.update(|a| {
        a.errors.clear();
        a.uploading = true;
    });
    leptos::task::spawn_local(async move {
        let mut errors = Vec::new();
        for file in files {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let candidate = FileCandidate { name: file.name(), size: file.size() as u64, mime: file.type_() };
            if let Err(message) = check_file(&candidate) {
                errors.push(message);
                continue;
            }
            let result = api::upload_file(&file).await;
            if let Err(e) = &result {
                leptos::logging::warn!("upload of {} failed: {e}", candidate.name);
            }
            match accept_upload(candidate, result) {
                Ok(attachment) => attachments.update(|a| a.items.push(attachment)),
                Err(message) => errors.push(message),
            }
        }
        attachments.update(|a| {
            a.uploading = false;
            a.errors = errors;
        });
    });
}
