//! Attachment checks and the list of uploaded files for the post editor.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use uuid::Uuid;

use crate::net::error::ApiError;
use crate::net::types::FileUploadResponse;

pub const MAX_FILES: usize = 5;
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "application/pdf"];
/// `accept` attribute of the file input.
pub const ACCEPT_ATTR: &str = "image/*,.pdf,.doc,.docx,.txt";

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// A file picked in the browser, before upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// A file the backend accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub url: String,
}

/// Extension after the last dot. Dotfiles and names without a dot have none.
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}

/// `1536` -> `1.5 KB`. Two decimals at most, trailing zeros dropped.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let value = bytes as f64;
    let exp = (value.ln() / 1024_f64.ln()).floor() as usize;
    let exp = exp.min(SIZE_UNITS.len() - 1);
    let scaled = value / 1024_f64.powi(i32::try_from(exp).unwrap_or(0));
    let mut number = format!("{scaled:.2}");
    while number.ends_with('0') {
        number.pop();
    }
    if number.ends_with('.') {
        number.pop();
    }
    format!("{number} {}", SIZE_UNITS[exp])
}

/// Rejects a selection that would push the list past `MAX_FILES`.
///
/// # Errors
///
/// Returns the user-facing message when the limit is exceeded.
pub fn check_count(existing: usize, selected: usize) -> Result<(), String> {
    if existing + selected > MAX_FILES {
        return Err(format!("최대 {MAX_FILES}개의 파일만 업로드 가능합니다."));
    }
    Ok(())
}

/// Size first, then type.
///
/// # Errors
///
/// Returns the user-facing message naming the file.
pub fn check_file(file: &FileCandidate) -> Result<(), String> {
    if file.size > MAX_FILE_BYTES {
        return Err(format!("{}: 파일 크기가 {}를 초과합니다.", file.name, format_file_size(MAX_FILE_BYTES)));
    }
    if !ALLOWED_MIME_TYPES.contains(&file.mime.as_str()) {
        return Err(format!("{}: 지원하지 않는 파일 형식입니다.", file.name));
    }
    Ok(())
}

/// Turn an upload result into an attachment.
///
/// # Errors
///
/// A response without a file URL and a transport failure map to distinct messages.
pub fn accept_upload(file: FileCandidate, result: Result<FileUploadResponse, ApiError>) -> Result<Attachment, String> {
    match result {
        Ok(FileUploadResponse { file_url: Some(url), .. }) if !url.trim().is_empty() => {
            Ok(Attachment { id: Uuid::new_v4(), name: file.name, size: file.size, mime: file.mime, url })
        }
        Ok(_) => Err(format!("{}: 파일 업로드에 실패했습니다.", file.name)),
        Err(_) => Err(format!("{}: 파일 업로드 중 오류가 발생했습니다.", file.name)),
    }
}

/// Uploaded attachments plus the errors of the last selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttachmentList {
    pub items: Vec<Attachment>,
    pub errors: Vec<String>,
    pub uploading: bool,
}

impl AttachmentList {
    /// Seed from URLs already stored on a post.
    pub fn from_urls(urls: &[String]) -> Self {
        let items = urls
            .iter()
            .map(|url| Attachment {
                id: Uuid::new_v4(),
                name: url.rsplit('/').next().unwrap_or(url).to_owned(),
                size: 0,
                mime: String::new(),
                url: url.clone(),
            })
            .collect();
        Self { items, ..Self::default() }
    }

    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|a| a.id != id);
    }

    pub fn urls(&self) -> Vec<String> {
        self.items.iter().map(|a| a.url.clone()).collect()
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
