//! Find-id and reset-password flows behind the login page's account modal.
//!
//! A reset first asks the backend whether the new password equals the
//! current one and refuses to proceed when it does.

#[cfg(test)]
#[path = "find_account_test.rs"]
mod find_account_test;

use super::form::FormState;
use crate::net::error::ApiError;
use crate::net::types::{FindIdResponse, PasswordMatchResponse, StatusResponse, non_blank};
use crate::util::validation::FormKind;

const FIND_ID_FAILED: &str = "아이디 찾기에 실패했습니다.";
const RESET_FAILED: &str = "비밀번호 재설정에 실패했습니다.";
pub const PASSWORD_REUSED: &str = "기존에 사용중인 비밀번호입니다.";
pub const RESET_DONE: &str = "비밀번호가 성공적으로 재설정되었습니다. 새로운 비밀번호로 로그인해주세요.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FindTab {
    #[default]
    FindId,
    ResetPassword,
}

/// Banner under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub success: bool,
}

impl Notice {
    fn ok(text: impl Into<String>) -> Self {
        Self { text: text.into(), success: true }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), success: false }
    }
}

/// Parameters of a password reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetRequest {
    pub user_id: String,
    pub email: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindAccountState {
    pub tab: FindTab,
    pub form: FormState,
    pub notice: Option<Notice>,
    pub found_user_id: Option<String>,
}

impl FindAccountState {
    pub fn switch_tab(&mut self, tab: FindTab) {
        self.tab = tab;
        self.notice = None;
        self.found_user_id = None;
    }

    /// Validated email to look up, with the busy flag claimed.
    pub fn begin_find_id(&mut self) -> Option<String> {
        if self.form.busy || !self.form.validate(FormKind::FindId) {
            return None;
        }
        self.form.begin_submit();
        self.notice = None;
        Some(self.form.field("email").trim().to_owned())
    }

    pub fn apply_find_id(&mut self, result: Result<FindIdResponse, ApiError>) {
        self.form.end_submit();
        match result {
            Ok(resp) => match non_blank(resp.user_id.as_deref()) {
                Some(user_id) => {
                    self.notice = Some(Notice::ok(format!("아이디를 찾았습니다: {user_id}")));
                    self.found_user_id = Some(user_id.to_owned());
                }
                None => {
                    let message = non_blank(resp.message.as_deref()).unwrap_or(FIND_ID_FAILED);
                    self.notice = Some(Notice::error(message));
                }
            },
            Err(err) => self.notice = Some(Notice::error(err.user_message(FIND_ID_FAILED))),
        }
    }

    pub fn begin_reset(&mut self) -> Option<ResetRequest> {
        if self.form.busy || !self.form.validate(FormKind::ResetPassword) {
            return None;
        }
        self.form.begin_submit();
        self.notice = None;
        Some(ResetRequest {
            user_id: self.form.field("userId").trim().to_owned(),
            email: self.form.field("email").trim().to_owned(),
            new_password: self.form.field("newPassword"),
        })
    }

    /// Returns true when the reset may proceed.
    pub fn apply_reuse_check(&mut self, result: Result<PasswordMatchResponse, ApiError>) -> bool {
        match result {
            Ok(resp) if resp.is_match => {
                self.form.end_submit();
                self.notice = Some(Notice::error(PASSWORD_REUSED));
                false
            }
            Ok(_) => true,
            Err(err) => {
                self.form.end_submit();
                self.notice = Some(Notice::error(err.user_message(RESET_FAILED)));
                false
            }
        }
    }

    pub fn apply_reset(&mut self, result: Result<StatusResponse, ApiError>) {
        self.form.end_submit();
        match result {
            Ok(resp) if resp.is_not_rejected() => {
                self.notice = Some(Notice::ok(RESET_DONE));
                self.form.set_field("newPassword", "");
                self.form.set_field("confirmPassword", "");
            }
            Ok(resp) => self.notice = Some(Notice::error(resp.message_or(RESET_FAILED))),
            Err(err) => self.notice = Some(Notice::error(err.user_message(RESET_FAILED))),
        }
    }
}
