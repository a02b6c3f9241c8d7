//! Profile edit form: name and email, plus an optional password change.
//!
//! The profile update body has no password field, so a new password goes out
//! as a second request through the reset-password endpoint once the profile
//! is saved. The form stays busy until both have answered.

#[cfg(test)]
#[path = "profile_edit_test.rs"]
mod profile_edit_test;

use super::auth::ProfileUpdate;
use super::form::FormState;
use super::mypage::{MYPAGE_LOAD_FAILED, USER_NOT_FOUND};
use crate::net::error::ApiError;
use crate::net::types::{StatusResponse, UpdateUserRequest, UserInfo, non_blank};
use crate::util::validation::{FormKind, form_data, validate};

pub const CANCEL_CONFIRM: &str = "수정 중인 내용이 사라집니다. 정말 취소하시겠습니까?";
pub const PROFILE_SAVED: &str = "정보가 성공적으로 수정되었습니다.";
pub const PASSWORD_CHANGE_FAILED: &str = "정보는 수정되었지만 비밀번호 변경에 실패했습니다.";

/// Requests produced by a valid submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSubmit {
    pub request: UpdateUserRequest,
    /// Sent after the profile update succeeds.
    pub new_password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileEdit {
    pub form: FormState,
    pub loading: bool,
    pub load_error: Option<String>,
    changing_password: bool,
}

impl Default for ProfileEdit {
    fn default() -> Self {
        Self {
            form: FormState::with_fields([("name", ""), ("email", ""), ("password", ""), ("passwordConfirm", "")]),
            loading: true,
            load_error: None,
            changing_password: false,
        }
    }
}

impl ProfileEdit {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    pub fn apply_load(&mut self, result: Result<UserInfo, ApiError>) {
        self.loading = false;
        match result {
            Ok(info) if info.is_found() => {
                self.form.reset(form_data([
                    ("name", info.name.as_str()),
                    ("email", info.email.as_str()),
                    ("password", ""),
                    ("passwordConfirm", ""),
                ]));
            }
            Ok(_) => self.load_error = Some(USER_NOT_FOUND.to_owned()),
            Err(_) => self.load_error = Some(MYPAGE_LOAD_FAILED.to_owned()),
        }
    }

    /// Password rules first (only when a change was started), then name and email.
    pub fn begin_submit(&mut self) -> Option<ProfileSubmit> {
        if self.form.busy {
            return None;
        }
        let changing_password =
            !self.form.field("password").is_empty() || !self.form.field("passwordConfirm").is_empty();
        if changing_password {
            let errors = validate(FormKind::Password, &self.form.fields);
            if !errors.is_empty() {
                self.form.set_errors(errors);
                return None;
            }
        }
        if !self.form.validate(FormKind::Profile) {
            return None;
        }
        self.form.begin_submit();
        self.changing_password = changing_password;
        Some(ProfileSubmit {
            request: UpdateUserRequest {
                name: self.form.field("name").trim().to_owned(),
                email: self.form.field("email").trim().to_owned(),
            },
            new_password: changing_password.then(|| self.form.field("password")),
        })
    }

    /// On success returns the session fields to merge.
    pub fn apply_submit(&mut self, result: Result<UserInfo, ApiError>) -> Option<ProfileUpdate> {
        match result {
            Ok(info) if info.is_found() => {
                if !self.changing_password {
                    self.form.end_submit();
                }
                Some(ProfileUpdate {
                    name: Some(self.form.field("name").trim().to_owned()),
                    email: Some(self.form.field("email").trim().to_owned()),
                })
            }
            Ok(info) => {
                self.changing_password = false;
                self.form.fail(non_blank(info.message.as_deref()).unwrap_or("정보 수정에 실패했습니다."));
                None
            }
            Err(_) => {
                self.changing_password = false;
                self.form.fail("정보 수정 중 오류가 발생했습니다.");
                None
            }
        }
    }

    /// Outcome of the follow-up password request. Returns true when the new
    /// password was accepted.
    pub fn apply_password_change(&mut self, result: Result<StatusResponse, ApiError>) -> bool {
        self.changing_password = false;
        match result {
            Ok(resp) if resp.is_not_rejected() => {
                self.form.end_submit();
                self.form.set_field("password", "");
                self.form.set_field("passwordConfirm", "");
                true
            }
            Ok(resp) => {
                self.form.fail(resp.message_or(PASSWORD_CHANGE_FAILED));
                false
            }
            Err(e) => {
                self.form.fail(e.user_message(PASSWORD_CHANGE_FAILED));
                false
            }
        }
    }
}
