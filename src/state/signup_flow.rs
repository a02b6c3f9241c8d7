//! Signup form with inline duplicate checks for user id and email.
//!
//! Both duplicate checks must pass before the form may be submitted, and
//! editing a checked field invalidates its check.

#[cfg(test)]
#[path = "signup_flow_test.rs"]
mod signup_flow_test;

use super::form::{FormState, GENERAL_ERROR};
use crate::net::error::ApiError;
use crate::net::types::{SignupRequest, StatusResponse};
use crate::util::validation::{FormKind, validate, validate_fields};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFlow {
    pub form: FormState,
    pub id_checked: bool,
    pub email_checked: bool,
}

impl SignupFlow {
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set_field(name, value);
        match name {
            "userId" => self.id_checked = false,
            "email" => self.email_checked = false,
            _ => {}
        }
    }

    /// Validate `field` alone and claim the busy flag for its duplicate check.
    fn begin_check(&mut self, field: &str) -> Option<String> {
        if self.form.busy {
            return None;
        }
        let errors = validate_fields(FormKind::Signup, &self.form.fields, &[field]);
        if let Some(message) = errors.get(field) {
            self.form.set_error(field, message.clone());
            return None;
        }
        self.form.busy = true;
        Some(self.form.field(field).trim().to_owned())
    }

    fn apply_check(&mut self, field: &str, result: Result<StatusResponse, ApiError>, taken: &str, failed: &str) -> bool {
        self.form.end_submit();
        match result {
            Ok(resp) if resp.is_success() => {
                self.form.errors.remove(field);
                true
            }
            Ok(resp) => {
                self.form.set_error(field, resp.message_or(taken));
                false
            }
            Err(_) => {
                self.form.set_error(field, failed);
                false
            }
        }
    }

    /// Returns the user id to check, or `None` if it is invalid.
    pub fn begin_id_check(&mut self) -> Option<String> {
        self.begin_check("userId")
    }

    pub fn apply_id_check(&mut self, result: Result<StatusResponse, ApiError>) {
        self.id_checked = self.apply_check("userId", result, "이미 사용 중인 아이디입니다.", "아이디 확인 중 오류가 발생했습니다.");
    }

    /// Returns the email to check, or `None` if it is invalid.
    pub fn begin_email_check(&mut self) -> Option<String> {
        self.begin_check("email")
    }

    pub fn apply_email_check(&mut self, result: Result<StatusResponse, ApiError>) {
        self.email_checked =
            self.apply_check("email", result, "이미 사용 중인 이메일입니다.", "이메일 확인 중 오류가 발생했습니다.");
    }

    /// Validate the whole form, require both duplicate checks, and build the request.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.form.busy {
            return None;
        }
        let errors = validate(FormKind::Signup, &self.form.fields);
        if !errors.is_empty() {
            self.form.errors.extend(errors);
            return None;
        }
        if !self.id_checked {
            self.form.set_error("userId", "아이디 중복 확인을 해주세요.");
            return None;
        }
        if !self.email_checked {
            self.form.set_error("email", "이메일 중복 확인을 해주세요.");
            return None;
        }
        self.form.begin_submit();
        Some(SignupRequest {
            user_id: self.form.field("userId").trim().to_owned(),
            email: self.form.field("email").trim().to_owned(),
            password: self.form.field("password"),
            name: self.form.field("name").trim().to_owned(),
        })
    }

    /// Returns true when the account was created.
    pub fn apply_signup(&mut self, result: Result<StatusResponse, ApiError>) -> bool {
        self.form.end_submit();
        match result {
            Ok(resp) if resp.is_not_rejected() => true,
            Ok(resp) => {
                self.form.set_error(GENERAL_ERROR, resp.message_or("회원가입에 실패했습니다."));
                false
            }
            Err(_) => {
                self.form.set_error(GENERAL_ERROR, "회원가입 중 오류가 발생했습니다.");
                false
            }
        }
    }
}
