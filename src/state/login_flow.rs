//! Two-step login flow: user id first, then password.
//!
//! DESIGN
//! ======
//! The page only dispatches: each async result is handed to an `apply_*`
//! method here, which owns the step transitions and the error text. That
//! keeps the flow testable without a browser.
//!
//! ```text
//! CollectingId --(id taken)--> CollectingPassword --(password ok)--> login
//!      ^                               |
//!      +------------(back)-------------+
//! ```

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use super::form::{FormState, GENERAL_ERROR};
use super::session::{LOGIN_FAILED_MESSAGE, LoginOutcome};
use crate::net::error::ApiError;
use crate::net::types::StatusResponse;
use crate::util::validation::{FormKind, validate_fields};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    CollectingId,
    CollectingPassword,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    pub step: LoginStep,
    pub form: FormState,
}

impl LoginFlow {
    /// Validate the field of the current step and claim the busy flag.
    ///
    /// Returns false when the step's input is invalid or a request is in flight.
    pub fn begin_step(&mut self) -> bool {
        if self.form.busy {
            return false;
        }
        let only: &[&str] = match self.step {
            LoginStep::CollectingId => &["userId"],
            LoginStep::CollectingPassword => &["password"],
        };
        let errors = validate_fields(FormKind::Login, &self.form.fields, only);
        if !errors.is_empty() {
            self.form.set_errors(errors);
            return false;
        }
        self.form.begin_submit()
    }

    /// Result of `check-id`. Advances to the password step when the id is taken.
    pub fn apply_id_check(&mut self, result: Result<StatusResponse, ApiError>) {
        self.form.end_submit();
        match result {
            // check-id reports availability: a taken id is an existing account
            Ok(resp) if resp.success == Some(false) => {
                self.step = LoginStep::CollectingPassword;
                self.form.errors.clear();
            }
            Ok(_) => self.form.set_error("userId", "존재하지 않는 아이디입니다."),
            Err(_) => self.form.set_error("userId", "아이디 확인 중 오류가 발생했습니다."),
        }
    }

    /// Result of `check-password`. Returns true when the caller should log in.
    pub fn apply_password_check(&mut self, result: Result<StatusResponse, ApiError>) -> bool {
        match result {
            Ok(resp) if resp.is_success() => true,
            Ok(resp) => {
                self.form.end_submit();
                self.form.set_error("password", resp.message_or("비밀번호가 일치하지 않습니다."));
                false
            }
            Err(_) => {
                self.form.end_submit();
                self.form.set_error("password", "비밀번호 확인 중 오류가 발생했습니다.");
                false
            }
        }
    }

    /// Result of the session store login.
    pub fn apply_login(&mut self, outcome: &LoginOutcome) {
        self.form.end_submit();
        if !outcome.success {
            self.form.set_error(GENERAL_ERROR, outcome.message.as_deref().unwrap_or(LOGIN_FAILED_MESSAGE));
        }
    }

    /// Return to the id step, discarding the typed password.
    pub fn back(&mut self) {
        self.step = LoginStep::CollectingId;
        self.form.set_field("password", "");
        self.form.errors.clear();
        self.form.end_submit();
    }

    pub fn user_id(&self) -> String {
        self.form.field("userId").trim().to_owned()
    }

    pub fn password(&self) -> String {
        self.form.field("password")
    }
}
