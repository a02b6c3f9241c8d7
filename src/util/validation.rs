//! Field predicates and the per-form validation registry.
//!
//! DESIGN
//! ======
//! Predicates are pure and total: they take `&str` and answer `bool`, never
//! panic, and never touch the network. A [`FormKind`] maps to an ordered list
//! of [`FieldRule`]s; validating a form yields `field -> first failing message`
//! and an empty map means the form may be submitted.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::Category;

/// Raw form values keyed by field name.
pub type FormData = BTreeMap<String, String>;
/// Validation failures keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MAX_CHARS: usize = 10_000;
pub const COMMENT_MAX_CHARS: usize = 1_000;
pub const RESET_PASSWORD_MIN_CHARS: usize = 6;
const PASSWORD_SYMBOLS: &str = "@$!%*#?&";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PASSWORD_CHARSET_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\d@$!%*#?&]{8,}$").ok());
static USER_ID_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{4,20}$").ok());
static NAME_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[가-힣A-Za-z]{2,10}$").ok());
static MARKUP_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

// =============================================================
// Predicates
// =============================================================

pub fn is_valid_email(email: &str) -> bool {
    matches(&EMAIL_RE, email)
}

/// 8+ characters from `[A-Za-z0-9@$!%*#?&]` with at least one letter, digit and symbol.
pub fn is_valid_password(password: &str) -> bool {
    matches(&PASSWORD_CHARSET_RE, password)
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub fn is_valid_user_id(user_id: &str) -> bool {
    matches(&USER_ID_RE, user_id)
}

pub fn is_valid_name(name: &str) -> bool {
    matches(&NAME_RE, name)
}

pub fn is_valid_title(title: &str) -> bool {
    (1..=TITLE_MAX_CHARS).contains(&title.chars().count())
}

/// Remove `<...>` tags so rich-text markup does not count towards length.
pub fn strip_markup(content: &str) -> String {
    match MARKUP_RE.as_ref() {
        Some(re) => re.replace_all(content, "").into_owned(),
        None => content.to_owned(),
    }
}

/// Length bound measured on the text left after stripping markup.
pub fn is_valid_content(content: &str) -> bool {
    (1..=CONTENT_MAX_CHARS).contains(&strip_markup(content).chars().count())
}

/// Accepts category codes and their Korean labels.
pub fn is_valid_category(category: &str) -> bool {
    Category::parse(category).is_some()
}

/// Comment body check, returning the message to show on failure.
///
/// # Errors
///
/// Returns the user-facing message when the comment is blank or too long.
pub fn validate_comment(content: &str) -> Result<(), &'static str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("댓글 내용을 입력해주세요.");
    }
    if trimmed.chars().count() > COMMENT_MAX_CHARS {
        return Err("댓글은 1000자를 초과할 수 없습니다.");
    }
    Ok(())
}

// =============================================================
// Registry
// =============================================================

/// Named form types with registered rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
    Post,
    Password,
    Profile,
    FindId,
    ResetPassword,
}

impl FormKind {
    pub const ALL: [Self; 7] = [
        Self::Login,
        Self::Signup,
        Self::Post,
        Self::Password,
        Self::Profile,
        Self::FindId,
        Self::ResetPassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Post => "post",
            Self::Password => "password",
            Self::Profile => "profile",
            Self::FindId => "find-id",
            Self::ResetPassword => "reset-password",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Ordered rules for this form.
    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::Login => LOGIN_RULES,
            Self::Signup => SIGNUP_RULES,
            Self::Post => POST_RULES,
            Self::Password => PASSWORD_RULES,
            Self::Profile => PROFILE_RULES,
            Self::FindId => FIND_ID_RULES,
            Self::ResetPassword => RESET_PASSWORD_RULES,
        }
    }
}

/// One field's check: returns the failing message, or `None` when valid.
pub struct FieldRule {
    pub field: &'static str,
    check: fn(&FormData) -> Option<&'static str>,
}

impl FieldRule {
    pub fn check(&self, data: &FormData) -> Option<&'static str> {
        (self.check)(data)
    }
}

/// Validate every field of `kind`.
pub fn validate(kind: FormKind, data: &FormData) -> FieldErrors {
    collect(kind.rules().iter(), data)
}

/// Validate only the listed fields of `kind` (inline checks while typing).
pub fn validate_fields(kind: FormKind, data: &FormData, only: &[&str]) -> FieldErrors {
    collect(kind.rules().iter().filter(|r| only.contains(&r.field)), data)
}

fn collect<'a>(rules: impl Iterator<Item = &'a FieldRule>, data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in rules {
        if errors.contains_key(rule.field) {
            continue;
        }
        if let Some(message) = rule.check(data) {
            errors.insert(rule.field.to_owned(), message.to_owned());
        }
    }
    errors
}

fn field<'a>(data: &'a FormData, key: &str) -> &'a str {
    data.get(key).map_or("", String::as_str)
}

/// Shared required-then-shape check.
fn required(value: &str, missing: &'static str, valid: fn(&str) -> bool, invalid: &'static str) -> Option<&'static str> {
    if value.is_empty() {
        Some(missing)
    } else if !valid(value) {
        Some(invalid)
    } else {
        None
    }
}

const MSG_PASSWORD_RULE: &str = "비밀번호는 8자 이상, 영문+숫자+특수문자 조합이어야 합니다.";
const MSG_PASSWORD_CONFIRM: &str = "비밀번호 확인을 입력해주세요.";
const MSG_PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";
const MSG_EMAIL_MISSING: &str = "이메일을 입력해주세요.";
const MSG_EMAIL_INVALID: &str = "올바른 이메일 형식을 입력해주세요.";
const MSG_NAME_MISSING: &str = "이름을 입력해주세요.";
const MSG_NAME_INVALID: &str = "이름은 2-10자의 한글 또는 영문만 사용 가능합니다.";
const MSG_USER_ID_MISSING: &str = "아이디를 입력해주세요.";

fn email_rule(data: &FormData) -> Option<&'static str> {
    required(field(data, "email").trim(), MSG_EMAIL_MISSING, is_valid_email, MSG_EMAIL_INVALID)
}

fn name_rule(data: &FormData) -> Option<&'static str> {
    required(field(data, "name"), MSG_NAME_MISSING, is_valid_name, MSG_NAME_INVALID)
}

// login
const LOGIN_RULES: &[FieldRule] = &[
    FieldRule {
        field: "userId",
        check: |d| field(d, "userId").is_empty().then_some(MSG_USER_ID_MISSING),
    },
    FieldRule {
        field: "password",
        check: |d| field(d, "password").is_empty().then_some("비밀번호를 입력해주세요."),
    },
];

// signup
const SIGNUP_RULES: &[FieldRule] = &[
    FieldRule {
        field: "userId",
        check: |d| {
            required(
                field(d, "userId"),
                MSG_USER_ID_MISSING,
                is_valid_user_id,
                "아이디는 4-20자의 영문과 숫자만 사용 가능합니다.",
            )
        },
    },
    FieldRule { field: "email", check: email_rule },
    FieldRule {
        field: "password",
        check: |d| required(field(d, "password"), "비밀번호를 입력해주세요.", is_valid_password, MSG_PASSWORD_RULE),
    },
    FieldRule {
        field: "passwordConfirm",
        check: |d| {
            let confirm = field(d, "passwordConfirm");
            if confirm.is_empty() {
                Some(MSG_PASSWORD_CONFIRM)
            } else if confirm != field(d, "password") {
                Some(MSG_PASSWORD_MISMATCH)
            } else {
                None
            }
        },
    },
    FieldRule { field: "name", check: name_rule },
];

// post
const POST_RULES: &[FieldRule] = &[
    FieldRule {
        field: "category",
        check: |d| {
            required(field(d, "category"), "카테고리를 선택해주세요.", is_valid_category, "올바른 카테고리를 선택해주세요.")
        },
    },
    FieldRule {
        field: "title",
        check: |d| required(field(d, "title").trim(), "제목을 입력해주세요.", is_valid_title, "제목은 1-100자로 입력해주세요."),
    },
    FieldRule {
        field: "content",
        check: |d| {
            let text = strip_markup(field(d, "content"));
            if text.trim().is_empty() {
                Some("내용을 입력해주세요.")
            } else if !is_valid_content(field(d, "content")) {
                Some("내용은 1-10000자로 입력해주세요.")
            } else {
                None
            }
        },
    },
];

// password change: only checked when a new password is given
const PASSWORD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "password",
        check: |d| {
            let pw = field(d, "password");
            (!pw.is_empty() && !is_valid_password(pw)).then_some(MSG_PASSWORD_RULE)
        },
    },
    FieldRule {
        field: "passwordConfirm",
        check: |d| {
            let pw = field(d, "password");
            let confirm = field(d, "passwordConfirm");
            if pw.is_empty() {
                None
            } else if confirm.is_empty() {
                Some(MSG_PASSWORD_CONFIRM)
            } else if pw != confirm {
                Some(MSG_PASSWORD_MISMATCH)
            } else {
                None
            }
        },
    },
];

// profile
const PROFILE_RULES: &[FieldRule] =
    &[FieldRule { field: "name", check: name_rule }, FieldRule { field: "email", check: email_rule }];

// find account
const FIND_ID_RULES: &[FieldRule] = &[FieldRule { field: "email", check: email_rule }];

const RESET_PASSWORD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "userId",
        check: |d| field(d, "userId").trim().is_empty().then_some(MSG_USER_ID_MISSING),
    },
    FieldRule { field: "email", check: email_rule },
    FieldRule {
        field: "newPassword",
        check: |d| {
            let pw = field(d, "newPassword");
            if pw.trim().is_empty() {
                Some("새 비밀번호를 입력해주세요.")
            } else if pw.chars().count() < RESET_PASSWORD_MIN_CHARS {
                Some("비밀번호는 6자 이상이어야 합니다.")
            } else {
                None
            }
        },
    },
    FieldRule {
        field: "confirmPassword",
        check: |d| (field(d, "newPassword") != field(d, "confirmPassword")).then_some(MSG_PASSWORD_MISMATCH),
    },
];

/// Build a [`FormData`] from `(field, value)` pairs.
pub fn form_data<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> FormData {
    pairs.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
}
