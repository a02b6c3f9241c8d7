use super::*;

// =============================================================
// Predicates
// =============================================================

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["", "plainaddress", "user@", "@example.com", "user@example", "us er@example.com", "user@@ex.com"] {
        assert!(!is_valid_email(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn email_accepts_well_formed_addresses() {
    for good in ["a@a.com", "first.last@sub.example.co.kr", "user+tag@example.org"] {
        assert!(is_valid_email(good), "{good:?} should be valid");
    }
}

#[test]
fn password_reference_value_passes() {
    assert!(is_valid_password("Abcdef1!"));
}

#[test]
fn password_rejects_short_or_incomplete_values() {
    for bad in ["Ab1!", "Abcdefgh1", "Abcdefgh!", "12345678!", "Abcdef1!~", "Abcdef 1!", ""] {
        assert!(!is_valid_password(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn user_id_bounds() {
    assert!(is_valid_user_id("abcd"));
    assert!(is_valid_user_id("a1b2c3d4e5f6g7h8i9j0"));
    assert!(!is_valid_user_id("abc"));
    assert!(!is_valid_user_id("a1b2c3d4e5f6g7h8i9j0k"));
    assert!(!is_valid_user_id("user_01"));
}

#[test]
fn name_accepts_korean_and_latin_letters() {
    assert!(is_valid_name("홍길동"));
    assert!(is_valid_name("Kim"));
    assert!(!is_valid_name("김"));
    assert!(!is_valid_name("Kim 1"));
    assert!(!is_valid_name("가나다라마바사아자차카"));
}

#[test]
fn title_counts_characters_not_bytes() {
    assert!(is_valid_title(&"가".repeat(100)));
    assert!(!is_valid_title(&"가".repeat(101)));
    assert!(!is_valid_title(""));
}

#[test]
fn content_length_ignores_markup() {
    let body = format!("<p>{}</p>", "a".repeat(CONTENT_MAX_CHARS));
    assert!(is_valid_content(&body));
    assert!(!is_valid_content("<p></p>"));
    assert_eq!(strip_markup("<b>hi</b> <i>there</i>"), "hi there");
}

#[test]
fn category_accepts_codes_and_labels() {
    assert!(is_valid_category("DEV"));
    assert!(is_valid_category("질문"));
    assert!(!is_valid_category("자유"));
}

#[test]
fn comment_bounds() {
    assert_eq!(validate_comment("   "), Err("댓글 내용을 입력해주세요."));
    assert_eq!(validate_comment(&"a".repeat(1001)), Err("댓글은 1000자를 초과할 수 없습니다."));
    assert_eq!(validate_comment("좋은 글 감사합니다"), Ok(()));
}

// =============================================================
// Registry
// =============================================================

#[test]
fn form_kind_names_round_trip() {
    for kind in FormKind::ALL {
        assert_eq!(FormKind::parse(kind.name()), Some(kind));
    }
    assert_eq!(FormKind::parse("unknown"), None);
}

#[test]
fn login_requires_both_fields() {
    let errors = validate(FormKind::Login, &FormData::new());
    assert_eq!(errors.get("userId").map(String::as_str), Some("아이디를 입력해주세요."));
    assert_eq!(errors.get("password").map(String::as_str), Some("비밀번호를 입력해주세요."));
}

#[test]
fn valid_signup_has_no_errors() {
    let data = form_data([
        ("userId", "tester01"),
        ("email", "tester@example.com"),
        ("password", "Abcdef1!"),
        ("passwordConfirm", "Abcdef1!"),
        ("name", "홍길동"),
    ]);
    assert!(validate(FormKind::Signup, &data).is_empty());
}

#[test]
fn signup_reports_first_failing_message_per_field() {
    let data = form_data([
        ("userId", "ab"),
        ("email", "bad"),
        ("password", "short"),
        ("passwordConfirm", "other"),
        ("name", ""),
    ]);
    let errors = validate(FormKind::Signup, &data);
    assert_eq!(errors["userId"], "아이디는 4-20자의 영문과 숫자만 사용 가능합니다.");
    assert_eq!(errors["email"], "올바른 이메일 형식을 입력해주세요.");
    assert_eq!(errors["password"], "비밀번호는 8자 이상, 영문+숫자+특수문자 조합이어야 합니다.");
    assert_eq!(errors["passwordConfirm"], "비밀번호가 일치하지 않습니다.");
    assert_eq!(errors["name"], "이름을 입력해주세요.");
}

#[test]
fn validate_fields_limits_scope() {
    let data = form_data([("userId", "ab")]);
    let errors = validate_fields(FormKind::Signup, &data, &["userId"]);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("userId"));
}

#[test]
fn post_form_accepts_category_codes() {
    let data = form_data([("category", "NOTICE"), ("title", "공지사항"), ("content", "<p>본문</p>")]);
    assert!(validate(FormKind::Post, &data).is_empty());
}

#[test]
fn post_form_treats_markup_only_content_as_missing() {
    let data = form_data([("category", "DEV"), ("title", "t"), ("content", "<p><br></p>")]);
    assert_eq!(validate(FormKind::Post, &data)["content"], "내용을 입력해주세요.");
}

#[test]
fn post_form_missing_category() {
    let data = form_data([("title", "t"), ("content", "c")]);
    assert_eq!(validate(FormKind::Post, &data)["category"], "카테고리를 선택해주세요.");
}

#[test]
fn password_form_is_optional() {
    assert!(validate(FormKind::Password, &FormData::new()).is_empty());
    let errors = validate(FormKind::Password, &form_data([("password", "Abcdef1!")]));
    assert_eq!(errors["passwordConfirm"], "비밀번호 확인을 입력해주세요.");
}

#[test]
fn profile_form_checks_name_and_email() {
    let errors = validate(FormKind::Profile, &form_data([("name", "Lee"), ("email", "")]));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["email"], "이메일을 입력해주세요.");
}

#[test]
fn reset_password_requires_six_chars_and_match() {
    let data = form_data([
        ("userId", "tester01"),
        ("email", "a@a.com"),
        ("newPassword", "12345"),
        ("confirmPassword", "123456"),
    ]);
    let errors = validate(FormKind::ResetPassword, &data);
    assert_eq!(errors["newPassword"], "비밀번호는 6자 이상이어야 합니다.");
    assert_eq!(errors["confirmPassword"], "비밀번호가 일치하지 않습니다.");
}
