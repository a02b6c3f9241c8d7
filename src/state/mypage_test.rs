use futures::executor::block_on;
use futures::future::ready;

use super::*;

fn info() -> UserInfo {
    UserInfo { id: Some(1), user_id: "tester01".to_owned(), name: "홍길동".to_owned(), ..UserInfo::default() }
}

fn page(ids: &[i64]) -> Page<PostSummary> {
    Page { content: ids.iter().map(|&id| PostSummary { id, ..PostSummary::default() }).collect(), ..Page::default() }
}

#[test]
fn all_three_succeed() {
    let data = block_on(load_mypage(ready(Ok(info())), ready(Ok(page(&[1, 2]))), ready(Ok(page(&[3]))))).unwrap();
    assert_eq!(data.info.user_id, "tester01");
    assert_eq!(data.posts.len(), 2);
    assert_eq!(data.scraps[0].id, 3);
}

#[test]
fn any_failure_fails_the_load() {
    let down = || ApiError::Network("down".to_owned());
    assert!(block_on(load_mypage(ready(Err(down())), ready(Ok(page(&[]))), ready(Ok(page(&[]))))).is_err());
    assert!(block_on(load_mypage(ready(Ok(info())), ready(Err(down())), ready(Ok(page(&[]))))).is_err());
    assert_eq!(
        block_on(load_mypage(ready(Ok(info())), ready(Ok(page(&[]))), ready(Err(down())))),
        Err(ApiError::Network("down".to_owned()))
    );
}

#[test]
fn unknown_user_fails_the_load() {
    let missing = UserInfo { message: Some("사용자를 찾을 수 없습니다.".to_owned()), ..UserInfo::default() };
    let err = block_on(load_mypage(ready(Ok(missing)), ready(Ok(page(&[]))), ready(Ok(page(&[]))))).unwrap_err();
    assert_eq!(err.server_message(), Some("사용자를 찾을 수 없습니다."));
}

#[test]
fn native_fetch_is_unavailable() {
    assert_eq!(block_on(fetch_mypage("tester01")), Err(ApiError::Unavailable));
}

#[test]
fn tab_labels() {
    assert_eq!(MypageTab::default(), MypageTab::Posts);
    assert_eq!(MypageTab::ALL.map(MypageTab::label), ["내가 쓴 글", "스크랩", "내 댓글"]);
}
