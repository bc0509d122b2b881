//! Validation tests for the thread schemas.

use agora_core::{NewThread, Thread, check};
use chrono::NaiveDate;
use uuid::Uuid;

fn sample_thread() -> Thread {
    Thread {
        thread_id: Uuid::new_v4(),
        thread_profile_id: Uuid::new_v4(),
        thread_reply_thread_id: None,
        thread_content: "What's the best trailhead near town?".to_string(),
        thread_datetime: NaiveDate::from_ymd_opt(2026, 7, 21)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        thread_image_url: None,
    }
}

#[test]
fn valid_thread_passes() {
    assert!(check(&sample_thread()).is_ok());
}

#[test]
fn top_level_and_reply_are_distinguished_by_parent() {
    let top_level = sample_thread();
    assert!(top_level.is_top_level());

    let reply = Thread {
        thread_reply_thread_id: Some(top_level.thread_id),
        ..sample_thread()
    };
    assert!(!reply.is_top_level());
}

#[test]
fn content_longer_than_255_characters_is_rejected() {
    let thread = Thread {
        thread_content: "a".repeat(256),
        ..sample_thread()
    };
    let err = check(&thread).unwrap_err();
    assert!(
        err.violations()
            .iter()
            .any(|v| v.field == "thread_content")
    );

    let thread = Thread {
        thread_content: "a".repeat(255),
        ..sample_thread()
    };
    assert!(check(&thread).is_ok());
}

#[test]
fn malformed_image_url_is_rejected() {
    let thread = Thread {
        thread_image_url: Some("not a url".to_string()),
        ..sample_thread()
    };
    let err = check(&thread).unwrap_err();
    assert!(
        err.violations()
            .iter()
            .any(|v| v.field == "thread_image_url")
    );
}

#[test]
fn insert_draft_shares_the_content_constraint() {
    let draft = NewThread {
        thread_profile_id: Uuid::new_v4(),
        thread_reply_thread_id: None,
        thread_content: "First!".to_string(),
        thread_image_url: Some("https://example.com/pic.jpg".to_string()),
    };
    assert!(check(&draft).is_ok());

    let bad = NewThread {
        thread_content: "a".repeat(256),
        ..draft
    };
    assert!(check(&bad).is_err());
}
