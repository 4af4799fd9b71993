// SPDX-License-Identifier: MIT

//! Unit tests for observer module

use super::observer::*;
use axum::http::StatusCode;

#[test]
fn test_default_status_is_ok() {
    let observer = ResponseObserver::new();
    assert_eq!(observer.status(), StatusCode::OK);
    assert!(!observer.committed());
}

#[test]
fn test_first_status_wins() {
    let mut observer = ResponseObserver::new();
    observer.set_status(StatusCode::INTERNAL_SERVER_ERROR);
    observer.set_status(StatusCode::OK);

    assert_eq!(observer.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_repeated_set_status_is_noop() {
    let mut observer = ResponseObserver::new();
    observer.set_status(StatusCode::NOT_FOUND);
    observer.set_status(StatusCode::BAD_REQUEST);
    observer.set_status(StatusCode::OK);

    assert_eq!(observer.status(), StatusCode::NOT_FOUND);
    assert!(observer.committed());
}

#[test]
fn test_body_write_commits_implicit_ok() {
    let mut observer = ResponseObserver::new();
    let written = observer.write(b"hello");

    assert_eq!(written, 5);
    assert!(observer.committed());
    assert_eq!(observer.status(), StatusCode::OK);
}

#[test]
fn test_write_after_explicit_status_keeps_status() {
    let mut observer = ResponseObserver::new();
    observer.set_status(StatusCode::INTERNAL_SERVER_ERROR);
    observer.write(b"error body");

    assert_eq!(observer.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_status_after_write_is_ignored() {
    let mut observer = ResponseObserver::new();
    observer.write(b"body first");
    observer.set_status(StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(observer.status(), StatusCode::OK);
}

#[test]
fn test_write_reports_accepted_length() {
    let mut observer = ResponseObserver::new();
    assert_eq!(observer.write(b""), 0);
    assert_eq!(observer.write(b"abc"), 3);
}
