// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account, profile, and session persistence tests.

use super::setup;
use crate::PersistenceError;
use cutshop_domain::Role;

#[test]
fn test_create_account_and_fetch_by_email() {
    let mut persistence = setup();

    let profile_id = persistence
        .create_account(
            "usr_0001",
            "clerk@example.com",
            Some("Test Clerk"),
            "MyP@ssw0rd123",
            Role::Guest,
            "2026-01-01T00:00:00Z",
        )
        .unwrap();
    assert!(profile_id > 0);

    let account = persistence
        .get_account_by_email("clerk@example.com")
        .unwrap()
        .expect("account should exist");

    assert_eq!(account.user_id, "usr_0001");
    assert_eq!(account.role, "guest");
    // The stored hash is never the plain-text password.
    assert_ne!(account.password_hash, "MyP@ssw0rd123");
    assert!(persistence
        .verify_password("MyP@ssw0rd123", &account.password_hash)
        .unwrap());
    assert!(!persistence
        .verify_password("WrongPassword1!", &account.password_hash)
        .unwrap());
}

#[test]
fn test_duplicate_email_is_rejected() {
    let mut persistence = setup();

    persistence
        .create_account(
            "usr_0001",
            "clerk@example.com",
            None,
            "MyP@ssw0rd123",
            Role::Guest,
            "2026-01-01T00:00:00Z",
        )
        .unwrap();

    let result = persistence.create_account(
        "usr_0002",
        "clerk@example.com",
        None,
        "OtherP@ss4567",
        Role::Guest,
        "2026-01-02T00:00:00Z",
    );

    assert!(matches!(result, Err(PersistenceError::DuplicateRecord(_))));
}

#[test]
fn test_set_profile_role() {
    let mut persistence = setup();

    persistence
        .create_account(
            "usr_0001",
            "clerk@example.com",
            None,
            "MyP@ssw0rd123",
            Role::Guest,
            "2026-01-01T00:00:00Z",
        )
        .unwrap();

    persistence.set_profile_role("usr_0001", Role::Clerk).unwrap();

    let profile = persistence
        .get_profile("usr_0001")
        .unwrap()
        .expect("profile should exist");
    assert_eq!(profile.role, Role::Clerk);
}

#[test]
fn test_set_role_for_missing_profile_fails() {
    let mut persistence = setup();

    let result = persistence.set_profile_role("usr_missing", Role::Clerk);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_list_profiles_newest_first() {
    let mut persistence = setup();

    for (i, email) in ["a@example.com", "b@example.com", "c@example.com"]
        .iter()
        .enumerate()
    {
        persistence
            .create_account(
                &format!("usr_{i}"),
                email,
                None,
                "MyP@ssw0rd123",
                Role::Guest,
                "2026-01-01T00:00:00Z",
            )
            .unwrap();
    }

    let profiles = persistence.list_profiles().unwrap();
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].email, "c@example.com");
    assert_eq!(profiles[2].email, "a@example.com");
}

#[test]
fn test_session_round_trip_and_deletion() {
    let mut persistence = setup();

    persistence
        .create_account(
            "usr_0001",
            "clerk@example.com",
            None,
            "MyP@ssw0rd123",
            Role::Clerk,
            "2026-01-01T00:00:00Z",
        )
        .unwrap();

    persistence
        .create_session(
            "token-abc",
            "usr_0001",
            "2026-01-01T00:00:00Z",
            "2026-01-31T00:00:00Z",
        )
        .unwrap();

    let session = persistence
        .get_session_by_token("token-abc")
        .unwrap()
        .expect("session should exist");
    assert_eq!(session.user_id, "usr_0001");

    persistence.delete_session("token-abc").unwrap();
    assert!(persistence.get_session_by_token("token-abc").unwrap().is_none());
}

#[test]
fn test_expired_sessions_are_swept() {
    let mut persistence = setup();

    persistence
        .create_account(
            "usr_0001",
            "clerk@example.com",
            None,
            "MyP@ssw0rd123",
            Role::Clerk,
            "2026-01-01T00:00:00Z",
        )
        .unwrap();

    persistence
        .create_session(
            "token-old",
            "usr_0001",
            "2026-01-01T00:00:00Z",
            "2026-01-02T00:00:00Z",
        )
        .unwrap();
    persistence
        .create_session(
            "token-live",
            "usr_0001",
            "2026-01-01T00:00:00Z",
            "2026-12-31T00:00:00Z",
        )
        .unwrap();

    let removed = persistence
        .delete_expired_sessions("2026-06-01T00:00:00Z")
        .unwrap();

    assert_eq!(removed, 1);
    assert!(persistence.get_session_by_token("token-old").unwrap().is_none());
    assert!(persistence.get_session_by_token("token-live").unwrap().is_some());
}

#[test]
fn test_session_requires_existing_user() {
    let mut persistence = setup();

    let result = persistence.create_session(
        "token-abc",
        "usr_ghost",
        "2026-01-01T00:00:00Z",
        "2026-01-31T00:00:00Z",
    );

    // Foreign key enforcement rejects sessions for unknown users.
    assert!(result.is_err());
}
