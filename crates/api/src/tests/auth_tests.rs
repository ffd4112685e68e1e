// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication, session, and access-check tests.

use crate::auth::AuthenticationService;
use crate::error::ApiError;
use crate::handlers::check_access;
use cutshop::{AccessPolicy, Decision, PrincipalResolution};
use cutshop_domain::Role;

use super::helpers::{create_test_signup_request, setup_persistence};

#[test]
fn test_signup_assigns_guest_role() {
    let mut persistence = setup_persistence();

    let profile = AuthenticationService::signup(
        &mut persistence,
        &create_test_signup_request("new@example.com"),
    )
    .expect("signup must succeed");

    assert_eq!(profile.role, Role::Guest);
    assert_eq!(profile.email, "new@example.com");
    assert!(profile.user_id.starts_with("usr_"));
}

#[test]
fn test_signup_rejects_duplicate_email() {
    let mut persistence = setup_persistence();
    let request = create_test_signup_request("new@example.com");

    AuthenticationService::signup(&mut persistence, &request).unwrap();
    let result = AuthenticationService::signup(&mut persistence, &request);

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_signup_rejects_weak_password() {
    let mut persistence = setup_persistence();

    let mut request = create_test_signup_request("new@example.com");
    request.password = String::from("short");
    request.confirmation = String::from("short");

    let result = AuthenticationService::signup(&mut persistence, &request);
    assert!(matches!(result, Err(ApiError::PasswordPolicyViolation { .. })));
}

#[test]
fn test_signup_rejects_malformed_email() {
    let mut persistence = setup_persistence();

    let request = create_test_signup_request("not-an-email");

    let result = AuthenticationService::signup(&mut persistence, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_login_and_session_round_trip() {
    let mut persistence = setup_persistence();
    AuthenticationService::signup(
        &mut persistence,
        &create_test_signup_request("new@example.com"),
    )
    .unwrap();

    let (token, principal, profile) =
        AuthenticationService::login(&mut persistence, "new@example.com", "MyP@ssw0rd123")
            .expect("login must succeed");

    assert_eq!(principal.role, Role::Guest);
    assert_eq!(profile.email, "new@example.com");

    let (validated, _) = AuthenticationService::validate_session(&mut persistence, &token)
        .expect("session must validate");
    assert_eq!(validated.id, principal.id);

    AuthenticationService::logout(&mut persistence, &token).expect("logout must succeed");
    assert!(AuthenticationService::validate_session(&mut persistence, &token).is_err());
}

#[test]
fn test_login_rejects_wrong_password() {
    let mut persistence = setup_persistence();
    AuthenticationService::signup(
        &mut persistence,
        &create_test_signup_request("new@example.com"),
    )
    .unwrap();

    let result =
        AuthenticationService::login(&mut persistence, "new@example.com", "WrongPassword1!");
    assert!(result.is_err());
}

#[test]
fn test_resolve_principal_states() {
    let mut persistence = setup_persistence();
    AuthenticationService::signup(
        &mut persistence,
        &create_test_signup_request("new@example.com"),
    )
    .unwrap();
    let (token, _, _) =
        AuthenticationService::login(&mut persistence, "new@example.com", "MyP@ssw0rd123").unwrap();

    // No token resolves to an absent principal.
    let absent = AuthenticationService::resolve_principal(&mut persistence, None);
    assert_eq!(absent, PrincipalResolution::Resolved(None));

    // A garbage token also resolves to absent, not an error.
    let garbage = AuthenticationService::resolve_principal(&mut persistence, Some("nope"));
    assert_eq!(garbage, PrincipalResolution::Resolved(None));

    // A live token resolves to the signed-in principal.
    let live = AuthenticationService::resolve_principal(&mut persistence, Some(&token));
    assert!(live.principal().is_some());
}

#[test]
fn test_check_access_drives_navigation_decisions() {
    let mut persistence = setup_persistence();
    AuthenticationService::signup(
        &mut persistence,
        &create_test_signup_request("new@example.com"),
    )
    .unwrap();
    let (token, _, _) =
        AuthenticationService::login(&mut persistence, "new@example.com", "MyP@ssw0rd123").unwrap();

    let policy = AccessPolicy::default_routes();

    // Signed out: protected resources redirect to sign-in.
    let signed_out = AuthenticationService::resolve_principal(&mut persistence, None);
    assert_eq!(check_access(&policy, "/", &signed_out), Decision::RedirectToAuth);

    // Signed in as guest: the guest dashboard admits, payroll denies.
    let signed_in = AuthenticationService::resolve_principal(&mut persistence, Some(&token));
    assert_eq!(check_access(&policy, "/guest", &signed_in), Decision::Admit);
    assert_eq!(check_access(&policy, "/payroll", &signed_in), Decision::Deny);

    // Resolution in flight: the decision suspends.
    assert_eq!(
        check_access(&policy, "/payroll", &PrincipalResolution::Pending),
        Decision::Pending
    );
}
