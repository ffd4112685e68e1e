// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements for account credentials.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password does not meet complexity requirements.
    #[error(
        "Password must contain at least {required} of the following: uppercase letter, lowercase letter, digit, symbol (found {found})"
    )]
    InsufficientComplexity { required: usize, found: usize },

    /// Password matches a forbidden value.
    #[error("Password must not match {field}")]
    MatchesForbiddenField { field: String },

    /// Password and confirmation do not match.
    #[error("Password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
    /// Minimum number of character classes required (out of 4).
    pub min_complexity: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            min_complexity: 3,
        }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate
    /// * `confirmation` - The password confirmation
    /// * `email` - The sign-in email (password must not match)
    /// * `full_name` - The display name (password must not match)
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password does not meet
    /// policy requirements.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        email: &str,
        full_name: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        if password.len() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        let complexity: usize = Self::calculate_complexity(password);
        if complexity < self.min_complexity {
            return Err(PasswordPolicyError::InsufficientComplexity {
                required: self.min_complexity,
                found: complexity,
            });
        }

        // Forbidden values are compared case-insensitively.
        let password_lower: String = password.to_lowercase();

        if password_lower == email.to_lowercase() {
            return Err(PasswordPolicyError::MatchesForbiddenField {
                field: String::from("email"),
            });
        }

        if !full_name.is_empty() && password_lower == full_name.to_lowercase() {
            return Err(PasswordPolicyError::MatchesForbiddenField {
                field: String::from("full_name"),
            });
        }

        Ok(())
    }

    /// Calculates the complexity score of a password.
    ///
    /// Returns the number of character classes present: uppercase
    /// letters, lowercase letters, digits, symbols.
    fn calculate_complexity(password: &str) -> usize {
        let mut has_uppercase: bool = false;
        let mut has_lowercase: bool = false;
        let mut has_digit: bool = false;
        let mut has_symbol: bool = false;

        for c in password.chars() {
            if c.is_ascii_uppercase() {
                has_uppercase = true;
            } else if c.is_ascii_lowercase() {
                has_lowercase = true;
            } else if c.is_ascii_digit() {
                has_digit = true;
            } else if c.is_ascii_punctuation() {
                has_symbol = true;
            }
        }

        [has_uppercase, has_lowercase, has_digit, has_symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        assert!(
            policy
                .validate("MyP@ssw0rd123", "MyP@ssw0rd123", "user@example.com", "Test User")
                .is_ok()
        );
        assert!(
            policy
                .validate("MyPassword123", "MyPassword123", "user@example.com", "Test User")
                .is_ok()
        );
    }

    #[test]
    fn test_password_too_short() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result = policy.validate("Short1!", "Short1!", "user@example.com", "Test User");
        assert_eq!(result, Err(PasswordPolicyError::TooShort { min_length: 12 }));
    }

    #[test]
    fn test_insufficient_complexity() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result = policy.validate(
            "alllowercase",
            "alllowercase",
            "user@example.com",
            "Test User",
        );
        assert_eq!(
            result,
            Err(PasswordPolicyError::InsufficientComplexity {
                required: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_matches_email() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result = policy.validate(
            "User@Example.Com1",
            "User@Example.Com1",
            "user@example.com1",
            "Test User",
        );
        assert_eq!(
            result,
            Err(PasswordPolicyError::MatchesForbiddenField {
                field: String::from("email")
            })
        );
    }

    #[test]
    fn test_confirmation_mismatch() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result = policy.validate(
            "MyP@ssw0rd123",
            "MyP@ssw0rd124",
            "user@example.com",
            "Test User",
        );
        assert_eq!(result, Err(PasswordPolicyError::ConfirmationMismatch));
    }

    #[test]
    fn test_complexity_calculation() {
        assert_eq!(PasswordPolicy::calculate_complexity("Aa1!"), 4);
        assert_eq!(PasswordPolicy::calculate_complexity("Aa1"), 3);
        assert_eq!(PasswordPolicy::calculate_complexity("abc!"), 2);
        assert_eq!(PasswordPolicy::calculate_complexity("abc"), 1);
        assert_eq!(PasswordPolicy::calculate_complexity(""), 0);
    }
}
