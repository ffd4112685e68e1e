// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod access;
mod error;
mod lifecycle;
mod repository;

#[cfg(test)]
mod tests;

pub use access::{AccessPolicy, AccessRule, Decision, Principal, PrincipalResolution, evaluate};
pub use error::CoreError;
pub use lifecycle::{apply_transition, can_transition, edge_roles, progress_of};
pub use repository::{
    CustomerRepository, EmployeeRepository, JobOrderRepository, ProfileRepository, RepositoryError,
};
