// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for core tests.

use crate::access::{Principal, PrincipalResolution};
use cutshop_domain::{JobOrder, JobStatus, Priority, Role, SteelType};

/// Creates a resolved resolution carrying a principal with the given role.
pub fn resolved(role: Role) -> PrincipalResolution {
    PrincipalResolution::Resolved(Some(Principal::new(String::from("user-test"), role)))
}

/// Creates a resolution for an absent (signed-out) principal.
pub const fn resolved_absent() -> PrincipalResolution {
    PrincipalResolution::Resolved(None)
}

/// Creates a test job order in the given status.
pub fn create_test_order(status: JobStatus) -> JobOrder {
    let mut order = JobOrder::new(
        String::from("PO-2026-001"),
        String::from("ABC Manufacturing"),
        String::from("procurement@abc-manufacturing.com"),
        String::from("+1 (555) 123-4567"),
        String::from("123 Industrial Avenue"),
        SteelType::CarbonSteel,
        50,
        100.0,
        200.0,
        5.0,
        Priority::High,
        String::from("2026-01-15T09:30:00Z"),
    );
    order.job_order_id = Some(1);
    order.status = status;
    order
}
