// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the customer has not been persisted yet.
    pub customer_id: Option<i64>,
    /// Company or contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Default delivery address for this customer's orders.
    pub delivery_address: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

impl Customer {
    /// Creates a new customer record without a persisted ID.
    #[must_use]
    pub const fn new(
        name: String,
        email: String,
        phone: String,
        delivery_address: String,
        created_at: String,
    ) -> Self {
        Self {
            customer_id: None,
            name,
            email,
            phone,
            delivery_address,
            created_at,
        }
    }
}
