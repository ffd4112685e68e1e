// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::job_status::JobStatus;
use crate::priority::Priority;
use crate::steel_type::SteelType;
use serde::{Deserialize, Serialize};

/// A steel-cutting job order.
///
/// Created with status `pending` by order intake. The status field is
/// mutated only through the lifecycle transition operation, which always
/// produces a fresh snapshot; orders are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOrder {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the order has not been persisted yet.
    pub job_order_id: Option<i64>,
    /// The customer's purchase order number.
    pub po_number: String,
    /// Customer name, as entered at intake.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Customer contact phone.
    pub customer_phone: String,
    /// Where the finished order is delivered.
    pub delivery_address: String,
    /// Material from the shop catalog.
    pub steel_type: SteelType,
    /// Number of pieces to cut. Strictly positive.
    pub quantity: u32,
    /// Piece width in millimeters. Strictly positive.
    pub width_mm: f64,
    /// Piece length in millimeters. Strictly positive.
    pub length_mm: f64,
    /// Piece thickness in millimeters. Strictly positive.
    pub thickness_mm: f64,
    /// Current lifecycle status.
    pub status: JobStatus,
    /// Scheduling priority. Independent of status.
    pub priority: Priority,
    /// Measured weight in kilograms, recorded at the weighing stage.
    pub weight_kg: Option<f64>,
    /// Quoted price in minor currency units.
    pub price: Option<i64>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Requested delivery date (ISO 8601 date), if any.
    pub delivery_date: Option<String>,
    /// Free-form handling notes from the customer.
    pub special_instructions: Option<String>,
    /// Name of the cutter assigned to this order, if any.
    pub assigned_cutter: Option<String>,
    /// Pieces cut so far. Never exceeds `quantity`; set to `quantity`
    /// when the order reaches `completed`.
    pub completed_quantity: u32,
    /// Completion timestamp (ISO 8601), stamped when the order reaches
    /// `completed`.
    pub completed_at: Option<String>,
}

impl JobOrder {
    /// Creates a new job order in the `pending` status.
    ///
    /// Field constraints are checked separately by
    /// [`crate::validate_job_order_fields`].
    ///
    /// # Arguments
    ///
    /// * `po_number` - The customer's purchase order number
    /// * `customer_name` - Customer name
    /// * `customer_email` - Customer contact email
    /// * `customer_phone` - Customer contact phone
    /// * `delivery_address` - Delivery address
    /// * `steel_type` - Material from the shop catalog
    /// * `quantity` - Number of pieces
    /// * `width_mm` - Piece width in millimeters
    /// * `length_mm` - Piece length in millimeters
    /// * `thickness_mm` - Piece thickness in millimeters
    /// * `priority` - Scheduling priority
    /// * `created_at` - Creation timestamp (ISO 8601)
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        po_number: String,
        customer_name: String,
        customer_email: String,
        customer_phone: String,
        delivery_address: String,
        steel_type: SteelType,
        quantity: u32,
        width_mm: f64,
        length_mm: f64,
        thickness_mm: f64,
        priority: Priority,
        created_at: String,
    ) -> Self {
        Self {
            job_order_id: None,
            po_number,
            customer_name,
            customer_email,
            customer_phone,
            delivery_address,
            steel_type,
            quantity,
            width_mm,
            length_mm,
            thickness_mm,
            status: JobStatus::Pending,
            priority,
            weight_kg: None,
            price: None,
            created_at,
            delivery_date: None,
            special_instructions: None,
            assigned_cutter: None,
            completed_quantity: 0,
            completed_at: None,
        }
    }

    /// Returns the derived progress percentage for the order's status.
    #[must_use]
    pub const fn progress_percent(&self) -> u8 {
        self.status.progress_percent()
    }

    /// Returns the production completion percentage from piece counts.
    ///
    /// This is distinct from [`Self::progress_percent`], which is derived
    /// from the lifecycle status alone.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        if self.quantity == 0 {
            return 0;
        }
        let percent = u64::from(self.completed_quantity) * 100 / u64::from(self.quantity);
        u8::try_from(percent.min(100)).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> JobOrder {
        JobOrder::new(
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
        )
    }

    #[test]
    fn test_new_order_starts_pending_with_nothing_cut() {
        let order = order();
        assert_eq!(order.status, JobStatus::Pending);
        assert_eq!(order.completed_quantity, 0);
        assert_eq!(order.completed_at, None);
        assert_eq!(order.job_order_id, None);
    }

    #[test]
    fn test_completion_percent_tracks_piece_counts() {
        let mut order = order();
        assert_eq!(order.completion_percent(), 0);
        order.completed_quantity = 25;
        assert_eq!(order.completion_percent(), 50);
        order.completed_quantity = 50;
        assert_eq!(order.completion_percent(), 100);
    }

    #[test]
    fn test_progress_percent_follows_status() {
        let mut order = order();
        assert_eq!(order.progress_percent(), 10);
        order.status = JobStatus::Shipped;
        assert_eq!(order.progress_percent(), 95);
    }
}
