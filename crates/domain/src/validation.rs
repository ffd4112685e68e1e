// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation for domain entities.

use crate::customer::Customer;
use crate::error::DomainError;
use crate::job_order::JobOrder;
use crate::payroll::Employee;

/// Validates a dimension field: strictly positive and finite.
fn validate_dimension(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::InvalidDimension { field, value });
    }
    Ok(())
}

/// Validates the field constraints of a job order.
///
/// # Errors
///
/// Returns an error if:
/// - The purchase order number or customer name is empty
/// - The quantity is zero
/// - Any dimension is not strictly positive
/// - The completed quantity exceeds the ordered quantity
/// - A recorded weight is not strictly positive
/// - A recorded price is negative
pub fn validate_job_order_fields(order: &JobOrder) -> Result<(), DomainError> {
    if order.po_number.trim().is_empty() {
        return Err(DomainError::EmptyPoNumber);
    }
    if order.customer_name.trim().is_empty() {
        return Err(DomainError::EmptyCustomerName);
    }
    if order.quantity == 0 {
        return Err(DomainError::InvalidQuantity {
            quantity: order.quantity,
        });
    }

    validate_dimension("width_mm", order.width_mm)?;
    validate_dimension("length_mm", order.length_mm)?;
    validate_dimension("thickness_mm", order.thickness_mm)?;

    if order.completed_quantity > order.quantity {
        return Err(DomainError::CompletedQuantityExceedsQuantity {
            completed: order.completed_quantity,
            quantity: order.quantity,
        });
    }

    if let Some(weight) = order.weight_kg {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(DomainError::InvalidWeight { value: weight });
        }
    }

    if let Some(price) = order.price {
        if price < 0 {
            return Err(DomainError::InvalidPrice { value: price });
        }
    }

    Ok(())
}

/// Validates the field constraints of a customer record.
///
/// # Errors
///
/// Returns an error if the name is empty or the email is malformed.
pub fn validate_customer_fields(customer: &Customer) -> Result<(), DomainError> {
    if customer.name.trim().is_empty() {
        return Err(DomainError::EmptyCustomerName);
    }
    validate_profile_email(&customer.email)?;
    Ok(())
}

/// Validates the field constraints of an employee record.
///
/// # Errors
///
/// Returns an error if the name or code is empty, or a salary is negative.
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.name.trim().is_empty() {
        return Err(DomainError::EmptyEmployeeName);
    }
    if employee.employee_code.trim().is_empty() {
        return Err(DomainError::EmptyEmployeeCode);
    }
    if employee.base_salary < 0 {
        return Err(DomainError::InvalidSalary {
            field: "base_salary",
            value: employee.base_salary,
        });
    }
    if employee.current_salary < 0 {
        return Err(DomainError::InvalidSalary {
            field: "current_salary",
            value: employee.current_salary,
        });
    }
    Ok(())
}

/// Validates an email address shape.
///
/// This is deliberately shallow: one `@` with non-empty local part and a
/// domain containing a dot. Deliverability is not this layer's concern.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is malformed.
pub fn validate_profile_email(email: &str) -> Result<(), DomainError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::InvalidEmail(email.to_string()));
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    Ok(())
}
