// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee records, salary adjustments, and payslip computation.
//!
//! All currency amounts are integer minor units (satang), so adjustment
//! arithmetic is exact: applying `+n` then `-n` restores the original
//! salary bit for bit.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Social security deduction rate, in percent of gross income.
pub const SOCIAL_SECURITY_RATE_PERCENT: i64 = 5;

/// Social security deduction cap in minor currency units (฿750).
pub const SOCIAL_SECURITY_CAP: i64 = 75_000;

/// Withholding tax rate, in percent of gross income.
pub const TAX_RATE_PERCENT: i64 = 5;

/// An employee on the shop payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the employee has not been persisted yet.
    pub employee_id: Option<i64>,
    /// Employee name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Short payroll code (e.g. "EMP-001").
    pub employee_code: String,
    /// Employment start date (ISO 8601 date).
    pub start_date: String,
    /// Salary payment account number.
    pub bank_account: String,
    /// Salary payment bank name.
    pub bank_name: String,
    /// Salary at hire, in minor currency units.
    pub base_salary: i64,
    /// Current salary, in minor currency units. Mutated only through
    /// [`apply_adjustment`].
    pub current_salary: i64,
}

/// Direction of a salary adjustment, derived from the sign of its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Positive amount.
    Increase,
    /// Negative amount.
    Decrease,
}

impl AdjustmentKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }

    /// Parses a kind from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownAdjustmentKind` if the string is not
    /// valid.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            _ => Err(DomainError::UnknownAdjustmentKind(s.to_string())),
        }
    }
}

impl FromStr for AdjustmentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// An immutable signed salary delta.
///
/// Adjustments are appended to an ordered history and never mutated or
/// deleted. The kind is derived from the sign of the amount at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryAdjustment {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the adjustment has not been persisted yet.
    pub adjustment_id: Option<i64>,
    /// The employee this adjustment applies to.
    pub employee_id: i64,
    /// Signed delta in minor currency units. Never zero.
    pub amount: i64,
    /// Why the adjustment was made.
    pub reason: String,
    /// When the adjustment was recorded (ISO 8601).
    pub date: String,
    /// Direction, derived from the sign of `amount`.
    pub kind: AdjustmentKind,
}

impl SalaryAdjustment {
    /// Creates a new salary adjustment, deriving its kind from the sign
    /// of the amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or the reason is empty.
    pub fn new(
        employee_id: i64,
        amount: i64,
        reason: String,
        date: String,
    ) -> Result<Self, DomainError> {
        if amount == 0 {
            return Err(DomainError::ZeroAdjustmentAmount);
        }
        if reason.trim().is_empty() {
            return Err(DomainError::EmptyAdjustmentReason);
        }

        let kind = if amount > 0 {
            AdjustmentKind::Increase
        } else {
            AdjustmentKind::Decrease
        };

        Ok(Self {
            adjustment_id: None,
            employee_id,
            amount,
            reason,
            date,
            kind,
        })
    }
}

/// Applies a salary adjustment to an employee, producing a new snapshot.
///
/// The input employee is never mutated; the operation is all-or-nothing.
///
/// # Errors
///
/// Returns an error if the adjustment targets a different employee.
pub fn apply_adjustment(
    employee: &Employee,
    adjustment: &SalaryAdjustment,
) -> Result<Employee, DomainError> {
    let employee_id = employee.employee_id.unwrap_or(adjustment.employee_id);
    if employee_id != adjustment.employee_id {
        return Err(DomainError::EmployeeMismatch {
            expected: adjustment.employee_id,
            found: employee_id,
        });
    }

    let mut next = employee.clone();
    next.current_salary = employee.current_salary + adjustment.amount;
    Ok(next)
}

/// One line on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipItem {
    /// Line description.
    pub description: String,
    /// Line amount in minor currency units.
    pub amount: i64,
}

/// The pay period a payslip covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Month name (e.g. "January").
    pub month: String,
    /// Four-digit year.
    pub year: String,
    /// Payment due date (ISO 8601 date), the last day of the month.
    pub due_date: String,
}

impl PayPeriod {
    /// Builds the pay period covering the month of the given date.
    ///
    /// The due date is the last day of that month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month-end date cannot be constructed.
    pub fn for_month(date: time::Date) -> Result<Self, DomainError> {
        let last_day = time::util::days_in_year_month(date.year(), date.month());
        let due = time::Date::from_calendar_date(date.year(), date.month(), last_day).map_err(
            |e| DomainError::DateOutOfRange {
                reason: format!("month end for {}-{}: {e}", date.year(), date.month()),
            },
        )?;

        Ok(Self {
            month: date.month().to_string(),
            year: date.year().to_string(),
            due_date: format!("{}-{:02}-{:02}", due.year(), u8::from(due.month()), due.day()),
        })
    }
}

/// Variable payslip inputs for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayslipInputs {
    /// Overtime pay in minor currency units.
    pub overtime: i64,
    /// Bonus pay in minor currency units.
    pub bonus: i64,
    /// Absence deduction in minor currency units.
    pub absence_deduction: i64,
}

/// A derived payslip projection.
///
/// Recomputed on demand from the employee's current salary and the
/// period inputs; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee the payslip is for.
    pub employee: Employee,
    /// The covered pay period.
    pub period: PayPeriod,
    /// Income lines: base salary, overtime, bonus.
    pub income: Vec<PayslipItem>,
    /// Deduction lines: social security, tax, absence.
    pub deductions: Vec<PayslipItem>,
    /// Sum of income lines.
    pub gross_income: i64,
    /// Sum of deduction lines.
    pub total_deductions: i64,
    /// Gross income minus deductions.
    pub net_income: i64,
}

/// Computes a payslip for an employee over a pay period.
///
/// Income is base salary plus the period's overtime and bonus.
/// Deductions are social security (5% of gross, capped at ฿750), tax
/// (5% of gross), and the period's absence deduction.
#[must_use]
pub fn compute_payslip(employee: &Employee, period: PayPeriod, inputs: &PayslipInputs) -> Payslip {
    let income = vec![
        PayslipItem {
            description: String::from("Base Salary"),
            amount: employee.current_salary,
        },
        PayslipItem {
            description: String::from("Overtime"),
            amount: inputs.overtime,
        },
        PayslipItem {
            description: String::from("Bonus"),
            amount: inputs.bonus,
        },
    ];
    let gross_income: i64 = income.iter().map(|item| item.amount).sum();

    let social_security =
        (gross_income * SOCIAL_SECURITY_RATE_PERCENT / 100).min(SOCIAL_SECURITY_CAP);
    let tax = gross_income * TAX_RATE_PERCENT / 100;

    let deductions = vec![
        PayslipItem {
            description: String::from("Social Security"),
            amount: social_security,
        },
        PayslipItem {
            description: String::from("Tax"),
            amount: tax,
        },
        PayslipItem {
            description: String::from("Absence"),
            amount: inputs.absence_deduction,
        },
    ];
    let total_deductions: i64 = deductions.iter().map(|item| item.amount).sum();

    Payslip {
        employee: employee.clone(),
        period,
        income,
        deductions,
        gross_income,
        total_deductions,
        net_income: gross_income - total_deductions,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            employee_id: Some(1),
            name: String::from("Somchai P."),
            position: String::from("Senior Cutter"),
            employee_code: String::from("EMP-001"),
            start_date: String::from("2020-03-01"),
            bank_account: String::from("123-4-56789-0"),
            bank_name: String::from("Bangkok Bank"),
            base_salary: 2_500_000,
            current_salary: 2_800_000,
        }
    }

    #[test]
    fn test_adjustment_kind_derived_from_sign() {
        let increase = SalaryAdjustment::new(
            1,
            100_000,
            String::from("Annual raise"),
            String::from("2026-01-01T00:00:00Z"),
        )
        .unwrap();
        assert_eq!(increase.kind, AdjustmentKind::Increase);

        let decrease = SalaryAdjustment::new(
            1,
            -50_000,
            String::from("Hours reduction"),
            String::from("2026-02-01T00:00:00Z"),
        )
        .unwrap();
        assert_eq!(decrease.kind, AdjustmentKind::Decrease);
    }

    #[test]
    fn test_zero_adjustment_is_rejected() {
        let result = SalaryAdjustment::new(
            1,
            0,
            String::from("No-op"),
            String::from("2026-01-01T00:00:00Z"),
        );
        assert_eq!(result, Err(DomainError::ZeroAdjustmentAmount));
    }

    #[test]
    fn test_empty_reason_is_rejected() {
        let result = SalaryAdjustment::new(
            1,
            100,
            String::from("   "),
            String::from("2026-01-01T00:00:00Z"),
        );
        assert_eq!(result, Err(DomainError::EmptyAdjustmentReason));
    }

    #[test]
    fn test_opposite_adjustments_restore_salary_exactly() {
        let original = employee();
        let up = SalaryAdjustment::new(
            1,
            100_000,
            String::from("Raise"),
            String::from("2026-01-01T00:00:00Z"),
        )
        .unwrap();
        let down = SalaryAdjustment::new(
            1,
            -100_000,
            String::from("Correction"),
            String::from("2026-01-02T00:00:00Z"),
        )
        .unwrap();

        let raised = apply_adjustment(&original, &up).unwrap();
        assert_eq!(raised.current_salary, original.current_salary + 100_000);

        let restored = apply_adjustment(&raised, &down).unwrap();
        assert_eq!(restored.current_salary, original.current_salary);
    }

    #[test]
    fn test_adjustment_does_not_mutate_input() {
        let original = employee();
        let up = SalaryAdjustment::new(
            1,
            100_000,
            String::from("Raise"),
            String::from("2026-01-01T00:00:00Z"),
        )
        .unwrap();

        let _ = apply_adjustment(&original, &up).unwrap();
        assert_eq!(original.current_salary, 2_800_000);
    }

    #[test]
    fn test_adjustment_for_wrong_employee_is_rejected() {
        let original = employee();
        let other = SalaryAdjustment::new(
            2,
            100_000,
            String::from("Raise"),
            String::from("2026-01-01T00:00:00Z"),
        )
        .unwrap();

        let result = apply_adjustment(&original, &other);
        assert_eq!(
            result,
            Err(DomainError::EmployeeMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_payslip_net_is_income_minus_deductions() {
        let emp = employee();
        let period = PayPeriod {
            month: String::from("January"),
            year: String::from("2026"),
            due_date: String::from("2026-01-31"),
        };
        let inputs = PayslipInputs {
            overtime: 200_000,
            bonus: 100_000,
            absence_deduction: 50_000,
        };

        let payslip = compute_payslip(&emp, period, &inputs);

        assert_eq!(payslip.gross_income, 2_800_000 + 200_000 + 100_000);
        assert_eq!(
            payslip.net_income,
            payslip.gross_income - payslip.total_deductions
        );
        assert_eq!(payslip.income.len(), 3);
        assert_eq!(payslip.deductions.len(), 3);
    }

    #[test]
    fn test_social_security_is_capped() {
        let emp = employee();
        let period = PayPeriod {
            month: String::from("January"),
            year: String::from("2026"),
            due_date: String::from("2026-01-31"),
        };

        // 5% of 3.1M satang gross is 155,000, above the 75,000 cap.
        let payslip = compute_payslip(
            &emp,
            period,
            &PayslipInputs {
                overtime: 200_000,
                bonus: 100_000,
                absence_deduction: 0,
            },
        );

        let social_security = payslip
            .deductions
            .iter()
            .find(|item| item.description == "Social Security")
            .unwrap();
        assert_eq!(social_security.amount, SOCIAL_SECURITY_CAP);
    }

    #[test]
    fn test_social_security_below_cap_is_proportional() {
        let mut emp = employee();
        emp.current_salary = 1_000_000;
        let period = PayPeriod {
            month: String::from("January"),
            year: String::from("2026"),
            due_date: String::from("2026-01-31"),
        };

        let payslip = compute_payslip(&emp, period, &PayslipInputs::default());

        let social_security = payslip
            .deductions
            .iter()
            .find(|item| item.description == "Social Security")
            .unwrap();
        assert_eq!(social_security.amount, 50_000);
    }

    #[test]
    fn test_pay_period_due_date_is_month_end() {
        let date = time::Date::from_calendar_date(2026, time::Month::February, 10).unwrap();
        let period = PayPeriod::for_month(date).unwrap();
        assert_eq!(period.month, "February");
        assert_eq!(period.year, "2026");
        assert_eq!(period.due_date, "2026-02-28");
    }

    #[test]
    fn test_pay_period_handles_leap_year() {
        let date = time::Date::from_calendar_date(2028, time::Month::February, 1).unwrap();
        let period = PayPeriod::for_month(date).unwrap();
        assert_eq!(period.due_date, "2028-02-29");
    }
}
