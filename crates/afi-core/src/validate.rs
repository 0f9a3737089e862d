//! Field validation for customer submissions.
//!
//! The rule set is a fixed-order table of `(field, check, message)` entries.
//! Fields are evaluated independently so every failing field is reported;
//! within one field, evaluation stops at the first failing rule, and a
//! presence rule always precedes that field's format or range rule.
//!
//! Validation never fails: the result is always a [`ValidationOutcome`],
//! which is empty when the submission is acceptable.

use std::sync::LazyLock;

use chrono::{DateTime, Months, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::customer::Submission;

/// Minimum age, in whole years, of a registering customer.
pub const MINIMUM_AGE_YEARS: u32 = 18;

/// Inclusive character-count bounds for names.
pub const NAME_LENGTH: (usize, usize) = (3, 50);

/// Two uppercase letters, a hyphen, six digits.
static POLICY_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Z]{2}-[0-9]{6}$").expect("Invalid policy number regex")
});

/// The dot before the suffix is unescaped and matches any single character,
/// so `aaaa@aaXcom` is accepted.
static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-z0-9]{4,}@[A-Za-z0-9]{2,}(?:.com|.co.uk)$")
    .expect("Invalid email address regex")
});

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// A submission field that a rule can report against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
  FirstName,
  Surname,
  PolicyNumber,
  DateOfBirth,
  EmailAddress,
}

impl Field {
  /// The camelCase wire name of the field.
  pub fn as_str(self) -> &'static str {
    match self {
      Field::FirstName => "firstName",
      Field::Surname => "surname",
      Field::PolicyNumber => "policyNumber",
      Field::DateOfBirth => "dateOfBirth",
      Field::EmailAddress => "emailAddress",
    }
  }
}

impl std::fmt::Display for Field {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field:   Field,
  pub message: &'static str,
}

/// The result of validating one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
  /// `true` iff `violations` is empty.
  pub is_valid:   bool,
  /// In rule evaluation order.
  pub violations: Vec<Violation>,
}

impl ValidationOutcome {
  fn from_violations(violations: Vec<Violation>) -> Self {
    Self { is_valid: violations.is_empty(), violations }
  }

  /// Messages reported against `field`, in evaluation order.
  pub fn messages_for(&self, field: Field) -> Vec<&'static str> {
    self
      .violations
      .iter()
      .filter(|v| v.field == field)
      .map(|v| v.message)
      .collect()
  }

  pub fn has_violation_for(&self, field: Field) -> bool {
    self.violations.iter().any(|v| v.field == field)
  }
}

// ─── Rule table ──────────────────────────────────────────────────────────────

/// A single validation rule. `check` returns `true` when the submission
/// satisfies the rule as of the given instant.
pub struct Rule {
  pub field:   Field,
  pub message: &'static str,
  check:       fn(&Submission, DateTime<Utc>) -> bool,
}

impl Rule {
  pub fn is_satisfied_by(&self, submission: &Submission, now: DateTime<Utc>) -> bool {
    (self.check)(submission, now)
  }
}

/// Every rule, in evaluation order.
pub static RULES: [Rule; 10] = [
  Rule {
    field:   Field::FirstName,
    message: "First Name is required",
    check:   first_name_present,
  },
  Rule {
    field:   Field::FirstName,
    message: "First Name should be between 3 and 50 characters",
    check:   first_name_length,
  },
  Rule {
    field:   Field::Surname,
    message: "Surname is required",
    check:   surname_present,
  },
  Rule {
    field:   Field::Surname,
    message: "Surname should be between 3 and 50 characters",
    check:   surname_length,
  },
  Rule {
    field:   Field::PolicyNumber,
    message: "Policy Number is required",
    check:   policy_number_present,
  },
  Rule {
    field:   Field::PolicyNumber,
    message: "Policy Number is not valid",
    check:   policy_number_format,
  },
  Rule {
    field:   Field::DateOfBirth,
    message: "Either Date of Birth or Email Address is required",
    check:   date_of_birth_or_email_address,
  },
  Rule {
    field:   Field::DateOfBirth,
    message: "Customer must be at least 18",
    check:   date_of_birth_adult,
  },
  Rule {
    field:   Field::EmailAddress,
    message: "Either Email Address or Date of Birth is required",
    check:   date_of_birth_or_email_address,
  },
  Rule {
    field:   Field::EmailAddress,
    message: "Email Address is not valid",
    check:   email_address_format,
  },
];

fn first_name_present(s: &Submission, _: DateTime<Utc>) -> bool {
  s.first_name.is_some()
}

fn first_name_length(s: &Submission, _: DateTime<Utc>) -> bool {
  s.first_name.as_deref().is_none_or(is_valid_name_length)
}

fn surname_present(s: &Submission, _: DateTime<Utc>) -> bool {
  s.surname.is_some()
}

fn surname_length(s: &Submission, _: DateTime<Utc>) -> bool {
  s.surname.as_deref().is_none_or(is_valid_name_length)
}

fn policy_number_present(s: &Submission, _: DateTime<Utc>) -> bool {
  s.policy_number.is_some()
}

fn policy_number_format(s: &Submission, _: DateTime<Utc>) -> bool {
  s.policy_number
    .as_deref()
    .is_none_or(|p| POLICY_NUMBER_REGEX.is_match(p))
}

/// Cross-field: either contact route satisfies the requirement for both.
fn date_of_birth_or_email_address(s: &Submission, _: DateTime<Utc>) -> bool {
  s.date_of_birth.is_some() || s.email_address.is_some()
}

fn date_of_birth_adult(s: &Submission, now: DateTime<Utc>) -> bool {
  s.date_of_birth.is_none_or(|dob| is_adult(dob, now))
}

fn email_address_format(s: &Submission, _: DateTime<Utc>) -> bool {
  s.email_address
    .as_deref()
    .is_none_or(|e| EMAIL_ADDRESS_REGEX.is_match(e))
}

fn is_valid_name_length(name: &str) -> bool {
  let (min, max) = NAME_LENGTH;
  (min..=max).contains(&name.chars().count())
}

/// `true` when `date_of_birth` is at least [`MINIMUM_AGE_YEARS`] calendar
/// years before `now`, inclusive.
pub fn is_adult(date_of_birth: DateTime<Utc>, now: DateTime<Utc>) -> bool {
  now
    .checked_sub_months(Months::new(MINIMUM_AGE_YEARS * 12))
    .is_some_and(|cutoff| date_of_birth <= cutoff)
}

// ─── Evaluation ──────────────────────────────────────────────────────────────

/// Validate `submission` as of the current instant.
pub fn validate(submission: &Submission) -> ValidationOutcome {
  validate_at(submission, Utc::now())
}

/// Validate `submission` as of `now`.
pub fn validate_at(submission: &Submission, now: DateTime<Utc>) -> ValidationOutcome {
  let mut violations: Vec<Violation> = Vec::new();

  for rule in &RULES {
    // Stop a field's chain once it has failed.
    if violations.last().is_some_and(|v| v.field == rule.field) {
      continue;
    }
    if !rule.is_satisfied_by(submission, now) {
      violations.push(Violation { field: rule.field, message: rule.message });
    }
  }

  ValidationOutcome::from_violations(violations)
}
