//! Lightweight field validation for outgoing documents.

/// Error holding every violation found while validating a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", violations.join(", "))]
pub struct ValidationError {
    /// Human-readable violation messages.
    pub violations: Vec<String>,
}

impl ValidationError {
    /// Returns `Ok(())` when no violations were collected.
    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Collects violations while walking a document's fields.
#[derive(Debug, Default)]
pub(crate) struct Violations {
    violations: Vec<String>,
}

impl Violations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Requires a field to be present and non-blank.
    pub(crate) fn require_non_blank(&mut self, field: &str, value: Option<&str>) {
        match value {
            Some(v) if !v.trim().is_empty() => {}
            _ => self.violations.push(format!("{field} must not be blank")),
        }
    }

    /// Requires a present value to look like an email address.
    ///
    /// Shape check only: one `@` with a dotted domain part. Deliverability is
    /// the server's concern.
    pub(crate) fn require_email_shape(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            let valid = match v.split_once('@') {
                Some((local, domain)) => {
                    !local.is_empty()
                        && domain.contains('.')
                        && !domain.starts_with('.')
                        && !domain.ends_with('.')
                }
                None => false,
            };
            if !valid {
                self.violations
                    .push(format!("{field} is not a valid email address"));
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        ValidationError {
            violations: self.violations,
        }
        .into_result()
    }
}
