//! The pre-compilation validation pass

use std::fmt::{Debug, Display};

/// Pre-compilation validation of tables.
///
/// Requirements that are awkward to encode in the type system, such as a
/// count needing to fit a 16-bit field, are enforced via this pass before
/// any bytes are written.
pub trait Validate {
    /// Ensure that this table is well-formed, reporting any errors.
    fn validate(&self) -> Result<(), ValidationReport> {
        let mut ctx = ValidationCtx::default();
        self.validate_impl(&mut ctx);
        if ctx.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport { errors: ctx.errors })
        }
    }

    /// Validate this table, reporting errors into the provided context.
    fn validate_impl(&self, ctx: &mut ValidationCtx);
}

/// A context for collecting validation errors.
///
/// This tracks the table and field being validated, so that a reported
/// error identifies where in the object it occurred.
#[derive(Clone, Debug, Default)]
pub struct ValidationCtx {
    cur_table: Option<&'static str>,
    cur_field: Option<&'static str>,
    errors: Vec<ValidationError>,
}

#[derive(Debug, Clone)]
struct ValidationError {
    error: String,
    table: Option<&'static str>,
    field: Option<&'static str>,
}

/// One or more validation errors.
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationCtx {
    /// Run the provided closure in the context of a table.
    ///
    /// Errors reported in the closure will include the provided identifier.
    pub fn in_table(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        let prev = self.cur_table.replace(name);
        f(self);
        self.cur_table = prev;
    }

    /// Run the provided closure in the context of a field.
    pub fn in_field(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx)) {
        let prev = self.cur_field.replace(name);
        f(self);
        self.cur_field = prev;
    }

    /// Report a new error, associating it with the current location.
    pub fn report(&mut self, msg: impl Display) {
        self.errors.push(ValidationError {
            error: msg.to_string(),
            table: self.cur_table,
            field: self.cur_field,
        });
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.len() == 1 {
            return writeln!(f, "Validation error:\n{}", self.errors.first().unwrap());
        }

        writeln!(f, "{} validation errors:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "#{}\n{error}", i + 1)?;
        }
        Ok(())
    }
}

impl Debug for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\"{}\"", self.error)?;
        match (self.table, self.field) {
            (Some(table), Some(field)) => writeln!(f, "in: {table}.{field}"),
            (Some(table), None) => writeln!(f, "in: {table}"),
            (None, Some(field)) => writeln!(f, "in field: {field}"),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for ValidationReport {}
