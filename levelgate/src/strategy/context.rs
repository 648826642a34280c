//! Calling-context identity.

use std::any::type_name;
use std::fmt;

use crate::error::LogError;

/// The component on whose behalf records are logged.
///
/// Usually derived from a type with [`Context::of`], giving the full type
/// path (`app::billing::InvoiceJob`). The simple name is the last path
/// segment without generic arguments (`InvoiceJob`), used to annotate
/// rendered faults.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context {
    name: String,
}

impl Context {
    /// Context for type `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            name: type_name::<T>().to_string(),
        }
    }

    /// Context with an explicit name.
    ///
    /// Fails with [`LogError::MissingArgument`] when `name` is blank.
    pub fn named(name: impl Into<String>) -> Result<Self, LogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LogError::MissingArgument("context"));
        }
        Ok(Self { name })
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last path segment with generic arguments stripped.
    pub fn simple_name(&self) -> &str {
        let base = match self.name.find('<') {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        };
        match base.rfind("::") {
            Some(pos) => &base[pos + 2..],
            None => base,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
