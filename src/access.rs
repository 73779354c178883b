//! Administrative capability checks.
//!
//! The election never decides on its own who may mutate it; it asks an
//! [`AccessControl`] implementation before every submission or end request.

use std::fmt;

/// Identity of whoever is invoking an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller(String);

impl Caller {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait AccessControl {
    fn is_authorized(&self, caller: &Caller) -> bool;
}

impl<F> AccessControl for F
where
    F: Fn(&Caller) -> bool,
{
    fn is_authorized(&self, caller: &Caller) -> bool {
        self(caller)
    }
}

/// Grants the capability to exactly one identity.
#[derive(Debug, Clone)]
pub struct Owner {
    owner: Caller,
}

impl Owner {
    pub fn new(owner: Caller) -> Self {
        Self { owner }
    }
}

impl AccessControl for Owner {
    fn is_authorized(&self, caller: &Caller) -> bool {
        &self.owner == caller
    }
}
