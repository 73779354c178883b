use crate::access::{AccessControl, Caller};
use crate::error::{ElectionError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Open,
    Closed,
}

/// Open/closed flag. `Closed` is terminal.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self { phase: Phase::Open }
    }
}

impl Lifecycle {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub fn ensure_open(&self) -> Result<()> {
        match self.phase {
            Phase::Open => Ok(()),
            Phase::Closed => Err(ElectionError::ElectionClosed),
        }
    }

    pub fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.phase = Phase::Closed;
        Ok(())
    }
}

/// Asks the access-control collaborator whether `caller` holds the administrative capability.
pub fn authorize<A>(access: &A, caller: &Caller) -> Result<()>
where
    A: AccessControl + ?Sized,
{
    if access.is_authorized(caller) {
        Ok(())
    } else {
        Err(ElectionError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Owner;

    #[test]
    fn closing_is_terminal() {
        let mut lifecycle = Lifecycle::default();
        assert_eq!(lifecycle.phase(), Phase::Open);
        assert_eq!(lifecycle.close(), Ok(()));
        assert!(lifecycle.is_ended());
        assert_eq!(lifecycle.close(), Err(ElectionError::ElectionClosed));
        assert_eq!(lifecycle.ensure_open(), Err(ElectionError::ElectionClosed));
    }

    #[test]
    fn authorize_delegates_to_access_control() {
        let owner = Owner::new(Caller::new("owner"));
        assert_eq!(authorize(&owner, &Caller::new("owner")), Ok(()));
        assert_eq!(
            authorize(&owner, &Caller::new("addr1")),
            Err(ElectionError::Unauthorized)
        );
    }
}
