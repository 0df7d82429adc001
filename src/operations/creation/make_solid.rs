use crate::error::{Result, TopologyError};
use crate::topology::{ShellId, SolidData, SolidId, TopologyStore};

/// Creates a solid bounded by a closed shell.
pub struct MakeSolid {
    shell: ShellId,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(shell: ShellId) -> Self {
        Self { shell }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] if the shell is open or
    /// has fewer than 4 faces.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let shell = store.shell(self.shell)?;
        if !shell.is_closed {
            return Err(TopologyError::InvalidTopology("solid shell must be closed".into()).into());
        }
        if shell.faces.len() < 4 {
            return Err(TopologyError::InvalidTopology(format!(
                "closed shell needs at least 4 faces, got {}",
                shell.faces.len()
            ))
            .into());
        }
        Ok(store.add_solid(SolidData::new(self.shell)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::ShellData;

    #[test]
    fn open_shell_returns_error() {
        let mut store = TopologyStore::new();
        let shell = store.add_shell(ShellData::open(vec![]));
        assert!(MakeSolid::new(shell).execute(&mut store).is_err());
    }

    #[test]
    fn empty_closed_shell_returns_error() {
        let mut store = TopologyStore::new();
        let shell = store.add_shell(ShellData::closed(vec![]));
        assert!(MakeSolid::new(shell).execute(&mut store).is_err());
    }
}
