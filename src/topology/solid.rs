use super::shell::ShellId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// A volume bounded by one closed shell. Cake bodies have no voids.
#[derive(Debug, Clone, Copy)]
pub struct SolidData {
    pub shell: ShellId,
}

impl SolidData {
    #[must_use]
    pub fn new(shell: ShellId) -> Self {
        Self { shell }
    }
}
