use std::collections::BTreeMap;

/// Store that raw environment values are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSource {
    kind: EnvSourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EnvSourceKind {
    /// Read the current process environment on every lookup.
    Process,
    /// Read from an in-memory map.
    Memory(BTreeMap<String, String>),
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::process()
    }
}

impl EnvSource {
    /// Create a source backed by the process environment.
    ///
    /// Values that are not valid Unicode are converted lossily.
    pub fn process() -> Self {
        Self {
            kind: EnvSourceKind::Process,
        }
    }

    /// Create an empty in-memory source.
    pub fn memory() -> Self {
        Self::from_memory(BTreeMap::new())
    }

    /// Create an in-memory source from an existing map.
    pub fn from_memory(map: BTreeMap<String, String>) -> Self {
        Self {
            kind: EnvSourceKind::Memory(map),
        }
    }

    pub fn is_process(&self) -> bool {
        matches!(self.kind, EnvSourceKind::Process)
    }

    pub fn as_memory(&self) -> Option<&BTreeMap<String, String>> {
        match &self.kind {
            EnvSourceKind::Memory(map) => Some(map),
            EnvSourceKind::Process => None,
        }
    }

    pub fn as_memory_mut(&mut self) -> Option<&mut BTreeMap<String, String>> {
        match &mut self.kind {
            EnvSourceKind::Memory(map) => Some(map),
            EnvSourceKind::Process => None,
        }
    }

    /// Current raw value for `key`, or `None` when unset.
    pub fn get_var(&self, key: &str) -> Option<String> {
        match &self.kind {
            EnvSourceKind::Process => {
                std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
            }
            EnvSourceKind::Memory(map) => map.get(key).cloned(),
        }
    }
}

impl FromIterator<(String, String)> for EnvSource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_memory(iter.into_iter().collect())
    }
}
