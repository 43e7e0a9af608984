/// Scene identifiers.

use std::fmt;

/// Opaque identifier of one phase of the host's presentation sequence.
///
/// The set is open: hosts may mint their own values with [`SceneType::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SceneType(u32);

impl SceneType {
    /// First sample scene (rotating multi-colour pyramids)
    pub const TEST0: SceneType = SceneType(0);
    /// Second sample scene (yellow pyramid)
    pub const TEST1: SceneType = SceneType(1);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SceneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene#{}", self.0)
    }
}
