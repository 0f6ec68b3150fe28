//! Buffer identities
//!
//! The page has exactly two text buffers. Each is addressed by the key it uses
//! in the location fragment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferId {
    /// Standard Roman Orthography input
    Sro,
    /// Syllabics input
    Syl,
}

impl BufferId {
    pub const ALL: [BufferId; 2] = [BufferId::Sro, BufferId::Syl];

    /// Fragment key and DOM id of the buffer
    pub fn key(self) -> &'static str {
        match self {
            BufferId::Sro => "sro",
            BufferId::Syl => "syl",
        }
    }

    pub fn from_key(key: &str) -> Option<BufferId> {
        match key {
            "sro" => Some(BufferId::Sro),
            "syl" => Some(BufferId::Syl),
            _ => None,
        }
    }
}

/// Which buffer was set from the location on load, and therefore which
/// conversion direction runs first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Authority {
    #[default]
    None,
    SroIsAuthoritative,
    SylIsAuthoritative,
}

impl Authority {
    pub fn buffer(self) -> Option<BufferId> {
        match self {
            Authority::None => None,
            Authority::SroIsAuthoritative => Some(BufferId::Sro),
            Authority::SylIsAuthoritative => Some(BufferId::Syl),
        }
    }
}

impl From<BufferId> for Authority {
    fn from(id: BufferId) -> Self {
        match id {
            BufferId::Sro => Authority::SroIsAuthoritative,
            BufferId::Syl => Authority::SylIsAuthoritative,
        }
    }
}
