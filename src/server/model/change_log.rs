//! Change log categories.

use std::fmt;

/// Category tag attached to every audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Register,
    Cancel,
    Leave,
    JobChange,
    IdChange,
    Battle,
    Formation,
    Member,
    Other,
}

impl LogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Cancel => "cancel",
            Self::Leave => "leave",
            Self::JobChange => "job_change",
            Self::IdChange => "id_change",
            Self::Battle => "battle",
            Self::Formation => "formation",
            Self::Member => "member",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
