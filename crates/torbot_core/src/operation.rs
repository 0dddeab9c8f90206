use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The action the user asks the crawler service to perform.
///
/// Only [`Operation::RetrieveUrls`] is backed by the remote service; the
/// others are placeholders for server capabilities that do not exist yet and
/// submit as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    #[default]
    RetrieveEmails,
    RetrieveUrls,
    RetrieveInfo,
}

impl Operation {
    /// All operations in presentation order. The first entry is the default.
    pub const ALL: [Operation; 3] = [
        Operation::RetrieveEmails,
        Operation::RetrieveUrls,
        Operation::RetrieveInfo,
    ];

    /// Label shown to the user and sent as `option` on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Operation::RetrieveEmails => "Retrieve Emails",
            Operation::RetrieveUrls => "Retrieve URLs",
            Operation::RetrieveInfo => "Retrieve Information",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|op| op.label() == label)
            .ok_or_else(|| CoreError::InvalidOperation(label.to_string()))
    }

    /// Whether submitting this operation talks to the remote service.
    pub fn is_wired(self) -> bool {
        matches!(self, Operation::RetrieveUrls)
    }

    pub fn index(self) -> usize {
        match self {
            Operation::RetrieveEmails => 0,
            Operation::RetrieveUrls => 1,
            Operation::RetrieveInfo => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
