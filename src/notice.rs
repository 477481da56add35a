//! Short messages shown to the user after an operation

use std::fmt::{Display, Error, Formatter};

use crate::task::TaskDate;

/// Something the user should be told about
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    TaskAdded{ name: String },
    TaskUpdated{ name: String },
    /// A task has been dropped onto another day
    TaskMoved{ name: String, date: TaskDate },
    TaskDeleted{ name: String },
    /// An operation was refused (e.g. because of an empty task name)
    Rejected{ reason: String },
    /// The change has been applied, but could not be saved
    SaveFailed{ reason: String },
    /// Some saved tasks could not be read. The saved list has been backed up
    LoadFailed{ reason: String },
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Rejected{..} | Notice::SaveFailed{..} | Notice::LoadFailed{..})
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Notice::TaskAdded{name} => write!(f, "Added \"{}\"", name),
            Notice::TaskUpdated{name} => write!(f, "Updated \"{}\"", name),
            Notice::TaskMoved{name, date} => write!(f, "Moved \"{}\" to {}", name, date),
            Notice::TaskDeleted{name} => write!(f, "Deleted \"{}\"", name),
            Notice::Rejected{reason} => write!(f, "Not saved: {}", reason),
            Notice::SaveFailed{reason} => write!(f, "Your changes could not be saved: {}", reason),
            Notice::LoadFailed{reason} => write!(f, "Some saved tasks could not be read, a backup has been kept: {}", reason),
        }
    }
}
