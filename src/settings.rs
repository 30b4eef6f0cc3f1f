use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_ROSTER_PATH: &str = "students.txt";
pub const TOTAL_STUDENTS: usize = 60;
pub const REPRESENTATIVES: usize = 4;
/// Names must be strictly shorter than this many characters.
pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLimits {
    pub total: usize,
    pub max_name_length: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            total: TOTAL_STUDENTS,
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub roster_path: PathBuf,
    pub limits: RosterLimits,
    pub representatives: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_path: DEFAULT_ROSTER_PATH.into(),
            limits: RosterLimits::default(),
            representatives: REPRESENTATIVES,
        }
    }
}

impl Settings {
    pub fn roster_path(self, roster_path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            ..self
        }
    }

    pub fn total(mut self, total: usize) -> Self {
        self.limits.total = total;
        self
    }

    pub fn max_name_length(mut self, max_name_length: usize) -> Self {
        self.limits.max_name_length = max_name_length;
        self
    }

    pub fn representatives(self, representatives: usize) -> Self {
        Self {
            representatives,
            ..self
        }
    }

    pub fn validate(self) -> Result<Self> {
        if self.limits.total == 0 {
            return Err(Error::InvalidSettings("the total number of students can't be zero!"));
        }
        if self.limits.max_name_length == 0 {
            return Err(Error::InvalidSettings("the maximum name length can't be zero!"));
        }
        if self.representatives > self.limits.total {
            return Err(Error::SelectionTooLarge {
                requested: self.representatives,
                available: self.limits.total,
            });
        }
        Ok(self)
    }
}
