use std::{
    io::{self, BufRead, BufReader},
    path::Path,
};

use fs_err as fs;

use crate::{
    error::{Error, Result},
    settings::RosterLimits,
};

/// Names loaded in file order, never modified after loading.
#[derive(Debug)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// The file is closed before this returns, on success or failure.
    pub fn load(path: &Path, limits: RosterLimits) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })?;

        Self::from_reader(BufReader::new(file), limits).map_err(|err| match err {
            LoadError::Io(source) => Error::Read {
                path: path.to_owned(),
                source,
            },
            LoadError::Invalid(err) => err,
        })
    }

    pub fn from_reader(reader: impl BufRead, limits: RosterLimits) -> Result<Self, LoadError> {
        let mut names = Vec::with_capacity(limits.total);

        // Lines past the roster capacity are never read
        for (index, line) in reader.lines().take(limits.total).enumerate() {
            let name = line?;

            let length = name.chars().count();
            if length >= limits.max_name_length {
                return Err(LoadError::Invalid(Error::NameTooLong {
                    line: index + 1,
                    length,
                    max: limits.max_name_length,
                }));
            }

            names.push(name);
        }

        if names.len() < limits.total {
            return Err(LoadError::Invalid(Error::WrongEntryCount { expected: limits.total }));
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Reader failures carry no path, [`Roster::load`] attaches it.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Invalid(Error),
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
