use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::ContactBookResult;
use crate::model::Contact;

/// Durable mirror of the in-memory collection. The whole collection is the
/// unit of persistence; every save replaces the previous contents.
pub trait Storage {
    /// Reads the persisted collection. A missing backing file is not an
    /// error and yields an empty collection.
    fn load(&self) -> ContactBookResult<Vec<Contact>>;

    /// Replaces the persisted collection with `contacts`, in order.
    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()>;
}

/// JSON-file adapter: one array of records, collection order preserved.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> ContactBookResult<Vec<Contact>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()> {
        let json = serde_json::to_string_pretty(contacts)?;
        // Write to a sibling file and rename over the target, so a write
        // that dies midway cannot truncate the previous good state.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory adapter for tests and throwaway sessions. Cloning shares the
/// backing vector, so a test can keep a handle and inspect what was saved.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    contacts: Rc<RefCell<Vec<Contact>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Rc::new(RefCell::new(contacts)),
        }
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> ContactBookResult<Vec<Contact>> {
        Ok(self.contacts.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()> {
        *self.contacts.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}
