pub mod storage;

pub use storage::{JsonFileStorage, MemoryStorage, Storage};

use std::collections::BTreeSet;

use crate::error::{ContactBookError, ContactBookResult};
use crate::model::{Contact, DEFAULT_GROUP};
use crate::validation;

/// The in-memory ordered collection of contacts plus its operations. The
/// collection is the cache; the injected [`Storage`] adapter is the durable
/// mirror, rewritten in full after every mutation.
///
/// Positions handed to `update`/`delete`/`get` are 1-based and map directly
/// onto insertion order, matching what callers display. They shift when a
/// contact is deleted; each contact also carries a session-stable `id` for
/// callers that need identity across such shifts.
pub struct ContactStore {
    contacts: Vec<Contact>,
    storage: Box<dyn Storage>,
}

impl ContactStore {
    /// Opens the store over the given adapter, loading any persisted
    /// contacts. A malformed or unreadable file is not fatal: the store
    /// starts empty and the load error rides along for the caller to report.
    pub fn open(storage: Box<dyn Storage>) -> (Self, Option<ContactBookError>) {
        match storage.load() {
            Ok(contacts) => (Self { contacts, storage }, None),
            Err(e) => (
                Self {
                    contacts: Vec::new(),
                    storage,
                },
                Some(e),
            ),
        }
    }

    /// Validates and appends a new contact, then persists. A blank `group`
    /// lands in `"General"`. Duplicates are allowed.
    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
        group: Option<&str>,
    ) -> ContactBookResult<&Contact> {
        let contact = Contact::create(
            validation::non_blank(name, "name")?,
            validation::valid_phone(phone)?,
            validation::valid_email(email)?,
            address.trim().to_string(),
            validation::trim_optional(group),
        );
        self.contacts.push(contact);
        let slot = self.contacts.len() - 1;
        self.storage.save(&self.contacts)?;
        Ok(&self.contacts[slot])
    }

    /// Case-insensitive substring search over names, or substring match
    /// against the raw phone number. An empty result is a normal outcome.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let needle = term.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.phone.contains(&needle))
            .collect()
    }

    /// Applies the supplied replacements to the contact at 1-based `index`.
    /// `None` keeps the current value. Phone, email, and name replacements
    /// are validated before anything is written, so a rejected field leaves
    /// the contact exactly as it was. Any accepted field restamps
    /// `last_modified`. Persists on success.
    pub fn update(
        &mut self,
        index: usize,
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        address: Option<&str>,
        group: Option<&str>,
    ) -> ContactBookResult<&Contact> {
        let slot = self.check_index(index)?;

        let new_name = name.map(|n| validation::non_blank(n, "name")).transpose()?;
        let new_phone = phone.map(validation::valid_phone).transpose()?;
        let new_email = email.map(validation::valid_email).transpose()?;

        let contact = &mut self.contacts[slot];
        let mut touched = false;
        if let Some(n) = new_name {
            contact.name = n;
            touched = true;
        }
        if let Some(p) = new_phone {
            contact.phone = p;
            touched = true;
        }
        if let Some(e) = new_email {
            contact.email = e;
            touched = true;
        }
        if let Some(a) = address {
            contact.address = a.trim().to_string();
            touched = true;
        }
        if let Some(g) = group {
            // Groups are free-form; any string becomes a de-facto group.
            contact.group = g.trim().to_string();
            touched = true;
        }
        if touched {
            contact.touch();
        }

        self.storage.save(&self.contacts)?;
        Ok(&self.contacts[slot])
    }

    /// Removes the contact at 1-based `index`, shifting later positions down
    /// by one, and persists. Returns the removed contact's name for
    /// confirmation display.
    pub fn delete(&mut self, index: usize) -> ContactBookResult<String> {
        let slot = self.check_index(index)?;
        let removed = self.contacts.remove(slot);
        self.storage.save(&self.contacts)?;
        Ok(removed.name)
    }

    /// Distinct group values in use, unioned with `"General"`, sorted.
    pub fn groups(&self) -> Vec<String> {
        let mut groups: BTreeSet<String> =
            self.contacts.iter().map(|c| c.group.clone()).collect();
        groups.insert(DEFAULT_GROUP.to_string());
        groups.into_iter().collect()
    }

    /// Contacts whose group equals `group` exactly (case-sensitive), in
    /// collection order. `None` means all contacts.
    pub fn by_group(&self, group: Option<&str>) -> Vec<&Contact> {
        match group {
            None => self.contacts.iter().collect(),
            Some(g) => self.contacts.iter().filter(|c| c.group == g).collect(),
        }
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Read-only access by 1-based position, for display of current values.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        index
            .checked_sub(1)
            .and_then(|slot| self.contacts.get(slot))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn check_index(&self, index: usize) -> ContactBookResult<usize> {
        if index == 0 || index > self.contacts.len() {
            return Err(ContactBookError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(index - 1)
    }
}
