use std::io::{self, Write};

use crate::error::ContactBookError;
use crate::model::Contact;
use crate::store::ContactStore;

pub struct CliContext {
    pub store: ContactStore,
}

impl CliContext {
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(
                buf.trim_end_matches('\n')
                    .trim_end_matches('\r')
                    .to_string(),
            ),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    pub fn print_error(&self, e: &ContactBookError) {
        println!("Error: {}", e);
    }

    /// Prints a numbered listing. For the full collection the numbers are
    /// the 1-based positions the update/delete commands accept.
    pub fn display_contacts(&self, contacts: &[&Contact]) {
        for (i, contact) in contacts.iter().enumerate() {
            println!();
            println!("{}. Name: {}", i + 1, contact.name);
            println!("   Phone: {}", contact.phone);
            println!("   Email: {}", contact.email);
            println!("   Address: {}", contact.address);
            println!("   Group: {}", contact.group);
            println!("   Created: {}", contact.created_date);
            println!("   Last Modified: {}", contact.last_modified);
        }
    }
}
