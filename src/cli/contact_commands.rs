use crate::cli::context::CliContext;
use crate::validation;

pub fn list(ctx: &CliContext) {
    if ctx.store.is_empty() {
        println!("No contacts found.");
        return;
    }
    println!("Contacts ({}):", ctx.store.len());
    let all: Vec<_> = ctx.store.all().iter().collect();
    ctx.display_contacts(&all);
}

pub fn add(ctx: &mut CliContext) {
    println!("Adding a new contact");

    let name = match ctx.prompt("Name: ") {
        Some(s) if !s.is_empty() => s,
        Some(_) => {
            println!("Name is required.");
            return;
        }
        None => return,
    };

    let phone = match prompt_valid_phone(ctx, "Phone: ", false) {
        Some(p) => p,
        None => return,
    };

    let email = match prompt_valid_email(ctx, "Email: ", false) {
        Some(e) => e,
        None => return,
    };

    let address = match ctx.prompt("Address: ") {
        Some(a) => a,
        None => return,
    };

    println!("Available groups: {}", ctx.store.groups().join(", "));
    let group = match ctx.prompt("Group (Enter for 'General'): ") {
        Some(g) => g,
        None => return,
    };
    let group = if group.is_empty() {
        None
    } else {
        Some(group.as_str())
    };

    match ctx.store.add(&name, &phone, &email, &address, group) {
        Ok(contact) => println!("Added {} to group '{}'.", contact.name, contact.group),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn search(ctx: &CliContext, args: &str) {
    let term = if args.is_empty() {
        match ctx.prompt("Name or phone number to search: ") {
            Some(s) if !s.is_empty() => s,
            _ => return,
        }
    } else {
        args.to_string()
    };

    let results = ctx.store.search(&term);
    if results.is_empty() {
        println!("No matching contacts found.");
        return;
    }
    println!("Found {} matching contacts:", results.len());
    ctx.display_contacts(&results);
}

pub fn update(ctx: &mut CliContext, args: &str) {
    let index = match resolve_index(ctx, args, "update") {
        Some(i) => i,
        None => return,
    };
    // get() re-checks the range; update() rejects a stale index anyway.
    let current = match ctx.store.get(index) {
        Some(c) => c.clone(),
        None => {
            println!("Invalid contact number.");
            return;
        }
    };

    println!("Leave blank to keep the current value.");

    let name = match ctx.prompt(&format!("Name [{}]: ", current.name)) {
        Some(s) => s,
        None => return,
    };
    let phone = match prompt_valid_phone(ctx, &format!("Phone [{}]: ", current.phone), true) {
        Some(p) => p,
        None => return,
    };
    let email = match prompt_valid_email(ctx, &format!("Email [{}]: ", current.email), true) {
        Some(e) => e,
        None => return,
    };
    let address = match ctx.prompt(&format!("Address [{}]: ", current.address)) {
        Some(a) => a,
        None => return,
    };
    println!("Available groups: {}", ctx.store.groups().join(", "));
    let group = match ctx.prompt(&format!("Group [{}]: ", current.group)) {
        Some(g) => g,
        None => return,
    };

    let result = ctx.store.update(
        index,
        blank_keeps(&name),
        blank_keeps(&phone),
        blank_keeps(&email),
        blank_keeps(&address),
        blank_keeps(&group),
    );
    match result {
        Ok(contact) => println!("Updated {}.", contact.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CliContext, args: &str) {
    let index = match resolve_index(ctx, args, "delete") {
        Some(i) => i,
        None => return,
    };
    match ctx.store.delete(index) {
        Ok(name) => println!("Deleted '{}'.", name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn groups(ctx: &CliContext) {
    println!("Available groups: {}", ctx.store.groups().join(", "));
}

pub fn view_by_group(ctx: &CliContext, args: &str) {
    let group = if args.is_empty() {
        println!("Available groups: {}", ctx.store.groups().join(", "));
        match ctx.prompt("Group to view (Enter for all): ") {
            Some(g) => g,
            None => return,
        }
    } else {
        args.to_string()
    };

    let filter = if group.is_empty() {
        None
    } else {
        Some(group.as_str())
    };
    let contacts = ctx.store.by_group(filter);
    if contacts.is_empty() {
        println!("No contacts found in this group.");
        return;
    }
    ctx.display_contacts(&contacts);
}

/// Takes the 1-based index from the command arguments, or lists the contacts
/// and prompts for one. Returns None if the input is not a number.
fn resolve_index(ctx: &CliContext, args: &str, verb: &str) -> Option<usize> {
    let raw = if args.is_empty() {
        list(ctx);
        ctx.prompt(&format!("Number of the contact to {}: ", verb))?
    } else {
        args.to_string()
    };
    match raw.parse::<usize>() {
        Ok(i) => Some(i),
        Err(_) => {
            println!("Invalid input: expected a contact number.");
            None
        }
    }
}

/// Re-prompts until the phone validates. With `allow_blank`, an empty entry
/// means keep-current and is passed through. Returns None on EOF.
fn prompt_valid_phone(ctx: &CliContext, prompt: &str, allow_blank: bool) -> Option<String> {
    loop {
        let phone = ctx.prompt(prompt)?;
        if phone.is_empty() && allow_blank {
            return Some(phone);
        }
        if validation::is_valid_phone(&phone) {
            return Some(phone);
        }
        println!("Invalid phone number. Use 9-15 digits, e.g. +1234567890 or 1234567890.");
    }
}

/// Email counterpart of [`prompt_valid_phone`].
fn prompt_valid_email(ctx: &CliContext, prompt: &str, allow_blank: bool) -> Option<String> {
    loop {
        let email = ctx.prompt(prompt)?;
        if email.is_empty() && allow_blank {
            return Some(email);
        }
        if validation::is_valid_email(&email) {
            return Some(email);
        }
        println!("Invalid email format, e.g. name@example.com.");
    }
}

/// Maps the CLI's blank-means-keep convention onto the store's explicit
/// `Option` boundary.
fn blank_keeps(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
