pub mod context;
pub mod contact_commands;

use std::path::Path;

use crate::store::{ContactStore, JsonFileStorage};
use context::CliContext;

/// Run the interactive REPL over the given contacts file.
pub fn run(file_path: &Path) {
    println!("Contact Book");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let storage = JsonFileStorage::new(file_path);
    let (store, load_error) = ContactStore::open(Box::new(storage));
    if let Some(e) = load_error {
        eprintln!("Error loading contacts file: {}", e);
        eprintln!("Starting with an empty contact book.");
    } else if !store.is_empty() {
        println!("Loaded {} contacts.", store.len());
    }

    let mut ctx = CliContext::new(store);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CliContext) {
    loop {
        let line = match ctx.read_line("> ") {
            Some(l) => l,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "help" | "h" | "?" => print_help(),
            "add" | "a" => contact_commands::add(ctx),
            "list" | "ls" => contact_commands::list(ctx),
            "search" | "s" => contact_commands::search(ctx, args),
            "update" | "u" => contact_commands::update(ctx, args),
            "delete" | "del" | "rm" => contact_commands::delete(ctx, args),
            "groups" => contact_commands::groups(ctx),
            "group" | "g" => contact_commands::view_by_group(ctx, args),
            "exit" | "quit" | "q" => {
                println!("Goodbye!");
                break;
            }
            other => println!("Unknown command: {}. Type 'help' for commands.", other),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add                Add a new contact");
    println!("  list               List all contacts");
    println!("  search [term]      Search by name or phone number");
    println!("  update [number]    Update a contact (blank keeps current value)");
    println!("  delete [number]    Delete a contact");
    println!("  groups             List available groups");
    println!("  group [name]       List contacts in a group (blank for all)");
    println!("  help               Show this help");
    println!("  exit               Quit");
}
