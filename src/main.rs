use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut file_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                file_path = args.next().map(PathBuf::from);
                if file_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Contact Book");
                println!();
                println!("Usage: contactbook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Contacts file path (default: contacts.json)");
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let file_path = file_path.unwrap_or_else(|| PathBuf::from("contacts.json"));
    contactbook::cli::run(&file_path);
}
