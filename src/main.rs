use std::path::PathBuf;

/// Settings gathered from the command line.
struct AppConfig {
    db_path: PathBuf,
    log_dir: PathBuf,
    log_level: String,
    import_path: Option<PathBuf>,
    export_path: Option<PathBuf>,
}

fn main() {
    let config = parse_args();

    if let Err(e) = contact_hero::logging::init_logging(&config.log_level, &config.log_dir) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Some(json_path) = config.import_path {
        println!("Importing from {}...", json_path.display());
        match contact_hero::migrate::import_json(&json_path, &config.db_path) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Persons: {}", stats.persons);
                println!("  Jobs: {}", stats.jobs);
                println!("  Tags: {}", stats.tags);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(json_path) = config.export_path {
        match contact_hero::migrate::export_json(&config.db_path, &json_path) {
            Ok(stats) => println!(
                "Exported {} persons and {} jobs to {}",
                stats.persons,
                stats.jobs,
                json_path.display()
            ),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    contact_hero::cli::run(&config.db_path);
}

fn parse_args() -> AppConfig {
    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;
    let mut log_dir: Option<PathBuf> = None;
    let mut log_level = String::from("info");
    let mut import_path: Option<PathBuf> = None;
    let mut export_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => db_path = Some(PathBuf::from(required_value(&mut args, "--file"))),
            "--log-dir" => log_dir = Some(PathBuf::from(required_value(&mut args, "--log-dir"))),
            "--log-level" => log_level = required_value(&mut args, "--log-level"),
            "--import" => import_path = Some(PathBuf::from(required_value(&mut args, "--import"))),
            "--export" => export_path = Some(PathBuf::from(required_value(&mut args, "--export"))),
            "--help" | "-h" => {
                println!("contactHeRo - address book with accounts and job listings");
                println!();
                println!("Usage: contact_hero [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Database file path (default: .data/contact_hero.db)");
                println!("  --log-dir <DIR>        Log directory (default: .data/logs)");
                println!("  --log-level <LEVEL>    trace, debug, info, warn or error (default: info)");
                println!("  --import <JSON_PATH>   Import an address book JSON file into a new database");
                println!("  --export <JSON_PATH>   Export the address book to a JSON file");
                println!("  -h, --help             Show this help");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let data_dir = PathBuf::from(".data");
    if db_path.is_none() && !data_dir.exists() {
        if let Err(e) = std::fs::create_dir_all(&data_dir) {
            eprintln!("Error: failed to create {}: {}", data_dir.display(), e);
            std::process::exit(1);
        }
    }

    AppConfig {
        db_path: db_path.unwrap_or_else(|| data_dir.join("contact_hero.db")),
        log_dir: log_dir.unwrap_or_else(|| data_dir.join("logs")),
        log_level,
        import_path,
        export_path,
    }
}

fn required_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            std::process::exit(1);
        }
    }
}
