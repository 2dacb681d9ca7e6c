use std::path::PathBuf;

use mpm::config::Config;

fn main() {
    mpm::logging::init();

    let mut config = Config::from_env();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => match args.next() {
                Some(p) => config.data_file = PathBuf::from(p),
                None => {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            },
            "--backup-dir" => match args.next() {
                Some(p) => config.backup_dir = PathBuf::from(p),
                None => {
                    eprintln!("Error: --backup-dir requires a directory argument");
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                println!("MPM - Member Points Manager");
                println!();
                println!("Usage: mpm [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>       Member data file (default: members_data.json)");
                println!("  --backup-dir <DIR>      Where timestamped backups go (default: .)");
                println!("  -h, --help              Show this help");
                println!();
                println!("Environment:");
                println!("  MPM_DATA_FILE, MPM_BACKUP_DIR, MPM_EXPORT_FILE   Path defaults");
                println!("  MPM_LOG                                          Log filter (default: warn)");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    if !config.backup_dir.exists() {
        if let Err(e) = std::fs::create_dir_all(&config.backup_dir) {
            eprintln!("Error creating {}: {}", config.backup_dir.display(), e);
            std::process::exit(1);
        }
    }

    mpm::cli::run(config);
}
