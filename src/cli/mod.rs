pub mod context;
pub mod member_commands;
pub mod points_commands;
pub mod data_commands;

use crate::config::Config;
use crate::store::MemberStore;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(config: Config) {
    println!("Member Points Manager");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let store = MemberStore::from_config(&config);
    let count = store.count();
    if count == 0 {
        println!("No members found in {}.", store.data_file().display());
    } else {
        println!("Loaded {} members from {}", count, store.data_file().display());
    }
    println!();

    let ctx = CLIContext::new(store, config);
    repl_loop(&ctx);
}

fn repl_loop(ctx: &CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Members
            "list" | "ls" | "members" => member_commands::list(ctx),
            "add" => member_commands::add(ctx, args),
            "show" | "view" => member_commands::show(ctx, args),
            "edit" => member_commands::edit(ctx, args),
            "delete" | "rm" => member_commands::delete(ctx, args),
            "find" => member_commands::find(ctx, args),

            // Points
            "points" | "set-points" => points_commands::set(ctx, args),
            "award" => points_commands::award(ctx, args),
            "history" => points_commands::history(ctx, args),
            "leaderboard" | "top" => points_commands::leaderboard(ctx),
            c if c.starts_with('+') || c.starts_with('-') => points_commands::quick(ctx, c, args),

            // Data
            "stats" => data_commands::print_stats(ctx),
            "count" => data_commands::count(ctx),
            "backup" => data_commands::backup(ctx, args),
            "restore" => data_commands::restore(ctx, args),
            "clear" => data_commands::clear(ctx),
            "export" => data_commands::export(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Members:
    list                        List members with points and level
    add [first last]            Add a member (interactive)
    show <# or name>            Show details, level, badges
    edit <# or name>            Edit details (points are not touched)
    delete <# or name>          Delete a member
    find <query>                Search by name

  Points:
    points <#> <value> [why]    Set points to an exact value
    award <#> <+/-n> [why]      Add or remove points
    +1 <#>, +5 <#>, -1 <#> ...  Quick adjust
    history <# or name>         Last 10 point changes
    leaderboard                 Members ranked by points

  Data:
    stats                       Group statistics
    count                       Number of members
    backup [file]               Write a snapshot (default: timestamped file)
    restore <file>              Replace all members from a snapshot
    export [file]               Write a CSV export
    clear                       Remove all members

  Other:
    help                        Show this help
    exit / quit / q             Exit

TIPS:
  - Member numbers come from 'list' and change after a delete
  - Points never go below zero"#);
}
