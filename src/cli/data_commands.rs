use std::path::Path;

use crate::cli::context::CLIContext;
use crate::queries::stats_queries;

pub fn print_stats(ctx: &CLIContext) {
    let s = stats_queries::group_stats(&ctx.store);
    println!("Group statistics:");
    println!("  Members:              {}", s.members);
    println!("  Total points:         {}", s.total_points);
    println!("  Average points:       {:.1}", s.average_points);
    println!("  Highest level:        {}", s.highest_level);
    println!("  Members at level 1+:  {}", s.ranked_members);
    println!("  With point history:   {}", s.members_with_history);
    if let Some((name, points)) = s.top_member {
        println!("  Top member:           {} ({} points)", name, points);
    }
}

pub fn count(ctx: &CLIContext) {
    println!("{} members", ctx.store.count());
}

pub fn backup(ctx: &CLIContext, args: &str) {
    let target = args.trim();
    let target = (!target.is_empty()).then(|| Path::new(target));
    match ctx.store.backup(target) {
        Ok(path) => println!("Backup written to {}", path.display()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn restore(ctx: &CLIContext, args: &str) {
    let source = args.trim();
    if source.is_empty() {
        println!("Usage: restore <backup file>");
        return;
    }
    if !ctx.confirm(&format!("Replace all current members with {}?", source)) {
        println!("Cancelled.");
        return;
    }
    match ctx.store.restore(Path::new(source)) {
        Ok(n) => println!("Restored {} members.", n),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn clear(ctx: &CLIContext) {
    println!("This removes every member and their history. Take a backup first if unsure.");
    if !ctx.confirm("Clear all members?") {
        println!("Cancelled.");
        return;
    }
    match ctx.store.clear() {
        Ok(()) => println!("All members cleared."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn export(ctx: &CLIContext, args: &str) {
    let target = match args.trim() {
        "" => ctx.config.export_file.clone(),
        p => p.into(),
    };
    match ctx.store.export_csv(&target) {
        Ok(n) => println!("Exported {} members to {}", n, target.display()),
        Err(e) => ctx.print_error(&e),
    }
}
