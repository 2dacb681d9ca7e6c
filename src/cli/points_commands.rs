use crate::cli::context::CLIContext;
use crate::model::HistoryEntry;
use crate::ops::points_ops;
use crate::queries::member_queries;

/// Rows shown by `history` unless a count is given.
const HISTORY_ROWS: usize = 10;

/// `points <#> <value> [reason]`
pub fn set(ctx: &CLIContext, args: &str) {
    let Some((index, value, reason)) = parse_position_amount(args) else {
        println!("Usage: points <#> <value> [reason]");
        return;
    };
    match points_ops::set_points(&ctx.store, index, value, reason) {
        Ok(entry) => print_change(ctx, index, &entry),
        Err(e) => ctx.print_error(&e),
    }
}

/// `award <#> <delta> [reason]`, also reached through `+1`, `-5` and friends.
pub fn award(ctx: &CLIContext, args: &str) {
    let Some((index, delta, reason)) = parse_position_amount(args) else {
        println!("Usage: award <#> <+/-amount> [reason]");
        return;
    };
    match points_ops::adjust_points(&ctx.store, index, delta, reason) {
        Ok(entry) => print_change(ctx, index, &entry),
        Err(e) => ctx.print_error(&e),
    }
}

/// Quick adjust shorthand: `+5 3` adds five points to member #3.
pub fn quick(ctx: &CLIContext, command: &str, args: &str) {
    let Ok(delta) = command.parse::<i64>() else {
        println!("Unknown command: {}. Type 'help' for commands.", command);
        return;
    };
    let (who, reason) = split_first(args);
    let Some(index) = CLIContext::parse_position(who) else {
        println!("Usage: {} <#> [reason]", command);
        return;
    };
    match points_ops::adjust_points(&ctx.store, index, delta, reason) {
        Ok(entry) => print_change(ctx, index, &entry),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn history(ctx: &CLIContext, args: &str) {
    let Some((index, member)) = ctx.find_member(args) else {
        return;
    };
    let entries = points_ops::recent_history(&ctx.store, index, HISTORY_ROWS);
    if entries.is_empty() {
        println!("No point changes recorded for {} yet.", member.full_name());
        return;
    }

    println!("Point history for {} (newest first):", member.full_name());
    for e in &entries {
        let arrow = match e.change {
            c if c > 0 => "up",
            c if c < 0 => "down",
            _ => "same",
        };
        println!(
            "  {}  {:>4} {:<4} ({} -> {})  {}",
            e.timestamp, e.signed_change(), arrow, e.old_points, e.new_points, e.reason
        );
    }
    let total = ctx.store.history(index).len();
    if total > entries.len() {
        println!("  ... {} older entries", total - entries.len());
    }
}

pub fn leaderboard(ctx: &CLIContext) {
    let rows = member_queries::leaderboard_rows(&ctx.store);
    if rows.is_empty() {
        println!("No members yet.");
        return;
    }
    println!("{:>4}  {:<4} {:<30} {:>7} {:>5}", "Rank", "#", "Name", "Points", "Level");
    for r in &rows {
        println!(
            "{:>4}  {:<4} {:<30} {:>7} {:>5}",
            r.rank,
            r.index + 1,
            r.name,
            r.points,
            r.level
        );
    }
}

fn print_change(ctx: &CLIContext, index: usize, entry: &HistoryEntry) {
    let name = ctx
        .store
        .get(index)
        .map(|m| m.full_name())
        .unwrap_or_else(|_| format!("#{}", index + 1));
    println!(
        "{}: {} -> {} ({})",
        name,
        entry.old_points,
        entry.new_points,
        entry.signed_change()
    );
}

fn split_first(args: &str) -> (&str, &str) {
    let args = args.trim();
    match args.find(char::is_whitespace) {
        Some(pos) => (&args[..pos], args[pos..].trim()),
        None => (args, ""),
    }
}

/// `<#> <signed int> [free text]`
fn parse_position_amount(args: &str) -> Option<(usize, i64, &str)> {
    let (who, rest) = split_first(args);
    let (amount, reason) = split_first(rest);
    let index = CLIContext::parse_position(who)?;
    let amount = amount.trim_start_matches('+').parse::<i64>().ok()?;
    Some((index, amount, reason))
}
