use crate::cli::context::CLIContext;
use crate::level;
use crate::ops::member_ops::{self, MemberEdit};
use crate::ops::points_ops;
use crate::queries::member_queries::{self, MemberCard};

pub fn list(ctx: &CLIContext) {
    let members = ctx.store.load_all();
    if members.is_empty() {
        println!("No members yet. Use 'add' to add someone.");
        return;
    }

    println!("Members ({}):", members.len());
    println!();
    for (i, m) in members.iter().enumerate() {
        let info = level::level_info(m.points);
        let role = if m.responsibility.is_empty() {
            String::new()
        } else {
            format!(" ({})", m.responsibility)
        };
        println!(
            "  #{:<3} {}{} - {} points, level {}",
            i + 1,
            m.full_name(),
            role,
            m.points,
            info.level
        );
    }
}

pub fn add(ctx: &CLIContext, args: &str) {
    println!("Adding a new member (press Enter to skip optional fields)");
    println!();

    let mut words = args.split_whitespace();
    let first_name = match words.next() {
        Some(f) => f.to_string(),
        None => match ctx.prompt("First name (required): ") {
            Some(s) => s,
            None => return,
        },
    };
    let rest: Vec<&str> = words.collect();
    let last_name = if !rest.is_empty() {
        rest.join(" ")
    } else {
        match ctx.prompt("Last name (required): ") {
            Some(s) => s,
            None => return,
        }
    };

    let birth_date = loop {
        let raw = match ctx.prompt("Birth date (YYYY-MM-DD): ") {
            Some(s) => s,
            None => return,
        };
        match CLIContext::parse_date(&raw) {
            Some(d) => break d,
            None => println!("Invalid date format, try again."),
        }
    };

    let responsibility = ctx.prompt("Responsibility: ").unwrap_or_default();
    let description = ctx.prompt("Description: ").unwrap_or_default();
    let photo = ctx.prompt("Photo path: ").unwrap_or_default();

    match member_ops::add_member(
        &ctx.store,
        &first_name,
        &last_name,
        birth_date,
        &responsibility,
        &description,
        Some(photo.as_str()),
        CLIContext::today(),
    ) {
        Ok(m) => println!("Added {} as #{}", m.full_name(), ctx.store.count()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    let Some((index, member)) = ctx.find_member(args) else {
        return;
    };
    let card = MemberCard::from_member(member);
    let m = &card.member;

    println!();
    println!("#{} {}  [{}]", index + 1, m.full_name(), m.id.short());
    println!("  Born:           {}", m.birth_date);
    if !m.responsibility.is_empty() {
        println!("  Responsibility: {}", m.responsibility);
    }
    if !m.description.is_empty() {
        println!("  Description:    {}", m.description);
    }
    if let Some(photo) = &m.photo_path {
        println!("  Photo:          {}", photo);
    }
    println!("  Points:         {}", m.points);
    println!(
        "  Level {}        {} ({:.0}%, {})",
        card.info.level,
        CLIContext::progress_bar(card.info.points_in_level, card.info.points_for_next, 20),
        card.percent,
        card.tier.display_name()
    );
    if !card.badges.is_empty() {
        let symbols: Vec<&str> = card.badges.iter().map(|b| b.symbol).collect();
        println!("  Badges:         {}", symbols.join(" "));
        for b in &card.badges {
            println!("    {} {} - {}", b.symbol, b.name, b.description);
        }
    }
    if let Some(next) = card.next_badge {
        println!("  Next badge:     {} {} at level {}", next.symbol, next.name, next.unlock_level);
    }

    let recent = points_ops::recent_history(&ctx.store, index, 3);
    if !recent.is_empty() {
        println!("  Recent changes:");
        for e in &recent {
            println!("    {} {} ({})", e.timestamp, e.signed_change(), e.reason);
        }
    }
    println!();
}

pub fn edit(ctx: &CLIContext, args: &str) {
    let Some((index, member)) = ctx.find_member(args) else {
        return;
    };
    println!("Editing {} (press Enter to keep the current value, '-' to clear)", member.full_name());

    let first = ctx.prompt(&format!("First name [{}]: ", member.first_name)).unwrap_or_default();
    let last = ctx.prompt(&format!("Last name [{}]: ", member.last_name)).unwrap_or_default();
    let birth = ctx.prompt(&format!("Birth date [{}]: ", member.birth_date)).unwrap_or_default();
    let resp = ctx.prompt(&format!("Responsibility [{}]: ", member.responsibility)).unwrap_or_default();
    let desc = ctx.prompt(&format!("Description [{}]: ", member.description)).unwrap_or_default();
    let photo = ctx
        .prompt(&format!("Photo path [{}]: ", member.photo_path.as_deref().unwrap_or("")))
        .unwrap_or_default();

    let birth_date = if birth.is_empty() {
        None
    } else {
        match CLIContext::parse_date(&birth) {
            Some(d) => Some(d),
            None => {
                println!("Invalid date format, nothing changed.");
                return;
            }
        }
    };

    let edit = MemberEdit {
        first_name: if first.is_empty() { None } else { Some(first.as_str()) },
        last_name: if last.is_empty() { None } else { Some(last.as_str()) },
        birth_date,
        responsibility: keep_or_clear(&resp),
        description: keep_or_clear(&desc),
        photo_path: keep_or_clear(&photo).map(|p| if p.is_empty() { None } else { Some(p) }),
    };

    match member_ops::edit_member(&ctx.store, index, edit, CLIContext::today()) {
        Ok(m) => println!("Updated {}", m.full_name()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &CLIContext, args: &str) {
    let Some((index, member)) = ctx.find_member(args) else {
        return;
    };
    if !ctx.confirm(&format!("Delete {} and their history?", member.full_name())) {
        println!("Cancelled.");
        return;
    }
    match ctx.store.delete(index) {
        Ok(m) => {
            println!("Deleted {}.", m.full_name());
            println!("Members after #{} have moved up one number.", index + 1);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn find(ctx: &CLIContext, args: &str) {
    let matches = member_queries::find_by_name(&ctx.store, args);
    if matches.is_empty() {
        println!("No member found matching '{}'", args.trim());
        return;
    }
    for (i, m) in &matches {
        println!("  #{:<3} {} - {} points", i + 1, m.full_name(), m.points);
    }
}

/// Empty input keeps the old value; "-" clears it.
fn keep_or_clear(input: &str) -> Option<&str> {
    match input {
        "" => None,
        "-" => Some(""),
        s => Some(s),
    }
}
