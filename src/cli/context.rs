use chrono::{Local, NaiveDate};
use std::io::{self, Write};

use crate::config::Config;
use crate::model::Member;
use crate::queries::member_queries;
use crate::store::MemberStore;

pub struct CLIContext {
    pub store: MemberStore,
    pub config: Config,
}

impl CLIContext {
    pub fn new(store: MemberStore, config: Config) -> Self {
        Self { store, config }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Yes/no question; anything but y/yes counts as no.
    pub fn confirm(&self, prompt: &str) -> bool {
        let answer = self
            .prompt(&format!("{} [y/N] ", prompt))
            .unwrap_or_default()
            .to_lowercase();
        answer == "y" || answer == "yes"
    }

    /// Resolve a member from a 1-based position or a name query.
    /// Prints why when nothing (or too much) matches.
    pub fn find_member(&self, args: &str) -> Option<(usize, Member)> {
        let query = args.trim();
        if query.is_empty() {
            println!("Which member? Give a number from 'list' or part of a name.");
            return None;
        }

        if let Some(index) = Self::parse_position(query) {
            return match self.store.get(index) {
                Ok(m) => Some((index, m)),
                Err(_) => {
                    println!("No member #{}. There are {} members.", query, self.store.count());
                    None
                }
            };
        }

        let matches = member_queries::find_by_name(&self.store, query);
        match matches.len() {
            0 => {
                println!("No member found matching '{}'", query);
                None
            }
            1 => matches.into_iter().next(),
            _ => {
                if let Some(exact) = matches
                    .iter()
                    .find(|(_, m)| m.full_name().eq_ignore_ascii_case(query))
                {
                    return Some(exact.clone());
                }
                println!("Multiple matches found:");
                for (i, m) in &matches {
                    println!("  #{} {}", i + 1, m.full_name());
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// "3" -> Some(2). Zero and non-numbers are None.
    pub fn parse_position(s: &str) -> Option<usize> {
        s.trim()
            .trim_start_matches('#')
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
    }

    pub fn parse_date(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Text progress bar, e.g. `[#####.....] 15/30`.
    pub fn progress_bar(points_in_level: u32, points_for_next: u32, width: usize) -> String {
        let filled = if points_for_next == 0 {
            0
        } else {
            (points_in_level as usize * width) / points_for_next as usize
        };
        format!(
            "[{}{}] {}/{}",
            "#".repeat(filled.min(width)),
            ".".repeat(width - filled.min(width)),
            points_in_level,
            points_for_next
        )
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::MpmError) {
        println!("Error: {}", e);
    }
}
