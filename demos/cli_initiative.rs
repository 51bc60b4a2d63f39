//! CLI initiative dealer example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use initdeal::{Action, RosterError, Side, Table, TableOptions, TableView};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  f <name>            add a friend
  e <name>            add a foe
  rm <f|e> <index>    remove a name
  up <f|e> <index>    move a name up
  down <f|e> <index>  move a name down
  clear <f|e>         clear a list
  deal                deal initiative cards
  next                pass the turn to the next card
  swap <n>            swap the current card for a higher one
  reset               drop the dealt cards
  q                   quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .init();

    println!("Initiative dealer CLI example (type 'help' for commands, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    loop {
        print_lists(&table);
        print_table(&table.view());
        if let Some(err) = table.swap_error() {
            println!("{}", colorize(&err.to_string(), "31"));
        }
        println!("{}", format_actions(&table));

        let line = prompt_line("> ");
        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let rest = rest.trim();

        let action = match command {
            "q" | "quit" => break,
            "" => continue,
            "help" | "?" => {
                println!("{HELP}");
                continue;
            }
            "f" | "friend" => {
                report(table.add_name(Side::Friends, rest));
                continue;
            }
            "e" | "foe" => {
                report(table.add_name(Side::Foes, rest));
                continue;
            }
            "rm" | "up" | "down" => {
                let Some((side, index)) = parse_entry(rest) else {
                    println!("Usage: {command} <f|e> <index>");
                    continue;
                };
                report(match command {
                    "rm" => table.remove_name(side, index).map(|_| ()),
                    "up" => table.move_up(side, index),
                    _ => table.move_down(side, index),
                });
                continue;
            }
            "clear" => {
                let Some(side) = parse_side(rest) else {
                    println!("Usage: clear <f|e>");
                    continue;
                };
                Action::Clear(side)
            }
            "deal" if table.can_deal() => Action::Deal,
            "next" if table.can_advance() => Action::Next,
            "swap" if table.can_swap(rest) => Action::Swap(rest.to_string()),
            "reset" => Action::Reset,
            "deal" | "next" | "swap" => {
                println!("Not available right now.");
                continue;
            }
            _ => {
                println!("Unknown command.");
                continue;
            }
        };

        table = table.apply(action);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_string()
}

fn report(result: Result<(), RosterError>) {
    if let Err(err) = result {
        println!("{}", colorize(&format!("Roster error: {err}"), "31"));
    }
}

fn parse_side(text: &str) -> Option<Side> {
    match text.to_lowercase().as_str() {
        "f" | "friend" | "friends" => Some(Side::Friends),
        "e" | "foe" | "foes" => Some(Side::Foes),
        _ => None,
    }
}

fn parse_entry(text: &str) -> Option<(Side, usize)> {
    let (side, index) = text.split_once(' ')?;
    Some((parse_side(side)?, index.trim().parse().ok()?))
}

fn print_lists(table: &Table) {
    for side in [Side::Friends, Side::Foes] {
        let names = table.roster().side(side);
        let listed = names
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{index}:{name}"))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{:<8} {}", format!("{}:", side.as_str()), listed);
    }
}

fn print_table(view: &TableView<'_>) {
    if view.columns.is_empty() {
        println!();
        return;
    }

    let mut names = Vec::new();
    let mut cards = Vec::new();
    let mut markers = Vec::new();

    for (index, column) in view.columns.iter().enumerate() {
        let width = column.name.map_or(0, str::len).max("Current".len());
        names.push(format!("{:^width$}", column.name.unwrap_or("")));
        cards.push(format!("{:^width$}", column.card));
        let marker = format!("{:^width$}", if column.is_current { "Current" } else { "" });
        markers.push(if column.is_current {
            colorize(&marker, "1")
        } else {
            marker
        });

        if view.divider_after == Some(index) {
            for row in [&mut names, &mut cards, &mut markers] {
                row.push("|".to_string());
            }
        }
    }

    println!();
    println!("{}", names.join(" "));
    println!("{}", cards.join(" "));
    println!("{}", markers.join(" "));
    println!();
}

fn format_actions(table: &Table) -> String {
    let parts = [
        format_action("deal", table.can_deal()),
        format_action("next", table.can_advance()),
        format_action("swap <n>", table.current_index().is_some()),
        format_action("reset", table.assignment().is_dealt()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, allowed: bool) -> String {
    let text = format!("[{label}]");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
