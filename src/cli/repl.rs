use log::warn;
use recipe_finder::{DetailOutcome, Session, ToggleOutcome};
use std::io::{self, BufRead, Write};

use super::render;

const HELP: &str = "\
Commands:
  s <query>     search
  c <tag>       category (\"all\" for featured)
  n / p         next / previous page
  g <n>         go to page n
  o <id>        open recipe
  x             close recipe
  f <id>        toggle favorite
  v             favorites
  h             help
  q             quit";

#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Search(String),
    Category(String),
    Next,
    Prev,
    GoTo(usize),
    Open(String),
    Close,
    Favorite(String),
    Favorites,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Option<ReplCommand> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match (head, rest) {
        ("s", q) if !q.is_empty() => ReplCommand::Search(q.to_string()),
        ("c", tag) if !tag.is_empty() => ReplCommand::Category(tag.to_string()),
        ("n", "") => ReplCommand::Next,
        ("p", "") => ReplCommand::Prev,
        ("g", n) => ReplCommand::GoTo(n.parse().ok()?),
        ("o", id) if !id.is_empty() => ReplCommand::Open(id.to_string()),
        ("x", "") => ReplCommand::Close,
        ("f", id) if !id.is_empty() => ReplCommand::Favorite(id.to_string()),
        ("v", "") => ReplCommand::Favorites,
        ("h", "") | ("?", "") => ReplCommand::Help,
        ("q", "") => ReplCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Read commands from stdin until `q` or EOF, re-rendering after each one.
pub async fn run(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    session.show_featured().await;
    print!("{}", render::page(&session.view()));
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse(&line) else {
            println!("Unknown command. Type h for help.");
            continue;
        };

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ReplCommand::Search(query) => {
                session.search(&query).await;
            }
            ReplCommand::Category(tag) => {
                session.show_category(&tag).await;
            }
            ReplCommand::Next => session.next_page(),
            ReplCommand::Prev => session.prev_page(),
            ReplCommand::GoTo(n) => session.go_to_page(n),
            ReplCommand::Open(id) => {
                match session.open_detail(&id).await {
                    DetailOutcome::Opened => {}
                    DetailOutcome::NotFound => println!("No recipe with id {}", id),
                    DetailOutcome::Failed | DetailOutcome::Stale => {}
                }
            }
            ReplCommand::Close => session.close_detail(),
            ReplCommand::Favorite(id) => match session.toggle_favorite(&id)? {
                ToggleOutcome::Added => println!("Added {} to favorites", id),
                ToggleOutcome::Removed => println!("Removed {} from favorites", id),
                ToggleOutcome::Ignored => {
                    warn!("Recipe {} is not in the current list or open detail", id);
                    println!("Open the recipe first to favorite it");
                }
            },
            ReplCommand::Favorites => session.show_favorites(),
        }

        // Every affordance is redrawn from the stores after any change
        match session.detail_view() {
            Some(detail) => print!("{}", render::detail(&detail)),
            None => print!("{}", render::page(&session.view())),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse("s  chicken curry "),
            Some(ReplCommand::Search("chicken curry".to_string()))
        );
        assert_eq!(
            parse("c Seafood"),
            Some(ReplCommand::Category("Seafood".to_string()))
        );
        assert_eq!(parse("n"), Some(ReplCommand::Next));
        assert_eq!(parse("g 3"), Some(ReplCommand::GoTo(3)));
        assert_eq!(parse("f 52874"), Some(ReplCommand::Favorite("52874".to_string())));
        assert_eq!(parse("q"), Some(ReplCommand::Quit));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse("s"), None);
        assert_eq!(parse("g two"), None);
        assert_eq!(parse("n 2"), None);
        assert_eq!(parse("zzz"), None);
    }
}
