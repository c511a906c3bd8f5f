use clap::Parser;
use log::debug;
use recipe_finder::{DetailOutcome, FinderConfig, RecipeFinder, Session, ToggleOutcome};

mod cli;

use crate::cli::{render, repl, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Cli::parse();
    let config = FinderConfig::load()?;
    debug!("{:#?}", config);

    let mut builder = RecipeFinder::builder().config(config);
    if let Some(path) = args.store {
        builder = builder.storage_path(path);
    }
    if let Some(page_size) = args.page_size {
        builder = builder.page_size(page_size);
    }
    if let Some(url) = args.base_url {
        builder = builder.base_url(url);
    }
    let mut session = builder.build()?;

    match args.command.unwrap_or(Commands::Browse) {
        Commands::Featured { page } => {
            session.show_featured().await;
            print_page(&mut session, page);
        }
        Commands::Search { query, page } => {
            if session.search(&query).await.is_none() {
                return Err("Search query cannot be empty".into());
            }
            print_page(&mut session, page);
        }
        Commands::Category { tag, page } => {
            session.show_category(&tag).await;
            print_page(&mut session, page);
        }
        Commands::Show { id } => match session.open_detail(&id).await {
            DetailOutcome::Opened => {
                if let Some(detail) = session.detail_view() {
                    print!("{}", render::detail(&detail));
                }
            }
            DetailOutcome::NotFound => return Err(format!("No recipe with id {id}").into()),
            DetailOutcome::Failed | DetailOutcome::Stale => {
                return Err(format!("Could not fetch recipe {id}").into())
            }
        },
        Commands::Favorite { id } => {
            // Removing needs no lookup; adding snapshots the looked-up recipe
            if !session.favorites().is_favorite(&id) {
                session.open_detail(&id).await;
            }
            match session.toggle_favorite(&id)? {
                ToggleOutcome::Added => println!("Added {id} to favorites"),
                ToggleOutcome::Removed => println!("Removed {id} from favorites"),
                ToggleOutcome::Ignored => {
                    return Err(format!("Recipe {id} could not be found").into())
                }
            }
        }
        Commands::Favorites { page } => {
            session.show_favorites();
            print_page(&mut session, page);
        }
        Commands::Browse => repl::run(&mut session).await?,
    }

    Ok(())
}

fn print_page(session: &mut Session, page: usize) {
    session.go_to_page(page);
    print!("{}", render::page(&session.view()));
}
