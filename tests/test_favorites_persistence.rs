use mockito::Matcher;
use recipe_finder::{FileStore, LoadOutcome, RecipeFinder, ToggleOutcome, ViewState};
use tempfile::tempdir;

const PIE: &str = r#"{"meals":[{
    "idMeal": "52874",
    "strMeal": "Beef and Mustard Pie",
    "strCategory": "Beef",
    "strArea": "British",
    "strInstructions": "Preheat the oven to 150C/300F/Gas 2.",
    "strIngredient1": "Beef",
    "strMeasure1": "1kg"
}]}"#;

#[tokio::test]
async fn test_favorites_survive_a_new_session() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("store.json");

    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".to_string(), "pie".to_string()))
        .with_status(200)
        .with_body(PIE)
        .create_async()
        .await;

    {
        let mut session = RecipeFinder::builder()
            .base_url(server.url())
            .storage_path(&store_path)
            .build()
            .unwrap();
        assert_eq!(session.search("pie").await, Some(LoadOutcome::Applied(1)));
        assert_eq!(
            session.toggle_favorite("52874").unwrap(),
            ToggleOutcome::Added
        );
    }

    // A new session reads the snapshot without touching the network
    let mut session = RecipeFinder::builder()
        .base_url("http://127.0.0.1:9")
        .storage_path(&store_path)
        .build()
        .unwrap();
    assert!(session.favorites().is_favorite("52874"));

    session.show_favorites();
    let view = session.view();
    assert_eq!(view.state, ViewState::Results);
    assert_eq!(view.cards[0].name, "Beef and Mustard Pie");
    assert!(view.cards[0].favorite);

    // Removing from the favorites view drops the card and the persisted entry
    assert_eq!(
        session.toggle_favorite("52874").unwrap(),
        ToggleOutcome::Removed
    );
    assert_eq!(session.state(), ViewState::NotFound);
    assert!(session.view().cards.is_empty());

    let reopened = RecipeFinder::builder()
        .storage(Box::new(FileStore::open(&store_path).unwrap()))
        .build()
        .unwrap();
    assert!(reopened.favorites().is_empty());
}

#[tokio::test]
async fn test_missing_store_file_is_empty_favorites() {
    let dir = tempdir().unwrap();
    let session = RecipeFinder::builder()
        .storage_path(dir.path().join("never-written.json"))
        .build()
        .unwrap();
    assert!(session.favorites().all().is_empty());
    assert!(!dir.path().join("never-written.json").exists());
}
