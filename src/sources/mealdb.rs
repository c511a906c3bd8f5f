use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::RecipeSource;
use crate::error::FinderError;
use crate::model::{MealsResponse, Recipe};

/// Client for the TheMealDB JSON API.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FinderError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_meals(
        &self,
        endpoint: &str,
        param: (&str, &str),
    ) -> Result<Option<Vec<Recipe>>, FinderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {}={}", url, param.0, param.1);

        let response = self
            .client
            .get(&url)
            .query(&[param])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let meals: MealsResponse = serde_json::from_str(&body)
            .map_err(|e| FinderError::ParseError(format!("{endpoint}: {e}")))?;
        meals.into_recipes()
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, FinderError> {
        let recipes = self
            .get_meals("search.php", ("s", query))
            .await?
            .ok_or_else(|| FinderError::NotFound(query.to_string()))?;
        debug!("Search {:?} returned {} recipes", query, recipes.len());
        Ok(recipes)
    }

    async fn lookup(&self, id: &str) -> Result<Recipe, FinderError> {
        self.get_meals("lookup.php", ("i", id))
            .await?
            .and_then(|recipes| recipes.into_iter().next())
            .ok_or_else(|| FinderError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = MealDbClient::new("http://localhost:1234/api/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/api");
        assert_eq!(client.source_name(), "themealdb");
    }

    #[tokio::test]
    async fn test_search_parses_meals() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(mockito::Matcher::UrlEncoded(
                "s".to_string(),
                "chicken curry".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals":[
                    {"idMeal":"52795","strMeal":"Chicken Handi",
                     "strCategory":"Chicken","strArea":"Indian"},
                    {"idMeal":"52850","strMeal":"Chicken Couscous",
                     "strCategory":"Chicken","strArea":"Moroccan"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), None).unwrap();
        let recipes = client.search("chicken curry").await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "52795");
        assert_eq!(recipes[1].area, "Moroccan");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/lookup.php")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), None).unwrap();
        let err = client.lookup("1").await.unwrap_err();
        assert!(matches!(err, FinderError::FetchError(_)));
    }

    #[tokio::test]
    async fn test_invalid_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/search.php")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), None).unwrap();
        let err = client.search("egg").await.unwrap_err();
        assert!(matches!(err, FinderError::ParseError(_)));
    }
}
