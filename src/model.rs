use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FinderError;

/// TheMealDB exposes ingredient slots `strIngredient1` through `strIngredient20`.
pub const MAX_INGREDIENTS: usize = 20;

/// A single ingredient row. Rows with a blank name never make it into a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// A recipe as returned by the remote API.
///
/// Recipes are immutable snapshots: the stores clone them around but never
/// edit their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Build a recipe from one flat `meals[]` object of the API response.
    pub fn from_meal(meal: &Map<String, Value>) -> Result<Self, FinderError> {
        let id = text_field(meal, "idMeal")
            .ok_or_else(|| FinderError::ParseError("meal is missing idMeal".to_string()))?;

        let ingredients = (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let name = text_field(meal, &format!("strIngredient{i}"))?;
                let measure = text_field(meal, &format!("strMeasure{i}")).unwrap_or_default();
                Some(Ingredient { name, measure })
            })
            .collect();

        Ok(Recipe {
            id,
            name: text_field(meal, "strMeal").unwrap_or_default(),
            category: text_field(meal, "strCategory").unwrap_or_default(),
            area: text_field(meal, "strArea").unwrap_or_default(),
            thumbnail_url: text_field(meal, "strMealThumb").unwrap_or_default(),
            instructions: text_field(meal, "strInstructions").unwrap_or_default(),
            video_url: text_field(meal, "strYoutube"),
            ingredients,
        })
    }

    /// Short card blurb: the first 100 characters of the instructions.
    pub fn summary(&self) -> String {
        if self.instructions.is_empty() {
            return "No description available.".to_string();
        }
        let head: String = self.instructions.chars().take(100).collect();
        format!("{head}...")
    }

    /// Ingredient rows formatted as `name - measure`.
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|i| format!("{} - {}", i.name, i.measure))
            .collect()
    }
}

/// Envelope shared by `search.php`, `lookup.php` and the featured catalog file.
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<Map<String, Value>>>,
}

impl MealsResponse {
    /// `Ok(None)` when the API reported no match (`meals` null, absent or empty).
    pub fn into_recipes(self) -> Result<Option<Vec<Recipe>>, FinderError> {
        match self.meals {
            Some(meals) if !meals.is_empty() => meals
                .iter()
                .map(Recipe::from_meal)
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            _ => Ok(None),
        }
    }
}

// Blank strings and nulls both count as absent. Ids occasionally arrive as numbers.
fn text_field(meal: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match meal.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
