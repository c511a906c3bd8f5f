use recipe_finder::{DetailView, PageView, Pagination, ViewState};

const NOT_FOUND_TEXT: &str = "No recipes found. Try another search.";

pub fn page(view: &PageView) -> String {
    let mut out = String::new();
    if !view.title.is_empty() {
        out.push_str(&format!("== {} ==\n", view.title));
    }

    match view.state {
        ViewState::Idle | ViewState::Failed => {}
        ViewState::Loading => out.push_str("Loading...\n"),
        ViewState::NotFound => {
            out.push_str(NOT_FOUND_TEXT);
            out.push('\n');
        }
        ViewState::Results => {
            for card in &view.cards {
                let star = if card.favorite { "*" } else { " " };
                out.push_str(&format!(
                    "{} [{}] {} ({}, {} Origin)\n      {}\n",
                    star, card.id, card.name, card.category, card.area, card.summary
                ));
            }
        }
    }

    if let Some(pagination) = &view.pagination {
        if pagination.visible() {
            out.push_str(&pagination_bar(pagination));
            out.push('\n');
        }
    }
    out
}

pub fn pagination_bar(pagination: &Pagination) -> String {
    let prev = if pagination.prev_disabled { "   " } else { "<<" };
    let next = if pagination.next_disabled { "   " } else { ">>" };
    let numbers: Vec<String> = pagination
        .buttons
        .iter()
        .map(|b| {
            if b.active {
                format!("[{}]", b.number)
            } else {
                b.number.to_string()
            }
        })
        .collect();
    format!("{} {} {}", prev, numbers.join(" "), next)
}

pub fn detail(view: &DetailView) -> String {
    let recipe = &view.recipe;
    let mut out = String::new();
    out.push_str(&format!("{}\n", recipe.name));
    out.push_str(&format!("{} | {}\n", recipe.category, recipe.area));
    if !recipe.thumbnail_url.is_empty() {
        out.push_str(&format!("{}\n", recipe.thumbnail_url));
    }
    out.push_str(if view.favorite {
        "[*] In favorites\n"
    } else {
        "[ ] Not in favorites\n"
    });

    out.push_str("\nIngredients:\n");
    for line in &view.ingredient_lines {
        out.push_str(&format!("  - {}\n", line));
    }

    out.push_str("\nInstructions:\n");
    out.push_str(&recipe.instructions);
    out.push('\n');

    if let Some(video) = &recipe.video_url {
        out.push_str(&format!("\nWatch video tutorial: {}\n", video));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_finder::{PageButton, Recipe, RecipeCard, ViewMode};

    fn pagination(current: usize, count: usize) -> Pagination {
        Pagination {
            current_page: current,
            page_count: count,
            buttons: (1..=count)
                .map(|number| PageButton {
                    number,
                    active: number == current,
                })
                .collect(),
            prev_disabled: current == 1,
            next_disabled: current == count,
        }
    }

    #[test]
    fn test_pagination_bar_marks_active_page() {
        assert_eq!(pagination_bar(&pagination(2, 3)), "<< 1 [2] 3 >>");
        assert_eq!(pagination_bar(&pagination(1, 2)), "    [1] 2 >>");
    }

    #[test]
    fn test_page_shows_favorite_marker() {
        let view = PageView {
            title: "Results for \"pie\"...".to_string(),
            mode: ViewMode::Browse,
            state: ViewState::Results,
            active_category: None,
            cards: vec![RecipeCard {
                id: "52874".to_string(),
                name: "Beef and Mustard Pie".to_string(),
                category: "Beef".to_string(),
                area: "British".to_string(),
                thumbnail_url: String::new(),
                summary: "Preheat the oven...".to_string(),
                favorite: true,
            }],
            pagination: Some(pagination(1, 1)),
        };

        let text = page(&view);
        assert!(text.contains("* [52874] Beef and Mustard Pie (Beef, British Origin)"));
        assert!(!text.contains("[1]"));
    }

    #[test]
    fn test_not_found_message() {
        let view = PageView {
            title: "Results for \"zzznomatch\"...".to_string(),
            mode: ViewMode::Browse,
            state: ViewState::NotFound,
            active_category: None,
            cards: Vec::new(),
            pagination: None,
        };
        assert!(page(&view).contains(NOT_FOUND_TEXT));
    }

    #[test]
    fn test_detail_without_video() {
        let recipe = Recipe {
            id: "1".to_string(),
            name: "Pancakes".to_string(),
            category: "Dessert".to_string(),
            area: "American".to_string(),
            thumbnail_url: String::new(),
            instructions: "Whisk and fry.".to_string(),
            video_url: None,
            ingredients: Vec::new(),
        };
        let view = DetailView {
            ingredient_lines: vec!["Flour - 100g".to_string()],
            recipe,
            favorite: false,
        };

        let text = detail(&view);
        assert!(text.contains("  - Flour - 100g"));
        assert!(text.contains("[ ] Not in favorites"));
        assert!(!text.contains("video"));
    }
}
