use skillet_core::{
    AppViewModel, DetailPane, RecipeCardView, RecipeDetail, Screen, ViewSelection,
    SEARCH_FAILED_MESSAGE,
};

/// Cards show at most this many ingredient names before the overflow marker.
const INGREDIENT_PREVIEW_LIMIT: usize = 4;

pub(crate) fn print_banner(usage: &str) {
    println!("Recipe Finder — discover delicious recipes for any occasion");
    println!("{usage}");
}

pub(crate) fn render(view: &AppViewModel) {
    for line in render_lines(view) {
        println!("{line}");
    }
}

fn render_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![String::new(), tabs_line(view)];

    match &view.screen {
        Screen::Welcome => {
            lines.push("Welcome to Recipe Finder!".to_string());
            lines.push("Search for recipes by name or ingredients.".to_string());
            lines.push(
                "Try searching for: pasta, chicken, vegetarian, or chocolate".to_string(),
            );
        }
        Screen::Loading => lines.push("Searching for recipes...".to_string()),
        Screen::SearchFailed => lines.push(format!("Error: {SEARCH_FAILED_MESSAGE}")),
        Screen::NoResults => {
            lines.push("No recipes found. Try a different search!".to_string())
        }
        Screen::NoFavorites => lines.push(
            "No favorites yet! Start adding some recipes to your favorites.".to_string(),
        ),
        Screen::Results(cards) | Screen::Favorites(cards) => {
            for card in cards {
                lines.extend(card_lines(card));
            }
        }
    }

    lines.extend(detail_lines(&view.detail));
    lines
}

fn tabs_line(view: &AppViewModel) -> String {
    match view.view {
        ViewSelection::Results => {
            format!("[All Recipes]  My Favorites ({})", view.favorite_count)
        }
        ViewSelection::Favorites => {
            format!(" All Recipes  [My Favorites ({})]", view.favorite_count)
        }
    }
}

fn card_lines(card: &RecipeCardView) -> Vec<String> {
    let marker = if card.favorite { "*" } else { " " };
    vec![
        format!(
            "{} #{} {} — {}, {} servings",
            marker, card.id, card.title, card.cook_time, card.servings
        ),
        format!("    {}", ingredient_preview(&card.ingredients)),
    ]
}

fn ingredient_preview(ingredients: &[String]) -> String {
    if ingredients.is_empty() {
        return "No ingredients listed".to_string();
    }
    let shown: Vec<_> = ingredients
        .iter()
        .take(INGREDIENT_PREVIEW_LIMIT)
        .map(String::as_str)
        .collect();
    let mut preview = shown.join(", ");
    if ingredients.len() > INGREDIENT_PREVIEW_LIMIT {
        preview.push_str(&format!(
            " +{} more",
            ingredients.len() - INGREDIENT_PREVIEW_LIMIT
        ));
    }
    preview
}

fn detail_lines(pane: &DetailPane) -> Vec<String> {
    match pane {
        DetailPane::Closed => Vec::new(),
        DetailPane::Loading => vec!["Loading recipe details...".to_string()],
        DetailPane::Failed => vec!["Failed to load recipe details".to_string()],
        DetailPane::Ready(detail) => ready_detail_lines(detail),
    }
}

fn ready_detail_lines(detail: &RecipeDetail) -> Vec<String> {
    let mut lines = vec![format!("=== {} ===", detail.title)];
    lines.push(detail_meta_line(detail));

    if let Some(summary) = &detail.summary {
        lines.push(summary.clone());
    }

    lines.push("Ingredients:".to_string());
    if detail.ingredients.is_empty() {
        lines.push("  (none listed)".to_string());
    }
    for ingredient in &detail.ingredients {
        if ingredient.unit.is_empty() {
            lines.push(format!("  - {} {}", ingredient.amount, ingredient.name));
        } else {
            lines.push(format!(
                "  - {} {} {}",
                ingredient.amount, ingredient.unit, ingredient.name
            ));
        }
    }

    if let Some(instructions) = &detail.instructions {
        lines.push("Instructions:".to_string());
        lines.push(instructions.clone());
    }
    if let Some(source_url) = &detail.source_url {
        lines.push(format!("View original recipe: {source_url}"));
    }
    lines
}

fn detail_meta_line(detail: &RecipeDetail) -> String {
    let ready = match detail.ready_in_minutes {
        Some(minutes) => format!("{minutes} mins"),
        None => "N/A".to_string(),
    };
    let mut meta = format!("{ready} | {} servings", detail.servings);
    if let Some(health_score) = detail.health_score {
        meta.push_str(&format!(" | Health Score: {health_score}/100"));
    }
    meta
}
