use std::fmt::{self, Write as _};

use chefmate_core::domain::recipe::entities::Recipe;
use chrono::Local;

const MAX_STARS: u8 = 5;

pub const EMPTY_WALL_MESSAGE: &str =
    "Your recipe wall is empty. Try generating some AI recipes to fill it up!";
pub const EMPTY_FAVORITES_MESSAGE: &str =
    "Your favorites are empty. Use `chefmate favorite <id>` on a recipe you like!";

pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS) as usize;
    let empty = MAX_STARS as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// One line per recipe for list views
pub fn render_summary(recipe: &Recipe) -> String {
    let favorite = if recipe.is_favorited { "♥" } else { " " };
    format!(
        "{} {} {} {} ({}, {}) [{}]",
        recipe.id,
        stars(recipe.rating),
        favorite,
        recipe.recipe_name,
        recipe.cuisine_type,
        recipe.cooking_time,
        recipe.source.as_str()
    )
}

pub fn render_detail(recipe: &Recipe) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", recipe.recipe_name)?;
    writeln!(
        out,
        "{} | {} | {} | source: {}{}",
        recipe.cuisine_type,
        recipe.cooking_time,
        stars(recipe.rating),
        recipe.source.as_str(),
        if recipe.is_favorited { " | ♥ favorite" } else { "" }
    )?;
    writeln!(out, "id: {}", recipe.id)?;
    if let Some(image_url) = &recipe.image_url {
        writeln!(out, "image: inline, {} bytes encoded", image_url.len())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", recipe.description)?;

    writeln!(out)?;
    writeln!(out, "Ingredients:")?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "  - {}", ingredient)?;
    }

    writeln!(out)?;
    writeln!(out, "Instructions:")?;
    for (index, step) in recipe.instructions.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, step)?;
    }

    writeln!(out)?;
    writeln!(out, "Comments ({}):", recipe.comments.len())?;
    if recipe.comments.is_empty() {
        writeln!(out, "  No comments yet.")?;
    }
    for comment in &recipe.comments {
        writeln!(
            out,
            "  [{}] {}: {}",
            comment
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M"),
            comment.author,
            comment.text
        )?;
    }

    Ok(out)
}
