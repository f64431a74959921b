use std::io::Write;

use chefmate_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::RecipeFilter,
};

use crate::application::render::{EMPTY_FAVORITES_MESSAGE, EMPTY_WALL_MESSAGE, render_summary};

pub fn list_recipes<S, W>(
    service: &S,
    favorites_only: bool,
    json: bool,
    out: &mut W,
) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    let recipes = service.list_recipes(RecipeFilter { favorites_only });

    if json {
        let records: Vec<&Recipe> = recipes.iter().map(|r| r.as_ref()).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }

    if recipes.is_empty() {
        let message = if favorites_only {
            EMPTY_FAVORITES_MESSAGE
        } else {
            EMPTY_WALL_MESSAGE
        };
        writeln!(out, "{}", message)?;
        return Ok(());
    }

    for recipe in &recipes {
        writeln!(out, "{}", render_summary(recipe))?;
    }

    Ok(())
}
