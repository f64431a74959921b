use std::io::Write;

use chefmate_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::commands::write_not_found;

pub async fn toggle_favorite<S, W>(service: &mut S, id: Uuid, out: &mut W) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    match service.toggle_favorite(id).await? {
        Some(recipe) if recipe.is_favorited => {
            writeln!(out, "♥ Saved {} to your favorites", recipe.recipe_name)?;
            Ok(())
        }
        Some(recipe) => {
            writeln!(out, "Removed {} from your favorites", recipe.recipe_name)?;
            Ok(())
        }
        None => write_not_found(out, id),
    }
}
