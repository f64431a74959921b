use std::io::Write;

use chefmate_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::{
    commands::write_not_found,
    validators::{CommentRequest, validate_request},
};

pub async fn comment_on_recipe<S, W>(
    service: &mut S,
    id: Uuid,
    text: String,
    out: &mut W,
) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    let text = text.trim().to_string();
    validate_request(&CommentRequest { text: text.clone() })?;

    match service.comment_on_recipe(id, text).await? {
        Some(recipe) => {
            writeln!(
                out,
                "Comment added to {} ({} total)",
                recipe.recipe_name,
                recipe.comments.len()
            )?;
            Ok(())
        }
        None => write_not_found(out, id),
    }
}
