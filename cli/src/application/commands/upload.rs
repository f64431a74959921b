use std::io::Write;

use chefmate_core::{
    domain::recipe::{ports::RecipeService, value_objects::UploadRecipeInput},
    infrastructure::media::read_image_as_data_uri,
};

use crate::{
    application::{
        render::render_summary,
        validators::{UploadRecipeRequest, filled_lines, validate_request},
    },
    args::UploadArgs,
};

pub async fn upload_recipe<S, W>(
    service: &mut S,
    args: UploadArgs,
    out: &mut W,
) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    validate_request(&UploadRecipeRequest {
        name: args.name.trim().to_string(),
        description: args.description.trim().to_string(),
        cuisine: args.cuisine.trim().to_string(),
        time: args.time.trim().to_string(),
        ingredient_lines: filled_lines(&args.ingredients),
        instruction_lines: filled_lines(&args.instructions),
    })?;

    let image_url = match &args.image {
        Some(path) => Some(read_image_as_data_uri(path).await?),
        None => None,
    };

    let recipe = service
        .upload_recipe(UploadRecipeInput {
            recipe_name: args.name,
            description: args.description,
            cuisine_type: args.cuisine,
            cooking_time: args.time,
            ingredients_text: args.ingredients,
            instructions_text: args.instructions,
            image_url,
        })
        .await?;

    writeln!(out, "Added {}", render_summary(&recipe))?;

    Ok(())
}
