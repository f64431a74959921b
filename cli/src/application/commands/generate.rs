use std::io::Write;

use chefmate_core::domain::{
    generation::value_objects::{GenerationConstraints, IngredientList},
    recipe::{ports::RecipeService, value_objects::GenerateRecipesInput},
};

use crate::{
    application::{
        render::render_summary,
        validators::{GenerateRecipesRequest, validate_request},
    },
    args::GenerateArgs,
};

pub async fn generate_recipes<S, W>(
    service: &mut S,
    args: GenerateArgs,
    out: &mut W,
) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    let ingredients = IngredientList::parse(&args.ingredients);

    validate_request(&GenerateRecipesRequest {
        ingredients: ingredients.as_slice().to_vec(),
        flavor: args.flavor.clone(),
        equipment: args.equipment.clone(),
        servings: args.servings.clone(),
    })?;

    writeln!(out, "Cooking up ideas with: {}", ingredients.join(", "))?;
    out.flush()?;

    let recipes = service
        .generate_recipes(GenerateRecipesInput {
            ingredients,
            constraints: GenerationConstraints {
                max_cooking_time: args.max_time,
                flavor_preference: args.flavor,
                equipment: args.equipment,
                serving_size: args.servings,
            },
        })
        .await?;

    if recipes.is_empty() {
        writeln!(out, "The AI did not come up with any recipes this time.")?;
        return Ok(());
    }

    writeln!(out, "Added {} recipes:", recipes.len())?;
    for recipe in &recipes {
        writeln!(out, "{}", render_summary(recipe))?;
    }

    Ok(())
}
