use std::io::Write;

use chefmate_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::{
    commands::write_not_found,
    render::stars,
    validators::{RateRecipeRequest, validate_request},
};

pub async fn rate_recipe<S, W>(
    service: &mut S,
    id: Uuid,
    rating: u8,
    out: &mut W,
) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    validate_request(&RateRecipeRequest { rating })?;

    match service.rate_recipe(id, rating).await? {
        Some(recipe) => {
            writeln!(out, "{} {}", stars(recipe.rating), recipe.recipe_name)?;
            Ok(())
        }
        None => write_not_found(out, id),
    }
}
