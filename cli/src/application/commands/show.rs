use std::io::Write;

use chefmate_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::{commands::write_not_found, render::render_detail};

pub fn show_recipe<S, W>(service: &S, id: Uuid, json: bool, out: &mut W) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    let Some(recipe) = service.get_recipe(id) else {
        return write_not_found(out, id);
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(recipe.as_ref())?)?;
    } else {
        write!(out, "{}", render_detail(&recipe)?)?;
    }

    Ok(())
}
