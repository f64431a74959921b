use std::io::Write;

use chefmate_core::domain::recipe::ports::RecipeService;

use crate::args::Command;

pub mod comment;
pub mod favorite;
pub mod generate;
pub mod list;
pub mod rate;
pub mod show;
pub mod upload;

/// Dispatch one parsed command against the recipe service.
pub async fn run<S, W>(command: Command, service: &mut S, out: &mut W) -> Result<(), anyhow::Error>
where
    S: RecipeService,
    W: Write,
{
    match command {
        Command::Generate(args) => generate::generate_recipes(service, args, out).await,
        Command::List { favorites, json } => list::list_recipes(service, favorites, json, out),
        Command::Show { id, json } => show::show_recipe(service, id, json, out),
        Command::Rate { id, rating } => rate::rate_recipe(service, id, rating, out).await,
        Command::Favorite { id } => favorite::toggle_favorite(service, id, out).await,
        Command::Comment { id, text } => comment::comment_on_recipe(service, id, text, out).await,
        Command::Upload(args) => upload::upload_recipe(service, args, out).await,
    }
}

pub(crate) fn write_not_found<W: Write>(out: &mut W, id: uuid::Uuid) -> Result<(), anyhow::Error> {
    writeln!(out, "No recipe with id {}", id)?;
    Ok(())
}
