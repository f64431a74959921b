use std::path::PathBuf;

use chefmate_core::domain::{
    common::{ChefmateConfig, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, LLMConfig, StorageConfig},
    generation::value_objects::CookingTimeLimit,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "chefmate",
    version,
    about = "Turn the ingredients in your fridge into recipe ideas",
    long_about = "Generate recipes from your ingredients with Gemini, then rate, favorite and comment on them. Everything is stored locally."
)]
pub struct Args {
    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Gemini API key, only needed to generate recipes
    #[arg(long = "api-key", env = "API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "CHEFMATE_TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL, global = true)]
    pub text_model: String,

    #[arg(long, env = "CHEFMATE_IMAGE_MODEL", default_value = DEFAULT_IMAGE_MODEL, global = true)]
    pub image_model: String,

    /// Per-request timeout in seconds; no timeout when unset
    #[arg(long, env = "CHEFMATE_REQUEST_TIMEOUT_SECS", global = true)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// Directory holding the saved recipe collection
    #[arg(long, env = "CHEFMATE_DATA_DIR", default_value = ".chefmate", global = true)]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "warn", global = true)]
    pub filter: String,

    /// Emit logs as JSON lines
    #[arg(long = "log-json", env = "LOG_JSON", global = true)]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate recipes from the ingredients you have
    Generate(GenerateArgs),

    /// List saved recipes, newest first
    List {
        /// Only show favorited recipes
        #[arg(long)]
        favorites: bool,

        /// Print the recipes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe in full
    Show {
        id: Uuid,

        #[arg(long)]
        json: bool,
    },

    /// Rate a recipe from 1 to 5 stars
    Rate { id: Uuid, rating: u8 },

    /// Add or remove a recipe from your favorites
    Favorite { id: Uuid },

    /// Leave a comment on a recipe
    Comment { id: Uuid, text: String },

    /// Add a recipe of your own
    Upload(UploadArgs),
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GenerateArgs {
    /// Ingredients, separated by spaces or commas
    pub ingredients: Vec<String>,

    /// Maximum cooking time: any, 15m, 30m or 1h
    #[arg(long = "max-time", default_value = "any")]
    pub max_time: CookingTimeLimit,

    /// Preferred flavor, e.g. spicy, light, sweet and sour
    #[arg(long, default_value = "")]
    pub flavor: String,

    /// Preferred cooking equipment, e.g. oven, air fryer, rice cooker
    #[arg(long, default_value = "")]
    pub equipment: String,

    /// Serving size, e.g. "2 people" or "one plate"
    #[arg(long, default_value = "")]
    pub servings: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct UploadArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub cuisine: String,

    #[arg(long, default_value = "")]
    pub time: String,

    /// One ingredient per line
    #[arg(long, default_value = "")]
    pub ingredients: String,

    /// One step per line
    #[arg(long, default_value = "")]
    pub instructions: String,

    /// Photo of the dish, stored inline with the recipe
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate(_) => "generate",
            Command::List { .. } => "list",
            Command::Show { .. } => "show",
            Command::Rate { .. } => "rate",
            Command::Favorite { .. } => "favorite",
            Command::Comment { .. } => "comment",
            Command::Upload(_) => "upload",
        }
    }
}

impl Args {
    /// Generation is the only command that talks to the API.
    pub fn ensure_credentials(&self) -> Result<(), anyhow::Error> {
        let missing = self
            .llm
            .api_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty());

        if matches!(self.command, Command::Generate(_)) && missing {
            anyhow::bail!("API_KEY environment variable not set");
        }
        Ok(())
    }
}

impl From<Args> for ChefmateConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.api_key.unwrap_or_default(),
                text_model: args.llm.text_model,
                image_model: args.llm.image_model,
                request_timeout_secs: args.llm.request_timeout_secs,
            },
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_with_constraints() {
        let args = Args::try_parse_from([
            "chefmate",
            "--api-key",
            "k",
            "generate",
            "egg",
            "tomato",
            "--max-time",
            "30m",
            "--flavor",
            "spicy",
        ])
        .unwrap();

        let Command::Generate(generate) = &args.command else {
            panic!("expected generate command");
        };
        assert_eq!(generate.ingredients, vec!["egg", "tomato"]);
        assert_eq!(generate.max_time, CookingTimeLimit::Minutes30);
        assert_eq!(generate.flavor, "spicy");
        assert_eq!(generate.equipment, "");
        assert!(args.ensure_credentials().is_ok());
    }

    #[test]
    fn test_generate_without_key_is_rejected() {
        let args = Args::try_parse_from(["chefmate", "generate", "egg"]).unwrap();
        let mut args = args;
        args.llm.api_key = None;
        assert!(args.ensure_credentials().is_err());
    }

    #[test]
    fn test_other_commands_need_no_key() {
        let mut args = Args::try_parse_from(["chefmate", "list", "--favorites"]).unwrap();
        args.llm.api_key = None;
        assert!(args.ensure_credentials().is_ok());
    }

    #[test]
    fn test_invalid_max_time_is_a_parse_error() {
        let result = Args::try_parse_from(["chefmate", "generate", "egg", "--max-time", "2d"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from([
            "chefmate",
            "--data-dir",
            "/tmp/chefmate",
            "--api-key",
            "secret",
            "list",
        ])
        .unwrap();
        let config = ChefmateConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/chefmate"));
        assert_eq!(config.llm.request_timeout_secs, None);
    }

    #[test]
    fn test_command_names_match_subcommands() {
        let args = Args::try_parse_from(["chefmate", "list", "--favorites"]).unwrap();
        assert_eq!(args.command.name(), "list");

        let args = Args::try_parse_from(["chefmate", "upload", "--name", "Soy Eggs"]).unwrap();
        assert_eq!(args.command.name(), "upload");
    }
}
