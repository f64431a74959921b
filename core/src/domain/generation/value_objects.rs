use std::fmt;
use std::str::FromStr;

use crate::domain::common::entities::app_errors::CoreError;

/// Ingredients entered by the user: trimmed, non-blank, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut ingredients: Vec<String> = Vec::new();
        for item in items {
            let trimmed = item.as_ref().trim();
            if trimmed.is_empty() || ingredients.iter().any(|i| i == trimmed) {
                continue;
            }
            ingredients.push(trimmed.to_string());
        }
        Self(ingredients)
    }

    /// Accepts entries that themselves contain comma-separated ingredients.
    pub fn parse<I, T>(inputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let split: Vec<String> = inputs
            .into_iter()
            .flat_map(|input| {
                input
                    .as_ref()
                    .split(',')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self::new(split)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CookingTimeLimit {
    #[default]
    Unlimited,
    Minutes15,
    Minutes30,
    Hour1,
}

impl CookingTimeLimit {
    /// Wording used inside the generation prompt; `None` when unconstrained.
    pub fn prompt_text(&self) -> Option<&'static str> {
        match self {
            CookingTimeLimit::Unlimited => None,
            CookingTimeLimit::Minutes15 => Some("15 minutes"),
            CookingTimeLimit::Minutes30 => Some("30 minutes"),
            CookingTimeLimit::Hour1 => Some("1 hour"),
        }
    }
}

impl FromStr for CookingTimeLimit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "any" | "unlimited" => Ok(CookingTimeLimit::Unlimited),
            "15m" | "15min" => Ok(CookingTimeLimit::Minutes15),
            "30m" | "30min" => Ok(CookingTimeLimit::Minutes30),
            "1h" | "60m" => Ok(CookingTimeLimit::Hour1),
            other => Err(CoreError::Invalid(format!(
                "unknown cooking time limit '{}', expected one of any, 15m, 30m, 1h",
                other
            ))),
        }
    }
}

impl fmt::Display for CookingTimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CookingTimeLimit::Unlimited => "any",
            CookingTimeLimit::Minutes15 => "15m",
            CookingTimeLimit::Minutes30 => "30m",
            CookingTimeLimit::Hour1 => "1h",
        };
        f.write_str(label)
    }
}

/// Optional preferences folded into the generation prompt. Blank text means "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationConstraints {
    pub max_cooking_time: CookingTimeLimit,
    pub flavor_preference: String,
    pub equipment: String,
    pub serving_size: String,
}

/// Parameters sent with every image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    pub number_of_images: u8,
    pub mime_type: String,
    pub aspect_ratio: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            number_of_images: 1,
            mime_type: "image/jpeg".to_string(),
            aspect_ratio: "4:3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data_base64: String,
}

impl GeneratedImage {
    pub fn into_data_uri(self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data_base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_list_trims_and_dedupes() {
        let list = IngredientList::new(["  egg ", "tomato", "egg", "", "   "]);
        assert_eq!(list.as_slice(), &["egg".to_string(), "tomato".to_string()]);
    }

    #[test]
    fn test_ingredient_list_parse_splits_commas() {
        let list = IngredientList::parse(["chicken, rice", "rice,scallion"]);
        assert_eq!(list.join("|"), "chicken|rice|scallion");
    }

    #[test]
    fn test_empty_ingredient_list() {
        assert!(IngredientList::new(Vec::<String>::new()).is_empty());
        assert!(IngredientList::parse([" , ,"]).is_empty());
    }

    #[test]
    fn test_cooking_time_limit_parse() {
        assert_eq!(
            "any".parse::<CookingTimeLimit>().unwrap(),
            CookingTimeLimit::Unlimited
        );
        assert_eq!(
            "30M".parse::<CookingTimeLimit>().unwrap(),
            CookingTimeLimit::Minutes30
        );
        assert_eq!(
            "1h".parse::<CookingTimeLimit>().unwrap(),
            CookingTimeLimit::Hour1
        );
        assert!("2d".parse::<CookingTimeLimit>().is_err());
    }

    #[test]
    fn test_unlimited_has_no_prompt_text() {
        assert_eq!(CookingTimeLimit::Unlimited.prompt_text(), None);
        assert_eq!(CookingTimeLimit::Minutes15.prompt_text(), Some("15 minutes"));
    }

    #[test]
    fn test_generated_image_data_uri() {
        let image = GeneratedImage {
            mime_type: "image/jpeg".to_string(),
            data_base64: "AAAA".to_string(),
        };
        assert_eq!(image.into_data_uri(), "data:image/jpeg;base64,AAAA");
    }
}
