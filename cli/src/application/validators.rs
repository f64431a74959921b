use validator::Validate;

#[derive(Debug, Validate)]
pub struct GenerateRecipesRequest {
    #[validate(length(min = 1, message = "Please add at least one ingredient"))]
    pub ingredients: Vec<String>,
    #[validate(length(max = 200, message = "flavor must be at most 200 characters"))]
    pub flavor: String,
    #[validate(length(max = 200, message = "equipment must be at most 200 characters"))]
    pub equipment: String,
    #[validate(length(max = 100, message = "servings must be at most 100 characters"))]
    pub servings: String,
}

#[derive(Debug, Validate)]
pub struct RateRecipeRequest {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,
}

#[derive(Debug, Validate)]
pub struct CommentRequest {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "comment must be between 1 and 2000 characters"
    ))]
    pub text: String,
}

#[derive(Debug, Validate)]
pub struct UploadRecipeRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "name must be between 1 and 200 characters"
    ))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 2000,
        message = "description must be between 1 and 2000 characters"
    ))]
    pub description: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "cuisine must be between 1 and 100 characters"
    ))]
    pub cuisine: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "time must be between 1 and 100 characters"
    ))]
    pub time: String,
    #[validate(length(min = 1, message = "ingredients need at least one non-blank line"))]
    pub ingredient_lines: Vec<String>,
    #[validate(length(min = 1, message = "instructions need at least one non-blank line"))]
    pub instruction_lines: Vec<String>,
}

/// Non-blank, trimmed lines of a multi-line form field
pub fn filled_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate and flatten every field error into one readable line
pub fn validate_request<T: Validate>(request: &T) -> Result<(), anyhow::Error> {
    request.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        anyhow::Error::new(errors).context(messages.join("; "))
    })
}
