use serde_json::json;

/// Returns the JSON schema the LLM must follow when proposing recipes
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "recipeName": {
                    "type": "string",
                    "description": "The name of the recipe."
                },
                "description": {
                    "type": "string",
                    "description": "A short, appetizing description of the dish in 2-3 sentences."
                },
                "cuisineType": {
                    "type": "string",
                    "description": "The cuisine, e.g. Italian, Mexican, Chinese."
                },
                "cookingTime": {
                    "type": "string",
                    "description": "Estimated total time to make the dish, e.g. 'about 30 minutes'."
                },
                "ingredients": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Every ingredient the recipe needs, with quantities."
                },
                "instructions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Step-by-step cooking instructions."
                }
            },
            "required": [
                "recipeName", "description", "cuisineType",
                "cookingTime", "ingredients", "instructions"
            ]
        }
    })
}
