//! Built-in model catalog
//!
//! The catalog is static: it is assembled at startup and never mutated at
//! runtime. Selection state elsewhere in the app stores only a model id and
//! resolves it through [`find_model`], which guarantees a valid entry by
//! falling back to the first catalog member.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub icon: char,
}

impl AiModel {
    fn new(
        id: &str,
        name: &str,
        provider: &str,
        description: &str,
        capabilities: &[&str],
        icon: char,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            provider: provider.to_string(),
            description: description.to_string(),
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            icon,
        }
    }
}

/// Load the built-in model catalog. The first entry doubles as the fallback
/// for unresolvable selections.
pub fn load_builtin_models() -> Vec<AiModel> {
    vec![
        AiModel::new(
            "gpt-4",
            "GPT-4",
            "OpenAI",
            "Most capable model for complex tasks",
            &["Text", "Code", "Analysis"],
            'O',
        ),
        AiModel::new(
            "gpt-4-turbo",
            "GPT-4 Turbo",
            "OpenAI",
            "Faster responses with extended context",
            &["Text", "Code", "Vision"],
            'O',
        ),
        AiModel::new(
            "claude-3-opus",
            "Claude 3 Opus",
            "Anthropic",
            "Powerful model for nuanced tasks",
            &["Text", "Code", "Analysis"],
            'A',
        ),
        AiModel::new(
            "claude-3-sonnet",
            "Claude 3 Sonnet",
            "Anthropic",
            "Balanced performance and speed",
            &["Text", "Code"],
            'A',
        ),
        AiModel::new(
            "gemini-pro",
            "Gemini Pro",
            "Google",
            "Multimodal AI with broad capabilities",
            &["Text", "Code", "Vision", "Audio"],
            'G',
        ),
        AiModel::new(
            "llama-3",
            "Llama 3",
            "Meta",
            "Open-source powerhouse",
            &["Text", "Code"],
            'M',
        ),
    ]
}

/// Resolve a model id against the catalog. Unknown ids resolve to the first
/// catalog entry so a selection always points at something renderable.
pub fn find_model(id: &str) -> AiModel {
    let catalog = load_builtin_models();
    catalog
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .unwrap_or_else(|| catalog[0].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_leads_with_gpt_4() {
        let models = load_builtin_models();
        assert_eq!(models[0].id, "gpt-4");
        assert_eq!(models.len(), 6);
    }

    #[test]
    fn known_ids_resolve_to_their_entry() {
        let model = find_model("gemini-pro");
        assert_eq!(model.name, "Gemini Pro");
        assert_eq!(model.provider, "Google");
    }

    #[test]
    fn unknown_ids_fall_back_to_first_entry() {
        let model = find_model("gpt-99-ultra");
        assert_eq!(model.id, "gpt-4");
    }
}
