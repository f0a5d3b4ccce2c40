use serde::{Deserialize, Serialize};

/// System prompt used until the user overrides it.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a technical specification writer. \
Help create clear, comprehensive, and well-structured specifications based on the \
provided information. Follow standard RFC format and include all necessary sections \
like Introduction, Specification, Implementation, Security Considerations, and References.";

/// Connection settings for the chat-completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_token: String,
    pub model: String,
    pub system_prompt: String,
}

impl Config {
    /// Generation is only allowed once both the token and a model are set.
    pub fn is_configured(&self) -> bool {
        !self.api_token.is_empty() && !self.model.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            model: String::new(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = Config::default();
        assert!(!config.is_configured());
        assert!(!config.system_prompt.is_empty());
    }

    #[test]
    fn configured_requires_token_and_model() {
        let mut config = Config::default();
        config.api_token = "sk-test".into();
        assert!(!config.is_configured());

        config.model = "llama-3-70b".into();
        assert!(config.is_configured());

        config.api_token.clear();
        assert!(!config.is_configured());
    }
}
