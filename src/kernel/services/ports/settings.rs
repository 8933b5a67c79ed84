use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default = "default_show_keypad")]
    pub show_keypad: bool,
}

/// `{ "key": "ctrl+l", "command": "clear" }`; an empty `command` unbinds the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            border: Some("dark_gray".to_string()),
            header_fg: Some("cyan".to_string()),
            expression_fg: Some("white".to_string()),
            preview_fg: Some("dark_gray".to_string()),
            error_fg: Some("red".to_string()),
            button_fg: Some("white".to_string()),
            button_bg: None,
            operator_fg: Some("yellow".to_string()),
            action_fg: Some("light_red".to_string()),
            equals_bg: Some("#1F6FEB".to_string()),
            muted_fg: Some("dark_gray".to_string()),
        }
    }
}

fn default_show_keypad() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keybindings: Vec::new(),
            theme: ThemeSettings::default(),
            show_keypad: default_show_keypad(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
