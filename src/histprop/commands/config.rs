use crate::commands::{CmdMessage, CmdResult};
use crate::config::HistPropConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
}

pub fn run(config: &HistPropConfig, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_returns_config() {
        let config = HistPropConfig::default();
        let result = run(&config, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(config));
    }

    #[test]
    fn show_key() {
        let config = HistPropConfig {
            line_width: 72,
            ..Default::default()
        };
        let result = run(&config, ConfigAction::ShowKey("line_width".into())).unwrap();
        assert_eq!(result.messages[0].content, "72");
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let result = run(&HistPropConfig::default(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
