// Console command parsing and hint text
use serde::Serialize;

pub const INITIAL_HINT: &str = "Type help to see available commands.";
pub const DEFAULT_PROJECT_NAME: &str = "Unnamed project";

const LAUNCH_KEYWORD: &str = "launch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Rules,
    Launch { project: String },
    Clear,
    Unknown,
}

impl Command {
    /// Classifies trimmed console input. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let lowered = raw.to_lowercase();

        let command = match lowered.as_str() {
            "help" => Command::Help,
            "rules" => Command::Rules,
            "clear" => Command::Clear,
            _ if Self::is_launch(raw) => {
                let project = raw[LAUNCH_KEYWORD.len()..].trim();
                let project = if project.is_empty() {
                    DEFAULT_PROJECT_NAME
                } else {
                    project
                };
                Command::Launch {
                    project: project.to_string(),
                }
            }
            _ => Command::Unknown,
        };

        Some(command)
    }

    fn is_launch(raw: &str) -> bool {
        raw.get(..LAUNCH_KEYWORD.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(LAUNCH_KEYWORD))
    }

    pub fn hint(&self) -> String {
        match self {
            Command::Help => "commands: rules · launch <name> · clear".to_string(),
            Command::Rules => {
                "Rule set: no low-effort memecoins. Only neural-driven IDO pipelines.".to_string()
            }
            Command::Launch { project } => {
                format!("Bootstrapping \"{}\" in simulated mode…", project)
            }
            Command::Clear => "Console cleared. Awaiting next instruction.".to_string(),
            Command::Unknown => "Unknown command. Type help for available commands.".to_string(),
        }
    }
}

/// Console line that echoes submitted input.
pub fn echo_message(raw: &str) -> String {
    format!("CLIENT › {}", raw)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandState {
    pub input: String,
    pub hint: String,
}

impl Default for CommandState {
    fn default() -> Self {
        Self {
            input: String::new(),
            hint: INITIAL_HINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Some(Command::Help));
        assert_eq!(Command::parse("  Rules "), Some(Command::Rules));
        assert_eq!(Command::parse("cLeAr"), Some(Command::Clear));
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t"), None);
    }

    #[test]
    fn test_launch_keeps_original_case_of_name() {
        assert_eq!(
            Command::parse("LAUNCH Orbit Nine"),
            Some(Command::Launch {
                project: "Orbit Nine".to_string()
            })
        );
    }

    #[test]
    fn test_launch_without_name_uses_default() {
        let command = Command::parse("launch   ").unwrap();
        assert!(command.hint().contains(DEFAULT_PROJECT_NAME));
    }

    #[test]
    fn test_launch_prefix_matches_glued_name() {
        // Prefix match, so the remainder is taken verbatim
        assert_eq!(
            Command::parse("launchpad"),
            Some(Command::Launch {
                project: "pad".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_command_hint() {
        let command = Command::parse("deploy now").unwrap();
        assert_eq!(command, Command::Unknown);
        assert!(command.hint().starts_with("Unknown command"));
    }

    #[test]
    fn test_help_only_matches_exactly() {
        assert_eq!(Command::parse("help me"), Some(Command::Unknown));
    }
}
