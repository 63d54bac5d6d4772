//! The fixed command set of the portfolio terminal.
//!
//! Every operation a visitor can invoke is a variant of [`CommandKind`].
//! The set is closed and static for the process lifetime; per-command
//! metadata (name, invocation form, one-line description) drives both the
//! `help` output and tab completion.

/// A command recognized by the portfolio terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    About,
    Projects,
    Project,
    Skills,
    Contact,
    Cv,
    Clear,
}

impl CommandKind {
    /// Every command, in the order used by `help` and tab completion.
    ///
    /// `Projects` precedes `Project`, so a prefix of `project` always
    /// completes to `projects` first.
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Help,
        CommandKind::About,
        CommandKind::Projects,
        CommandKind::Project,
        CommandKind::Skills,
        CommandKind::Contact,
        CommandKind::Cv,
        CommandKind::Clear,
    ];

    /// The lowercase command name typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::About => "about",
            CommandKind::Projects => "projects",
            CommandKind::Project => "project",
            CommandKind::Skills => "skills",
            CommandKind::Contact => "contact",
            CommandKind::Cv => "cv",
            CommandKind::Clear => "clear",
        }
    }

    /// Invocation form shown by `help`, including argument placeholders.
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::About => "about",
            CommandKind::Projects => "projects",
            CommandKind::Project => "project <id>",
            CommandKind::Skills => "skills",
            CommandKind::Contact => "contact",
            CommandKind::Cv => "cv [-o|-d]",
            CommandKind::Clear => "clear",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            CommandKind::Help => "show this help",
            CommandKind::About => "who am I",
            CommandKind::Projects => "list projects",
            CommandKind::Project => "show project details",
            CommandKind::Skills => "technical skills",
            CommandKind::Contact => "contact info",
            CommandKind::Cv => "open or download the CV",
            CommandKind::Clear => "clear terminal",
        }
    }

    /// Resolve a command name case-insensitively. Exact matches only; prefix
    /// matching exists solely in tab completion.
    pub fn from_name(name: &str) -> Option<CommandKind> {
        CommandKind::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_exact() {
        assert_eq!(CommandKind::from_name("help"), Some(CommandKind::Help));
        assert_eq!(CommandKind::from_name("clear"), Some(CommandKind::Clear));
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(CommandKind::from_name("HELP"), Some(CommandKind::Help));
        assert_eq!(CommandKind::from_name("Cv"), Some(CommandKind::Cv));
    }

    #[test]
    fn from_name_rejects_prefixes_and_unknowns() {
        assert_eq!(CommandKind::from_name("hel"), None);
        assert_eq!(CommandKind::from_name("projectss"), None);
        assert_eq!(CommandKind::from_name(""), None);
    }

    #[test]
    fn enumeration_order_puts_projects_before_project() {
        let names: Vec<&str> = CommandKind::ALL.iter().map(|c| c.name()).collect();
        let projects = names.iter().position(|n| *n == "projects").unwrap();
        let project = names.iter().position(|n| *n == "project").unwrap();
        assert!(projects < project);
    }

    #[test]
    fn clear_description_matches_help_line() {
        assert_eq!(CommandKind::Clear.description(), "clear terminal");
    }
}
