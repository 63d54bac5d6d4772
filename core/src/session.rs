//! The command dispatcher -- an interactive session over scrollback,
//! history, and static content.
//!
//! A submitted line runs through fixed stages: trim, reject-if-blank, echo,
//! record history, tokenize, resolve, execute. Every failure is a normal
//! reported outcome rendered as an output line; nothing here can fail the
//! session. Handlers only append lines (`clear` empties the buffer); the
//! two commands that touch the outside world return typed [`Effect`]
//! requests for the front end to execute.

use std::path::PathBuf;

use crate::command::CommandKind;
use crate::content::Portfolio;
use crate::history::History;
use crate::line::{Span, SpanStyle};
use crate::scrollback::Scrollback;


// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect request produced by dispatch.
///
/// The session performs no I/O of its own; the front end executes these
/// after `submit` returns, best-effort.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the string to the system clipboard.
    CopyToClipboard(String),
    /// Open the document with the system viewer.
    OpenDocument(PathBuf),
    /// Save a copy of the document under the user's download directory.
    DownloadDocument { path: PathBuf, file_name: String },
}


// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// An interactive portfolio session.
///
/// Owns the scrollback buffer, the input history, and the static content.
/// Single-threaded by construction: one submission is fully handled before
/// the next, so output order always matches submission order.
pub struct Session {
    scrollback: Scrollback,
    history: History,
    portfolio: Portfolio,
}

impl Session {
    /// Create a session and print the welcome banner.
    pub fn new(portfolio: Portfolio) -> Self {
        let mut scrollback = Scrollback::new();
        scrollback.push(vec![Span::styled(&portfolio.banner, SpanStyle::Dim)]);
        Session {
            scrollback,
            history: History::new(),
            portfolio,
        }
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Submit one raw input line.
    ///
    /// Blank input is ignored entirely: no echo, no history record, no
    /// output. Unknown commands are reported as a warning line; dispatch
    /// never fails.
    pub fn submit(&mut self, raw: &str) -> Vec<Effect> {
        let cmd = raw.trim();
        if cmd.is_empty() {
            return Vec::new();
        }

        self.echo(cmd);
        self.history.record(cmd);

        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = parts.collect();

        tracing::debug!(command = %name, "dispatch");

        match CommandKind::from_name(&name) {
            Some(CommandKind::Help) => self.cmd_help(),
            Some(CommandKind::About) => self.cmd_about(),
            Some(CommandKind::Projects) => self.cmd_projects(),
            Some(CommandKind::Project) => self.cmd_project(&args),
            Some(CommandKind::Skills) => self.cmd_skills(),
            Some(CommandKind::Contact) => self.cmd_contact(),
            Some(CommandKind::Cv) => return self.cmd_cv(&args),
            Some(CommandKind::Clear) => self.scrollback.clear(),
            None => self.unknown(&name),
        }
        Vec::new()
    }

    /// Copy the contact email to the clipboard and confirm.
    ///
    /// This is the activation of the contact block's copy element, bound to
    /// a key by the front end.
    pub fn copy_email(&mut self) -> Vec<Effect> {
        let email = self.portfolio.contact.email.clone();
        self.scrollback
            .push(vec![Span::plain("Copied email to clipboard")]);
        vec![Effect::CopyToClipboard(email)]
    }

    // -------------------------------------------------------------------
    // Stages
    // -------------------------------------------------------------------

    /// Echo the submitted line behind the prompt label.
    fn echo(&mut self, cmd: &str) {
        self.scrollback.push(vec![
            Span::styled(&self.portfolio.prompt(), SpanStyle::Prompt),
            Span::plain(&format!(" {}", cmd)),
        ]);
    }

    fn unknown(&mut self, name: &str) {
        self.scrollback.push(vec![
            Span::styled(
                &format!("Command not found: {}. Type ", name),
                SpanStyle::Warning,
            ),
            Span::styled("help", SpanStyle::Heading),
            Span::styled(".", SpanStyle::Warning),
        ]);
    }

    // -------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------

    fn cmd_help(&mut self) {
        self.scrollback
            .push(vec![Span::styled("Available commands", SpanStyle::Heading)]);
        for cmd in CommandKind::ALL {
            self.scrollback.push(vec![Span::plain(&format!(
                "{} — {}",
                cmd.usage(),
                cmd.description()
            ))]);
        }
    }

    fn cmd_about(&mut self) {
        self.scrollback
            .push(vec![Span::styled("About", SpanStyle::Heading)]);
        for paragraph in &self.portfolio.about {
            self.scrollback.push(vec![Span::plain(paragraph)]);
        }
    }

    fn cmd_projects(&mut self) {
        self.scrollback
            .push(vec![Span::styled("Projects", SpanStyle::Heading)]);
        for project in &self.portfolio.projects {
            self.scrollback.push(vec![
                Span::plain(&format!("{}. ", project.id)),
                Span::styled(&project.name, SpanStyle::Underline),
                Span::plain(&format!(" — {}", project.desc)),
            ]);
        }
        self.scrollback.push(vec![Span::styled(
            "Use project <id> to see details.",
            SpanStyle::Dim,
        )]);
    }

    fn cmd_project(&mut self, args: &[&str]) {
        // A missing or non-numeric argument yields no candidate, and an
        // explicit 0 is never a valid id (ids start at 1).
        let id = args.first().and_then(|arg| arg.parse::<i64>().ok());
        let found = match id {
            Some(n) if n > 0 => u32::try_from(n).ok().and_then(|n| self.portfolio.project(n)),
            _ => None,
        };
        match found.cloned() {
            None => {
                self.scrollback.push(vec![Span::styled(
                    "Project not found. Try: projects",
                    SpanStyle::Warning,
                )]);
            }
            Some(project) => {
                self.scrollback
                    .push(vec![Span::styled(&project.name, SpanStyle::Heading)]);
                self.scrollback.push(vec![Span::plain(&project.desc)]);
                self.scrollback.push(vec![
                    Span::plain("URL: "),
                    Span::link(&project.url, &project.url),
                ]);
            }
        }
    }

    fn cmd_skills(&mut self) {
        self.scrollback
            .push(vec![Span::styled("Skills", SpanStyle::Heading)]);
        for category in &self.portfolio.skills {
            self.scrollback.push(vec![
                Span::styled(&format!("{}:", category.name), SpanStyle::Underline),
                Span::plain(&format!(" {}", category.items)),
            ]);
        }
    }

    fn cmd_contact(&mut self) {
        let contact = &self.portfolio.contact;
        self.scrollback
            .push(vec![Span::styled("Contact", SpanStyle::Heading)]);
        self.scrollback.push(vec![
            Span::plain("Email: "),
            Span::styled(&contact.email, SpanStyle::Underline),
            Span::styled(" (Ctrl-Y to copy)", SpanStyle::Dim),
        ]);
        self.scrollback.push(vec![
            Span::plain("GitHub: "),
            Span::link(&contact.github_label, &contact.github_url),
        ]);
        self.scrollback.push(vec![
            Span::plain("Linkedin: "),
            Span::link(&contact.linkedin_label, &contact.linkedin_url),
        ]);
    }

    /// `cv [-o|open|-d|download]` -- anything that is not a download mode
    /// falls through to open, absent argument included.
    fn cmd_cv(&mut self, args: &[&str]) -> Vec<Effect> {
        let mode = args
            .first()
            .map(|arg| arg.to_lowercase())
            .unwrap_or_else(|| "open".to_string());
        let path = self.portfolio.cv_path.clone();
        if mode == "download" || mode == "-d" {
            self.scrollback.push(vec![Span::plain("Downloading CV…")]);
            vec![Effect::DownloadDocument {
                file_name: self.portfolio.cv_file_name(),
                path,
            }]
        } else {
            self.scrollback.push(vec![Span::plain("Opening CV…")]);
            vec![Effect::OpenDocument(path)]
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Portfolio::default())
    }

    fn lines(session: &Session) -> Vec<String> {
        session
            .scrollback()
            .iter()
            .map(|line| line.plain_text())
            .collect()
    }

    fn output_contains(session: &Session, needle: &str) -> bool {
        lines(session).iter().any(|line| line.contains(needle))
    }

    #[test]
    fn starts_with_banner() {
        let s = session();
        assert_eq!(s.scrollback().len(), 1);
        assert!(output_contains(&s, "type help"));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = session();
        let before = s.scrollback().len();
        assert!(s.submit("").is_empty());
        assert!(s.submit("   \t  ").is_empty());
        assert_eq!(s.scrollback().len(), before);
        assert!(s.history().is_empty());
    }

    #[test]
    fn submission_echoes_with_prompt() {
        let mut s = session();
        s.submit("about");
        assert!(output_contains(&s, "jessim@dev:~$ about"));
    }

    #[test]
    fn submission_is_recorded_in_history() {
        let mut s = session();
        s.submit("  help  ");
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history_mut().older().as_deref(), Some("help"));
    }

    #[test]
    fn help_lists_every_command() {
        let mut s = session();
        s.submit("help");
        assert!(output_contains(&s, "Available commands"));
        assert!(output_contains(&s, "clear — clear terminal"));
        assert!(output_contains(&s, "project <id> — show project details"));
        assert!(output_contains(&s, "cv [-o|-d] — open or download the CV"));
    }

    #[test]
    fn command_names_are_case_insensitive() {
        let mut s = session();
        s.submit("HELP");
        assert!(output_contains(&s, "Available commands"));
    }

    #[test]
    fn about_prints_biography() {
        let mut s = session();
        s.submit("about");
        assert!(output_contains(&s, "Jessim Skiba"));
        assert!(output_contains(&s, "42 Paris"));
    }

    #[test]
    fn projects_lists_all_with_hint() {
        let mut s = session();
        s.submit("projects");
        for name in ["ft_transcendence", "ft_irc", "Cub3D", "Philosophers", "Inception"] {
            assert!(output_contains(&s, name), "missing {}", name);
        }
        assert!(output_contains(&s, "Use project <id> to see details."));
    }

    #[test]
    fn project_by_id_shows_details() {
        let mut s = session();
        s.submit("project 2");
        assert!(output_contains(&s, "ft_irc"));
        assert!(output_contains(&s, "URL: https://github.com/mowhry/ft_irc"));
    }

    #[test]
    fn project_unmatched_id_is_not_found() {
        let mut s = session();
        s.submit("project 99");
        assert!(output_contains(&s, "Project not found. Try: projects"));
        assert!(!output_contains(&s, "github.com"));
    }

    #[test]
    fn project_zero_is_always_not_found() {
        let mut s = session();
        s.submit("project 0");
        assert!(output_contains(&s, "Project not found"));
    }

    #[test]
    fn project_non_numeric_or_missing_arg_is_not_found() {
        for input in ["project", "project abc", "project 2.5", "project -1"] {
            let mut s = session();
            s.submit(input);
            assert!(output_contains(&s, "Project not found"), "input: {}", input);
        }
    }

    #[test]
    fn extra_project_args_are_ignored() {
        let mut s = session();
        s.submit("project 3 trailing junk");
        assert!(output_contains(&s, "Cub3D"));
    }

    #[test]
    fn skills_prints_categories() {
        let mut s = session();
        s.submit("skills");
        assert!(output_contains(&s, "Languages: C/C++, Python"));
        assert!(output_contains(&s, "Web Technologies:"));
    }

    #[test]
    fn contact_prints_email_and_links() {
        let mut s = session();
        s.submit("contact");
        assert!(output_contains(&s, "jskiba@student.42.fr"));
        assert!(output_contains(&s, "github.com/mowhry"));
        assert!(output_contains(&s, "Ctrl-Y to copy"));
    }

    #[test]
    fn copy_email_confirms_and_requests_clipboard_write() {
        let mut s = session();
        let effects = s.copy_email();
        assert_eq!(
            effects,
            vec![Effect::CopyToClipboard("jskiba@student.42.fr".into())]
        );
        assert!(output_contains(&s, "Copied email to clipboard"));
    }

    #[test]
    fn cv_defaults_to_open() {
        let mut s = session();
        let effects = s.submit("cv");
        assert_eq!(
            effects,
            vec![Effect::OpenDocument(PathBuf::from("CV_LaTeX_US.pdf"))]
        );
        assert!(output_contains(&s, "Opening CV"));
    }

    #[test]
    fn cv_download_modes() {
        for input in ["cv -d", "cv download", "cv DOWNLOAD"] {
            let mut s = session();
            let effects = s.submit(input);
            assert_eq!(
                effects,
                vec![Effect::DownloadDocument {
                    path: PathBuf::from("CV_LaTeX_US.pdf"),
                    file_name: "CV_LaTeX_US.pdf".into(),
                }],
                "input: {}",
                input
            );
            assert!(output_contains(&s, "Downloading CV"));
        }
    }

    #[test]
    fn cv_unrecognized_mode_falls_through_to_open() {
        for input in ["cv -o", "cv open", "cv nonsense"] {
            let mut s = session();
            let effects = s.submit(input);
            assert_eq!(effects.len(), 1, "input: {}", input);
            assert!(
                matches!(effects[0], Effect::OpenDocument(_)),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn clear_empties_the_scrollback() {
        let mut s = session();
        s.submit("help");
        s.submit("about");
        assert!(s.scrollback().len() > 2);
        s.submit("clear");
        assert_eq!(s.scrollback().len(), 0);
    }

    #[test]
    fn unknown_command_is_reported_not_fatal() {
        let mut s = session();
        s.submit("unknowncmd");
        assert!(output_contains(&s, "Command not found: unknowncmd"));
        assert!(output_contains(&s, "help"));
        // The session stays interactive.
        s.submit("help");
        assert!(output_contains(&s, "Available commands"));
    }

    #[test]
    fn unknown_command_is_lowercased_in_report() {
        let mut s = session();
        s.submit("FooBar");
        assert!(output_contains(&s, "Command not found: foobar"));
    }

    #[test]
    fn output_order_matches_submission_order() {
        let mut s = session();
        s.submit("about");
        s.submit("skills");
        let all = lines(&s).join("\n");
        let about = all.find("About").unwrap();
        let skills = all.find("Skills").unwrap();
        assert!(about < skills);
    }
}
