use sfm_core::nav::path::resolve_selection;
use sfm_core::Command;

/// Actions that can result from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Remember an entry as the current selection.
    Select(String),
    /// Print the current listing again without re-reading it.
    List,
    /// Print the current directory.
    Pwd,
    /// Show what is on the clipboard.
    ShowClipboard,
    /// Print the command reference.
    Help,
    /// Quit the application.
    Quit,
    /// Blank line.
    None,
    /// Input that matched no command.
    Unknown(String),
}

/// Selection state carried between lines.
///
/// The selection is whatever entry was last `sel`ected or activated; an
/// explicit argument to a command always takes precedence over it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    selected: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn with_selected(self, name: Option<String>) -> Self {
        Self { selected: name }
    }
}

/// Parses one input line.
///
/// A line that is not a known command is treated as an entry name to
/// activate, so typing a directory name enters it.
pub fn parse_line(line: &str, state: &InputState) -> InputAction {
    let line = line.trim();
    if line.is_empty() {
        return InputAction::None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then_some(rest);
    let target = || resolve_selection(arg, state.selected()).map(str::to_string);

    match word {
        "q" | "quit" | "exit" => InputAction::Quit,
        "?" | "help" => InputAction::Help,
        "ls" | "list" => InputAction::List,
        "pwd" => InputAction::Pwd,
        "clip" => InputAction::ShowClipboard,
        "r" | "refresh" => InputAction::Command(Command::Refresh),
        "up" | ".." => InputAction::Command(Command::GoUp),
        "cd" => match arg {
            Some(path) => InputAction::Command(Command::Navigate(path.to_string())),
            None => InputAction::Command(Command::Navigate("~".to_string())),
        },
        "open" => match target() {
            Some(name) => InputAction::Command(Command::Activate(name)),
            None => InputAction::Unknown(line.to_string()),
        },
        "sel" | "select" => match arg {
            Some(name) => InputAction::Select(name.to_string()),
            None => InputAction::Unknown(line.to_string()),
        },
        "mkdir" => InputAction::Command(Command::NewFolder),
        "mv" | "rename" => InputAction::Command(Command::Rename(target())),
        "rm" | "del" | "delete" => InputAction::Command(Command::Delete(target())),
        "cp" | "copy" => InputAction::Command(Command::Copy(target())),
        "cut" => InputAction::Command(Command::Cut(target())),
        "paste" => InputAction::Command(Command::Paste),
        _ => InputAction::Command(Command::Activate(line.to_string())),
    }
}

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  <name> | open [name]   open a directory or launch a file
  cd [path]              go to path (default: home)
  up | ..                go to parent directory
  sel <name>             select an entry for the commands below
  mkdir                  create a folder
  rename [name]          rename the entry
  rm [name]              delete the entry (recursive)
  cp [name] | cut [name] mark the entry for paste
  paste                  paste the marked entry here
  clip                   show the clipboard
  ls | refresh | pwd     list, re-read, print directory
  q                      quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> InputAction {
        parse_line(line, &InputState::new())
    }

    fn parse_selected(line: &str, selected: &str) -> InputAction {
        let state = InputState::new().with_selected(Some(selected.to_string()));
        parse_line(line, &state)
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse("   "), InputAction::None);
    }

    #[test]
    fn quit_aliases() {
        for line in ["q", "quit", "exit"] {
            assert_eq!(parse(line), InputAction::Quit);
        }
    }

    #[test]
    fn cd_with_path_navigates() {
        assert_eq!(
            parse("cd  /home/u/archive "),
            InputAction::Command(Command::Navigate("/home/u/archive".to_string()))
        );
    }

    #[test]
    fn cd_without_path_goes_home() {
        assert_eq!(
            parse("cd"),
            InputAction::Command(Command::Navigate("~".to_string()))
        );
    }

    #[test]
    fn path_with_spaces_is_kept_whole() {
        assert_eq!(
            parse("cd My Documents"),
            InputAction::Command(Command::Navigate("My Documents".to_string()))
        );
    }

    #[test]
    fn up_aliases() {
        assert_eq!(parse(".."), InputAction::Command(Command::GoUp));
        assert_eq!(parse("up"), InputAction::Command(Command::GoUp));
    }

    #[test]
    fn bare_name_activates() {
        assert_eq!(
            parse("reports"),
            InputAction::Command(Command::Activate("reports".to_string()))
        );
    }

    #[test]
    fn file_operations_take_argument() {
        assert_eq!(
            parse("rm draft.txt"),
            InputAction::Command(Command::Delete(Some("draft.txt".to_string())))
        );
        assert_eq!(
            parse("cut draft.txt"),
            InputAction::Command(Command::Cut(Some("draft.txt".to_string())))
        );
        assert_eq!(
            parse("rename draft.txt"),
            InputAction::Command(Command::Rename(Some("draft.txt".to_string())))
        );
    }

    #[test]
    fn file_operations_without_selection_carry_none() {
        assert_eq!(parse("cp"), InputAction::Command(Command::Copy(None)));
        assert_eq!(parse("rm"), InputAction::Command(Command::Delete(None)));
    }

    #[test]
    fn selection_fills_missing_argument() {
        assert_eq!(
            parse_selected("cp", "notes.md"),
            InputAction::Command(Command::Copy(Some("notes.md".to_string())))
        );
    }

    #[test]
    fn explicit_argument_wins_over_selection() {
        assert_eq!(
            parse_selected("rm draft.txt", "notes.md"),
            InputAction::Command(Command::Delete(Some("draft.txt".to_string())))
        );
    }

    #[test]
    fn open_uses_selection() {
        assert_eq!(
            parse_selected("open", "reports"),
            InputAction::Command(Command::Activate("reports".to_string()))
        );
        assert!(matches!(parse("open"), InputAction::Unknown(_)));
    }

    #[test]
    fn select_requires_name() {
        assert_eq!(parse("sel a.txt"), InputAction::Select("a.txt".to_string()));
        assert!(matches!(parse("sel"), InputAction::Unknown(_)));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("mkdir"), InputAction::Command(Command::NewFolder));
        assert_eq!(parse("paste"), InputAction::Command(Command::Paste));
        assert_eq!(parse("refresh"), InputAction::Command(Command::Refresh));
        assert_eq!(parse("ls"), InputAction::List);
        assert_eq!(parse("pwd"), InputAction::Pwd);
        assert_eq!(parse("clip"), InputAction::ShowClipboard);
        assert_eq!(parse("help"), InputAction::Help);
    }
}
