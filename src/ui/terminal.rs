//! What the progress stream can display

use is_terminal::IsTerminal;

/// Variables set by common CI runners
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
    "TRAVIS",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

/// Capabilities of stderr, where progress is written
pub fn detect_capabilities() -> TerminalCapabilities {
    capabilities_from(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn capabilities_from(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let dumb = var("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && var("NO_COLOR").is_none(),
        supports_unicode: !dumb && locale_is_unicode(&var),
        is_ci: CI_VARS.iter().any(|key| var(key).is_some()),
    }
}

/// The first locale variable that is set decides; no locale at all counts as UTF-8
fn locale_is_unicode(var: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| var(key))
        .find(|value| !value.is_empty());

    match locale {
        Some(value) => {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        }
        None => true,
    }
}
