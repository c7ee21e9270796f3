//! GitHub Actions workflow annotations

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// Where an annotation points
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub file: Option<String>,
    pub line: Option<usize>,
}

pub fn running_in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

pub fn github_actions_annotation(level: AnnotationLevel, message: &str, location: &Location) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = &location.file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(line) = location.line {
        props.push(format!("line={}", line));
    }
    props.push("title=Sidekick".to_string());

    format!("::{} {}::{}", level_str, props.join(","), escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
