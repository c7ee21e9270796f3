//! Deployment kind - primary app or revision-scoped preview

use std::fmt;

use super::{AppName, RevisionHash};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentKind {
    /// The app's main deployment, redeployed in place
    Primary,
    /// Isolated deployment of one source revision
    Preview(RevisionHash),
}

impl DeploymentKind {
    pub fn revision(&self) -> Option<&RevisionHash> {
        match self {
            DeploymentKind::Primary => None,
            DeploymentKind::Preview(rev) => Some(rev),
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, DeploymentKind::Preview(_))
    }

    /// Remote directory, relative to the remote user's home
    pub fn remote_dir(&self, app: &AppName) -> String {
        match self {
            DeploymentKind::Primary => app.to_string(),
            DeploymentKind::Preview(rev) => format!("{}/preview/{}", app, rev),
        }
    }
}

impl fmt::Display for DeploymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentKind::Primary => f.write_str("primary"),
            DeploymentKind::Preview(rev) => write!(f, "preview {}", rev),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_remote_dir_is_app_name() {
        let app = AppName::parse("shop").unwrap();
        assert_eq!(DeploymentKind::Primary.remote_dir(&app), "shop");
    }

    #[test]
    fn preview_remote_dir_is_nested_under_app() {
        let app = AppName::parse("shop").unwrap();
        let kind = DeploymentKind::Preview(RevisionHash::parse("abc123").unwrap());
        assert_eq!(kind.remote_dir(&app), "shop/preview/abc123");
    }
}
