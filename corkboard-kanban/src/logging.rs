//! Logging helpers

use serde::Serialize;
use std::fmt::{self, Debug};

/// Wrapper for pretty-printing values in log lines as YAML
///
/// ```ignore
/// use corkboard_kanban::Pretty;
/// tracing::debug!("snapshot: {}", Pretty(&store.snapshot()));
/// ```
///
/// The YAML is preceded by a newline. `Debug` output is used if the value
/// cannot be serialized.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> Debug for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::List;

    #[test]
    fn test_pretty_renders_yaml() {
        let list = List::new("Backlog", "board-1");
        let rendered = Pretty(&list).to_string();
        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("title: Backlog"));
        assert!(rendered.contains("board_id: board-1"));
    }
}
