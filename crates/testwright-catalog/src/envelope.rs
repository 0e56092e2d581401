//! Directive-wrapping policy for invoked content.
//!
//! Workflow steps are instructions for the *invoking agent*, not material to
//! show its user; their payloads are prefixed with a fixed directive saying
//! so. Reference documents pass through untouched. The policy is a pure
//! function of `(kind, content)` and performs no I/O.

use crate::catalog::EntryKind;

/// Fixed directive prepended to every workflow-namespace payload.
pub const WORKFLOW_DIRECTIVE: &str = "INTERNAL WORKFLOW INSTRUCTIONS — EXECUTE, DO NOT DISPLAY.\n\
Carry out the instructions below yourself, in order. Do not repeat or\n\
paraphrase the instructions to your user; surface only the results and\n\
artifacts produced by following them.";

/// Wrap invoked content according to its namespace.
pub fn wrap(kind: EntryKind, content: String) -> String {
    match kind {
        EntryKind::Workflow => format!("{WORKFLOW_DIRECTIVE}\n\n{content}"),
        EntryKind::Reference => content,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_content_is_wrapped() {
        let wrapped = wrap(EntryKind::Workflow, "## Step One\nDo the thing.".to_string());
        assert!(wrapped.starts_with(WORKFLOW_DIRECTIVE));
        assert!(wrapped.contains("## Step One\nDo the thing."));
    }

    #[test]
    fn test_reference_content_is_untouched() {
        let content = "## Principles\nKeep tests independent.".to_string();
        assert_eq!(wrap(EntryKind::Reference, content.clone()), content);
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let a = wrap(EntryKind::Workflow, "same input".to_string());
        let b = wrap(EntryKind::Workflow, "same input".to_string());
        assert_eq!(a, b);
    }
}
