//! Bulk actions over the current selection
//!
//! Pages expose a small fixed set of bulk actions ("Accept Selected",
//! "Export List", ...). Dispatch forwards the action name plus the selected
//! identifiers to an [`ActionSink`] and the owning view clears its selection
//! unconditionally; the sink's outcome is not surfaced here. A production
//! deployment would put an HTTP client behind the same trait.

use std::fmt;
use tracing::info;

/// Fixed bulk-action vocabulary across all list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkAction {
    Accept,
    Activate,
    AddLabel,
    AddNote,
    Approve,
    Deactivate,
    Delete,
    Export,
    MarkRead,
    Pause,
    Reject,
    RemoveFromQuickView,
    Resend,
    Send,
    StopCycle,
}

impl BulkAction {
    pub fn as_str(self) -> &'static str {
        match self {
            BulkAction::Accept => "accept",
            BulkAction::Activate => "activate",
            BulkAction::AddLabel => "add_label",
            BulkAction::AddNote => "add_note",
            BulkAction::Approve => "approve",
            BulkAction::Deactivate => "deactivate",
            BulkAction::Delete => "delete",
            BulkAction::Export => "export",
            BulkAction::MarkRead => "mark_read",
            BulkAction::Pause => "pause",
            BulkAction::Reject => "reject",
            BulkAction::RemoveFromQuickView => "remove_from_quick",
            BulkAction::Resend => "resend",
            BulkAction::Send => "send",
            BulkAction::StopCycle => "stop_cycle",
        }
    }

    /// Button label as shown next to the table.
    pub fn label(self) -> &'static str {
        match self {
            BulkAction::Accept => "Accept Selected",
            BulkAction::Activate => "Activate",
            BulkAction::AddLabel => "Add Label",
            BulkAction::AddNote => "Add Note",
            BulkAction::Approve => "Approve",
            BulkAction::Reject => "Reject",
            BulkAction::Deactivate => "Deactivate",
            BulkAction::Delete => "Delete Selected",
            BulkAction::Export => "Export List",
            BulkAction::MarkRead => "Mark as Read",
            BulkAction::Pause => "Pause",
            BulkAction::RemoveFromQuickView => "Remove from Quick View",
            BulkAction::Resend => "Resend",
            BulkAction::Send => "Send Now",
            BulkAction::StopCycle => "Stop Automatic Cycle",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External sink for dispatched bulk actions.
pub trait ActionSink {
    fn dispatch(&self, action: BulkAction, ids: &[String]);
}

/// Default sink: logs the payload through `tracing`. Stands in for the
/// backend request of a full deployment.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ActionSink for LogSink {
    fn dispatch(&self, action: BulkAction, ids: &[String]) {
        info!(
            target: "coachboard::bulk",
            action = action.as_str(),
            count = ids.len(),
            ids = ?ids,
            "bulk action dispatched"
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every dispatch for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub calls: RefCell<Vec<(BulkAction, Vec<String>)>>,
    }

    impl ActionSink for RecordingSink {
        fn dispatch(&self, action: BulkAction, ids: &[String]) {
            self.calls.borrow_mut().push((action, ids.to_vec()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn test_action_names_match_original_vocabulary() {
        assert_eq!(BulkAction::MarkRead.as_str(), "mark_read");
        assert_eq!(BulkAction::StopCycle.as_str(), "stop_cycle");
        assert_eq!(BulkAction::RemoveFromQuickView.as_str(), "remove_from_quick");
        assert_eq!(BulkAction::Delete.to_string(), "delete");
    }

    #[test]
    fn test_recording_sink_captures_payload() {
        let sink = RecordingSink::default();
        sink.dispatch(BulkAction::Approve, &["1".to_string(), "4".to_string()]);
        let calls = sink.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, BulkAction::Approve);
        assert_eq!(calls[0].1, vec!["1".to_string(), "4".to_string()]);
    }
}
