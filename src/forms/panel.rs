use crate::config;

/// Which of the three panel views is on screen. Exactly one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelView {
    #[default]
    Summary,
    Form,
    Success,
}

impl PanelView {
    pub fn show_form(self) -> Self {
        match self {
            PanelView::Summary => PanelView::Form,
            other => other,
        }
    }

    pub fn cancel(self) -> Self {
        match self {
            PanelView::Form => PanelView::Summary,
            other => other,
        }
    }

    /// Success does not depend on how the request went.
    pub fn submit(self) -> Self {
        match self {
            PanelView::Form => PanelView::Success,
            other => other,
        }
    }

    /// Fired by the revert timer.
    pub fn expire(self) -> Self {
        match self {
            PanelView::Success => PanelView::Summary,
            other => other,
        }
    }

    pub fn is_expanded(self) -> bool {
        self != PanelView::Summary
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessBehavior {
    /// Stay on the success view and offer to book a call.
    Persist { schedule_url: &'static str },
    /// Go back to the summary after `after_ms`.
    Revert { after_ms: u32 },
}

impl SuccessBehavior {
    pub fn for_title(title: &str) -> Self {
        if config::has_persistent_success(title) {
            SuccessBehavior::Persist {
                schedule_url: config::SCHEDULING_URL,
            }
        } else {
            SuccessBehavior::Revert {
                after_ms: config::SUCCESS_REVERT_MS,
            }
        }
    }

    pub fn revert_delay(self) -> Option<u32> {
        match self {
            SuccessBehavior::Revert { after_ms } => Some(after_ms),
            SuccessBehavior::Persist { .. } => None,
        }
    }

    /// URL and browsing context opened by "Schedule a Call".
    pub fn call_link(self) -> Option<(&'static str, &'static str)> {
        match self {
            SuccessBehavior::Persist { schedule_url } => Some((schedule_url, "_blank")),
            SuccessBehavior::Revert { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PanelView; 3] = [PanelView::Summary, PanelView::Form, PanelView::Success];

    #[test]
    fn starts_on_summary() {
        assert_eq!(PanelView::default(), PanelView::Summary);
        assert!(!PanelView::default().is_expanded());
    }

    #[test]
    fn full_cycle_for_a_reverting_panel() {
        let view = PanelView::default().show_form();
        assert_eq!(view, PanelView::Form);
        let view = view.submit();
        assert_eq!(view, PanelView::Success);
        assert!(view.is_expanded());
        assert_eq!(view.expire(), PanelView::Summary);
    }

    #[test]
    fn cancel_returns_to_summary() {
        assert_eq!(PanelView::Form.cancel(), PanelView::Summary);
    }

    #[test]
    fn events_outside_their_source_state_are_ignored() {
        assert_eq!(PanelView::Form.show_form(), PanelView::Form);
        assert_eq!(PanelView::Success.show_form(), PanelView::Success);
        assert_eq!(PanelView::Summary.cancel(), PanelView::Summary);
        assert_eq!(PanelView::Success.cancel(), PanelView::Success);
        assert_eq!(PanelView::Summary.submit(), PanelView::Summary);
        assert_eq!(PanelView::Success.submit(), PanelView::Success);
        assert_eq!(PanelView::Summary.expire(), PanelView::Summary);
        assert_eq!(PanelView::Form.expire(), PanelView::Form);
    }

    #[test]
    fn transition_table_and_highlight_agree() {
        use PanelView::*;
        // (start, show_form, cancel, submit, expire)
        let table = [
            (Summary, Form, Summary, Summary, Summary),
            (Form, Form, Summary, Success, Form),
            (Success, Success, Success, Success, Summary),
        ];
        for (start, shown, cancelled, submitted, expired) in table {
            assert_eq!(start.show_form(), shown, "show_form from {:?}", start);
            assert_eq!(start.cancel(), cancelled, "cancel from {:?}", start);
            assert_eq!(start.submit(), submitted, "submit from {:?}", start);
            assert_eq!(start.expire(), expired, "expire from {:?}", start);
            assert_eq!(start.is_expanded(), start != Summary);
        }
        assert_eq!(table.len(), ALL.len());
    }

    #[test]
    fn designated_titles_persist_with_scheduling_link() {
        for title in ["Corporations", "UMD Professors"] {
            let behavior = SuccessBehavior::for_title(title);
            assert_eq!(
                behavior,
                SuccessBehavior::Persist {
                    schedule_url: "https://calendly.com/evrenyk"
                }
            );
            assert_eq!(behavior.revert_delay(), None);
            assert_eq!(behavior.call_link(), Some((config::SCHEDULING_URL, "_blank")));
        }
    }

    #[test]
    fn other_titles_revert_after_three_seconds() {
        let behavior = SuccessBehavior::for_title("UMD Students");
        assert_eq!(behavior, SuccessBehavior::Revert { after_ms: 3_000 });
        assert_eq!(behavior.revert_delay(), Some(3_000));
        assert_eq!(behavior.call_link(), None);
    }
}
