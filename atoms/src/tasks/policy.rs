//! Task lifecycle: which status changes the dashboard may request.

use super::model::TaskStatus;

impl TaskStatus {
    /// Statuses this one may move to next. A fixed lookup table, not
    /// computed: work flows forward one step at a time, review can bounce
    /// back, and `completed` can only be reopened into `under_review`.
    pub fn allowed_transitions(self) -> &'static [TaskStatus] {
        use TaskStatus::*;
        match self {
            ToDo => &[InProgress],
            InProgress => &[ToDo, UnderReview],
            UnderReview => &[InProgress, Completed],
            Completed => &[UnderReview],
        }
    }

    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStatus::*;

    #[test]
    fn table_matches_the_lifecycle() {
        assert_eq!(ToDo.allowed_transitions(), &[InProgress]);
        assert_eq!(InProgress.allowed_transitions(), &[ToDo, UnderReview]);
        assert_eq!(UnderReview.allowed_transitions(), &[InProgress, Completed]);
        assert_eq!(Completed.allowed_transitions(), &[UnderReview]);
    }

    #[test]
    fn completed_is_not_absorbing() {
        assert!(Completed.can_transition_to(UnderReview));
    }

    #[test]
    fn no_shortcut_edges() {
        assert!(!ToDo.can_transition_to(UnderReview));
        assert!(!ToDo.can_transition_to(Completed));
        assert!(!UnderReview.can_transition_to(ToDo));
        assert!(!Completed.can_transition_to(ToDo));
        assert!(!Completed.can_transition_to(InProgress));
    }

    #[test]
    fn self_transitions_are_rejected() {
        for status in [ToDo, InProgress, UnderReview, Completed] {
            assert!(!status.can_transition_to(status));
        }
    }
}
