use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attributes::{apply, TaskFilter};
use crate::model::Task;
use crate::ordering::sort_by_relevance;

/// Search parameters. Every field is optional; absent fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub tag: Option<String>,
    /// Inclusive upper bound on the due date.
    pub before: Option<NaiveDate>,
    /// Inclusive lower bound on the due date.
    pub after: Option<NaiveDate>,
}

impl SearchQuery {
    pub fn to_filter(&self) -> TaskFilter {
        TaskFilter::new()
            .keyword(self.keyword.as_deref())
            .tag(self.tag.as_deref())
            .after(self.after)
            .before(self.before)
    }
}

/// Tasks matching the query, soonest due first (undated last), then by urgency.
pub fn run(snapshot: Vec<Task>, query: &SearchQuery) -> Vec<Task> {
    sort_by_relevance(apply(&query.to_filter(), snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{date, StoreFixture};
    use crate::store::TaskStore;

    fn snapshot() -> Vec<Task> {
        StoreFixture::new()
            .with_reference_tasks()
            .store
            .list_tasks()
            .unwrap()
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn before_bound_returns_only_t3() {
        let query = SearchQuery {
            before: Some(date(2024, 1, 9)),
            ..Default::default()
        };
        assert_eq!(titles(&run(snapshot(), &query)), vec!["T3"]);
    }

    #[test]
    fn empty_query_orders_by_due_date_undated_last() {
        assert_eq!(
            titles(&run(snapshot(), &SearchQuery::default())),
            vec!["T3", "T1", "T2"]
        );
    }

    #[test]
    fn keyword_and_tag_combine() {
        let mut tasks = snapshot();
        tasks[0].tags = Some("work".into());
        tasks[0].description = Some("quarterly report".into());
        tasks[2].tags = Some("work".into());

        let query = SearchQuery {
            keyword: Some("REPORT".into()),
            tag: Some("Work".into()),
            ..Default::default()
        };
        assert_eq!(titles(&run(tasks, &query)), vec!["T1"]);
    }

    #[test]
    fn after_bound_excludes_undated() {
        let query = SearchQuery {
            after: Some(date(2024, 1, 1)),
            ..Default::default()
        };
        assert_eq!(titles(&run(snapshot(), &query)), vec!["T3", "T1"]);
    }
}
