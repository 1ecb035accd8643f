use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::leads::filters::{invalid, selection, FilterError, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
    Canceled,
}

impl TaskStatus {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Canceled => "canceled",
        }
    }
}

/// Tabs above the task list. `Active` is selected on first load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTab {
    All,
    #[default]
    Active,
    Completed,
}

impl StatusTab {
    /// Statuses requested for the tab; empty means no status filter.
    pub const fn statuses(self) -> &'static [TaskStatus] {
        match self {
            Self::All => &[],
            Self::Active => &[TaskStatus::Backlog, TaskStatus::Todo, TaskStatus::InProgress],
            Self::Completed => &[TaskStatus::Done],
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    pub const fn ordered() -> [Self; 5] {
        [Self::None, Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|priority| priority.token() == token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    Me,
    Unassigned,
    Member(String),
}

impl Assignee {
    pub fn token(&self) -> &str {
        match self {
            Self::Me => "me",
            Self::Unassigned => "unassigned",
            Self::Member(id) => id,
        }
    }

    /// `me` and `unassigned` are reserved; anything else is a team member id.
    pub fn from_token(token: &str) -> Self {
        match token {
            "me" => Self::Me,
            "unassigned" => Self::Unassigned,
            other => Self::Member(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueWindow {
    Today,
    ThisWeek,
    ThisMonth,
    Overdue,
}

impl DueWindow {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "thisWeek",
            Self::ThisMonth => "thisMonth",
            Self::Overdue => "overdue",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        [Self::Today, Self::ThisWeek, Self::ThisMonth, Self::Overdue]
            .into_iter()
            .find(|window| window.token() == token)
    }

    /// Inclusive due-date range starting at `today`. `Overdue` has no range.
    ///
    /// The week ends on the coming Sunday; on a Sunday it runs to the next one.
    pub fn range(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Today => Some((today, today)),
            Self::ThisWeek => {
                let days_left = 7 - i64::from(today.weekday().num_days_from_sunday());
                Some((today, today + Duration::days(days_left)))
            }
            Self::ThisMonth => Some((today, last_day_of_month(today))),
            Self::Overdue => None,
        }
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// Sort keys each carry a fixed direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskSortKey {
    #[default]
    #[serde(rename = "dueDate")]
    DueDate,
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "title")]
    Title,
}

impl TaskSortKey {
    pub const fn token(self) -> &'static str {
        match self {
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
            Self::CreatedAt => "createdAt",
            Self::Title => "title",
        }
    }

    pub const fn order(self) -> SortOrder {
        match self {
            Self::DueDate | Self::Title => SortOrder::Asc,
            Self::Priority | Self::CreatedAt => SortOrder::Desc,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        [Self::DueDate, Self::Priority, Self::CreatedAt, Self::Title]
            .into_iter()
            .find(|key| key.token() == token)
    }
}

/// Selections from the task list toolbar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilters {
    pub status_tab: StatusTab,
    pub search: String,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<Assignee>,
    pub case_id: Option<String>,
    pub due: Option<DueWindow>,
    pub sort_by: TaskSortKey,
}

impl TaskFilters {
    /// Parse toolbar query parameters. Blank values and `all` mean "no filter".
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, FilterError> {
        let param = |name: &str| selection(params, name);

        Ok(Self {
            status_tab: match params.get("tab").map(|value| value.trim()) {
                Some(value) if !value.is_empty() => {
                    StatusTab::from_token(value).ok_or_else(|| invalid("tab", value))?
                }
                _ => StatusTab::default(),
            },
            search: params
                .get("search")
                .map(|value| value.trim().to_string())
                .unwrap_or_default(),
            priority: param("priority")
                .map(|value| {
                    TaskPriority::from_token(value).ok_or_else(|| invalid("priority", value))
                })
                .transpose()?,
            assigned_to: param("assignedTo").map(Assignee::from_token),
            case_id: param("caseId").map(str::to_string),
            due: param("dueDate")
                .map(|value| DueWindow::from_token(value).ok_or_else(|| invalid("dueDate", value)))
                .transpose()?,
            sort_by: param("sortBy")
                .map(|value| TaskSortKey::from_token(value).ok_or_else(|| invalid("sortBy", value)))
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Backend query for the current selections, with date windows anchored on
    /// today's UTC date.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        self.to_query_pairs_on(Utc::now().date_naive())
    }

    pub fn to_query_pairs_on(&self, today: NaiveDate) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let statuses = self.status_tab.statuses();
        if !statuses.is_empty() {
            let joined = statuses
                .iter()
                .map(|status| status.token())
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("status", joined));
        }

        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.token().to_string()));
        }
        if let Some(assignee) = &self.assigned_to {
            pairs.push(("assignedTo", assignee.token().to_string()));
        }
        if let Some(case_id) = &self.case_id {
            pairs.push(("caseId", case_id.clone()));
        }

        match self.due {
            Some(DueWindow::Overdue) => pairs.push(("overdue", "true".to_string())),
            Some(window) => {
                if let Some((from, to)) = window.range(today) {
                    pairs.push(("dueDateFrom", from.format("%Y-%m-%d").to_string()));
                    pairs.push(("dueDateTo", to.format("%Y-%m-%d").to_string()));
                }
            }
            None => {}
        }

        pairs.push(("sortBy", self.sort_by.token().to_string()));
        pairs.push(("sortOrder", self.sort_by.order().token().to_string()));
        pairs
    }

    /// True when any toolbar filter is set. The status tab and sort key do not count.
    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty()
            || self.priority.is_some()
            || self.assigned_to.is_some()
            || self.case_id.is_some()
            || self.due.is_some()
    }

    /// Reset every toolbar filter, keeping the selected tab and sort key.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.priority = None;
        self.assigned_to = None;
        self.case_id = None;
        self.due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn lookup<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn default_selection_requests_active_tasks_by_due_date() {
        let filters = TaskFilters::default();
        let pairs = filters.to_query_pairs_on(date(2025, 3, 12));
        assert_eq!(
            pairs,
            vec![
                ("status", "backlog,todo,in_progress".to_string()),
                ("sortBy", "dueDate".to_string()),
                ("sortOrder", "asc".to_string()),
            ]
        );
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn status_tabs_map_to_status_sets() {
        let completed = TaskFilters {
            status_tab: StatusTab::Completed,
            ..TaskFilters::default()
        };
        let pairs = completed.to_query_pairs_on(date(2025, 3, 12));
        assert_eq!(lookup(&pairs, "status"), Some("done"));

        let all = TaskFilters {
            status_tab: StatusTab::All,
            ..TaskFilters::default()
        };
        assert_eq!(lookup(&all.to_query_pairs_on(date(2025, 3, 12)), "status"), None);
    }

    #[test]
    fn assignee_accepts_reserved_words_and_member_ids() {
        assert_eq!(Assignee::from_token("me"), Assignee::Me);
        assert_eq!(Assignee::from_token("unassigned"), Assignee::Unassigned);
        assert_eq!(
            Assignee::from_token("user-42"),
            Assignee::Member("user-42".to_string())
        );

        let filters = TaskFilters::from_query(&params(&[("assignedTo", "user-42")]))
            .expect("query parses");
        let pairs = filters.to_query_pairs_on(date(2025, 3, 12));
        assert_eq!(lookup(&pairs, "assignedTo"), Some("user-42"));

        let filters =
            TaskFilters::from_query(&params(&[("assignedTo", "all")])).expect("query parses");
        assert_eq!(filters.assigned_to, None);
    }

    #[test]
    fn today_window_is_a_single_day() {
        let filters = TaskFilters {
            due: Some(DueWindow::Today),
            ..TaskFilters::default()
        };
        let pairs = filters.to_query_pairs_on(date(2025, 3, 12));
        assert_eq!(lookup(&pairs, "dueDateFrom"), Some("2025-03-12"));
        assert_eq!(lookup(&pairs, "dueDateTo"), Some("2025-03-12"));
        assert_eq!(lookup(&pairs, "overdue"), None);
    }

    #[test]
    fn week_window_runs_to_the_coming_sunday() {
        // 2025-03-12 is a Wednesday.
        assert_eq!(
            DueWindow::ThisWeek.range(date(2025, 3, 12)),
            Some((date(2025, 3, 12), date(2025, 3, 16)))
        );
        // Saturday ends tomorrow, Sunday runs a full week.
        assert_eq!(
            DueWindow::ThisWeek.range(date(2025, 3, 15)),
            Some((date(2025, 3, 15), date(2025, 3, 16)))
        );
        assert_eq!(
            DueWindow::ThisWeek.range(date(2025, 3, 16)),
            Some((date(2025, 3, 16), date(2025, 3, 23)))
        );
    }

    #[test]
    fn month_window_ends_on_last_day() {
        assert_eq!(
            DueWindow::ThisMonth.range(date(2024, 2, 10)),
            Some((date(2024, 2, 10), date(2024, 2, 29)))
        );
        assert_eq!(
            DueWindow::ThisMonth.range(date(2025, 12, 31)),
            Some((date(2025, 12, 31), date(2025, 12, 31)))
        );

        let filters = TaskFilters {
            due: Some(DueWindow::ThisMonth),
            ..TaskFilters::default()
        };
        let pairs = filters.to_query_pairs_on(date(2025, 4, 3));
        assert_eq!(lookup(&pairs, "dueDateFrom"), Some("2025-04-03"));
        assert_eq!(lookup(&pairs, "dueDateTo"), Some("2025-04-30"));
    }

    #[test]
    fn overdue_sends_flag_without_dates() {
        let filters = TaskFilters {
            due: Some(DueWindow::Overdue),
            ..TaskFilters::default()
        };
        let pairs = filters.to_query_pairs_on(date(2025, 3, 12));
        assert_eq!(lookup(&pairs, "overdue"), Some("true"));
        assert_eq!(lookup(&pairs, "dueDateFrom"), None);
        assert_eq!(lookup(&pairs, "dueDateTo"), None);
    }

    #[test]
    fn each_sort_key_has_a_fixed_order() {
        let cases = [
            (TaskSortKey::DueDate, "asc"),
            (TaskSortKey::Priority, "desc"),
            (TaskSortKey::CreatedAt, "desc"),
            (TaskSortKey::Title, "asc"),
        ];
        for (key, order) in cases {
            let filters = TaskFilters {
                sort_by: key,
                ..TaskFilters::default()
            };
            let pairs = filters.to_query_pairs_on(date(2025, 3, 12));
            assert_eq!(lookup(&pairs, "sortBy"), Some(key.token()));
            assert_eq!(lookup(&pairs, "sortOrder"), Some(order), "{key:?}");
        }
    }

    #[test]
    fn clearing_keeps_tab_and_sort() {
        let mut filters = TaskFilters::from_query(&params(&[
            ("tab", "completed"),
            ("search", "  hearing "),
            ("priority", "high"),
            ("assignedTo", "me"),
            ("caseId", "case-7"),
            ("dueDate", "overdue"),
            ("sortBy", "title"),
        ]))
        .expect("query parses");

        assert!(filters.has_active_filters());
        let pairs = filters.to_query_pairs_on(date(2025, 3, 12));
        assert_eq!(lookup(&pairs, "search"), Some("hearing"));
        assert_eq!(lookup(&pairs, "priority"), Some("high"));
        assert_eq!(lookup(&pairs, "caseId"), Some("case-7"));

        filters.clear_filters();
        assert!(!filters.has_active_filters());
        assert_eq!(filters.status_tab, StatusTab::Completed);
        assert_eq!(filters.sort_by, TaskSortKey::Title);
    }

    #[test]
    fn search_alone_counts_as_active_once_trimmed() {
        let mut filters = TaskFilters::default();
        filters.search = "   ".to_string();
        assert!(!filters.has_active_filters());
        filters.search = "contract".to_string();
        assert!(filters.has_active_filters());
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = TaskFilters::from_query(&params(&[("dueDate", "someday")]))
            .expect_err("unknown window rejected");
        assert_eq!(
            err,
            FilterError::InvalidValue {
                param: "dueDate",
                value: "someday".to_string(),
            }
        );
        assert!(TaskFilters::from_query(&params(&[("tab", "archived")])).is_err());
        assert!(TaskFilters::from_query(&params(&[("sortBy", "mood")])).is_err());
    }
}
