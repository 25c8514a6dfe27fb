use chrono::{DateTime, Duration, Utc};

use crate::api_error::ApiError;
use crate::data_access::data_context::DataContext;
use crate::insight_response::{InsightReport, PriorityCount, TaskAnalytics};
use crate::task::Task;
use crate::task_priority::TaskPriority;
use crate::task_status::TaskStatus;

/// Reduces the task collection into counts and a fixed, ordered sequence of
/// advice sentences. Pure computation over a snapshot — no side effects.
#[derive(Clone)]
pub struct InsightService {
    data: DataContext,
}

impl InsightService {
    pub fn new(data: DataContext) -> Self {
        InsightService { data }
    }

    pub fn generate_insights(&self) -> Result<InsightReport, ApiError> {
        let tasks = self.data.list_tasks()?;
        let analytics = compute_analytics(&tasks, Utc::now());
        let insights = build_insights(&analytics);
        Ok(InsightReport {
            summary: insights.join(" "),
            detailed_insights: insights,
            analytics,
        })
    }
}

/// Single pass over the collection. "Open" means any status other than Done;
/// due-soon and overdue only count open tasks.
pub fn compute_analytics(tasks: &[Task], now: DateTime<Utc>) -> TaskAnalytics {
    let week_ahead = now + Duration::days(7);

    let mut open_tasks = 0;
    let mut high = 0;
    let mut medium = 0;
    let mut low = 0;
    let mut due_soon = 0;
    let mut overdue = 0;

    for task in tasks {
        if task.status == TaskStatus::Done {
            continue;
        }
        open_tasks += 1;
        match task.priority {
            TaskPriority::High => high += 1,
            TaskPriority::Medium => medium += 1,
            TaskPriority::Low => low += 1,
        }
        if task.due_date >= now && task.due_date <= week_ahead {
            due_soon += 1;
        }
        if task.due_date < now {
            overdue += 1;
        }
    }

    TaskAnalytics {
        total_tasks: tasks.len(),
        open_tasks,
        priority_distribution: vec![
            PriorityCount { priority: TaskPriority::High, count: high },
            PriorityCount { priority: TaskPriority::Medium, count: medium },
            PriorityCount { priority: TaskPriority::Low, count: low },
        ],
        due_soon,
        overdue,
    }
}

/// Sentence derivation. Every branch is an independent threshold check and
/// the output order is fixed.
pub fn build_insights(analytics: &TaskAnalytics) -> Vec<String> {
    let mut insights = Vec::new();

    if analytics.total_tasks > 0 {
        let completed = analytics.total_tasks - analytics.open_tasks;
        let completion_rate = completed as f64 / analytics.total_tasks as f64 * 100.0;
        insights.push(format!(
            "You've completed {completion_rate:.1}% of your total tasks."
        ));
    }

    let high = analytics.priority_count(TaskPriority::High);
    if high > 0 {
        insights.push(format!(
            "You have {high} high-priority tasks requiring immediate attention."
        ));
    }

    if analytics.due_soon > 0 {
        insights.push(format!(
            "⚠️ {} tasks are due in the next 7 days.",
            analytics.due_soon
        ));
    }

    if analytics.overdue > 0 {
        insights.push(format!(
            "🚨 {} tasks are overdue! Focus on completing these first.",
            analytics.overdue
        ));
    }

    // Workload tier — exactly one of these fires
    insights.push(match analytics.open_tasks {
        0 => "🎉 Excellent! You're all caught up with no pending tasks.".to_string(),
        1..=3 => "💪 You're doing great! Your workload is manageable.".to_string(),
        4..=7 => "📊 You have a moderate workload. Consider prioritizing tasks by due date."
            .to_string(),
        _ => "🔥 You have a heavy workload. Focus on high-priority tasks and consider delegating if possible."
            .to_string(),
    });

    // Priority focus: High wins over Medium
    let medium = analytics.priority_count(TaskPriority::Medium);
    if high > 0 {
        insights.push(format!(
            "🎯 Focus on completing your {high} high-priority task(s) first."
        ));
    } else if medium > 0 {
        insights.push(
            "👨‍💼 You can focus on medium-priority tasks as there are no urgent high-priority items."
                .to_string(),
        );
    }

    insights
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn task(priority: TaskPriority, status: TaskStatus, due_date: DateTime<Utc>) -> Task {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4(),
            title: "Task".to_string(),
            description: None,
            priority,
            due_date,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn analytics_counts_open_tasks_by_priority() {
        let now = Utc::now();
        let far = now + Duration::days(30);
        let tasks = vec![
            task(TaskPriority::High, TaskStatus::Open, far),
            task(TaskPriority::High, TaskStatus::InProgress, far),
            task(TaskPriority::Medium, TaskStatus::Open, far),
            task(TaskPriority::High, TaskStatus::Done, far),
        ];

        let analytics = compute_analytics(&tasks, now);
        assert_eq!(analytics.total_tasks, 4);
        assert_eq!(analytics.open_tasks, 3);
        assert_eq!(
            analytics.priority_distribution,
            vec![
                PriorityCount { priority: TaskPriority::High, count: 2 },
                PriorityCount { priority: TaskPriority::Medium, count: 1 },
                PriorityCount { priority: TaskPriority::Low, count: 0 },
            ]
        );
        assert_eq!(analytics.due_soon, 0);
        assert_eq!(analytics.overdue, 0);
    }

    #[test]
    fn analytics_due_soon_and_overdue_ignore_done() {
        let now = Utc::now();
        let tasks = vec![
            task(TaskPriority::Low, TaskStatus::Open, now + Duration::days(3)),
            task(TaskPriority::Low, TaskStatus::Open, now + Duration::days(10)),
            task(TaskPriority::Low, TaskStatus::InProgress, now - Duration::hours(1)),
            task(TaskPriority::Low, TaskStatus::Done, now - Duration::days(2)),
        ];

        let analytics = compute_analytics(&tasks, now);
        assert_eq!(analytics.due_soon, 1);
        assert_eq!(analytics.overdue, 1);
    }

    #[test]
    fn analytics_of_empty_collection_is_all_zero() {
        let analytics = compute_analytics(&[], Utc::now());
        assert_eq!(analytics.total_tasks, 0);
        assert_eq!(analytics.open_tasks, 0);
        assert_eq!(analytics.due_soon, 0);
        assert_eq!(analytics.overdue, 0);
        assert_eq!(analytics.priority_count(TaskPriority::High), 0);
    }

    #[test]
    fn insights_for_mixed_collection() {
        // 3 open (2 High, 1 Medium), 1 Done
        let now = Utc::now();
        let far = now + Duration::days(30);
        let tasks = vec![
            task(TaskPriority::High, TaskStatus::Open, far),
            task(TaskPriority::High, TaskStatus::Open, far),
            task(TaskPriority::Medium, TaskStatus::InProgress, far),
            task(TaskPriority::Low, TaskStatus::Done, far),
        ];

        let analytics = compute_analytics(&tasks, now);
        let insights = build_insights(&analytics);

        assert_eq!(
            insights[0],
            "You've completed 25.0% of your total tasks."
        );
        assert_eq!(
            insights[1],
            "You have 2 high-priority tasks requiring immediate attention."
        );
        assert_eq!(
            insights[2],
            "💪 You're doing great! Your workload is manageable."
        );
        assert_eq!(
            insights[3],
            "🎯 Focus on completing your 2 high-priority task(s) first."
        );
        assert_eq!(insights.len(), 4);
    }

    #[test]
    fn insights_for_empty_collection() {
        let insights = build_insights(&compute_analytics(&[], Utc::now()));
        assert_eq!(
            insights,
            vec!["🎉 Excellent! You're all caught up with no pending tasks.".to_string()]
        );
    }

    #[test]
    fn workload_tiers() {
        let now = Utc::now();
        let far = now + Duration::days(30);
        let open = |n: usize| -> Vec<Task> {
            (0..n)
                .map(|_| task(TaskPriority::Low, TaskStatus::Open, far))
                .collect()
        };

        let moderate = build_insights(&compute_analytics(&open(5), now));
        assert!(moderate.iter().any(|s| s.contains("moderate workload")));

        let heavy = build_insights(&compute_analytics(&open(8), now));
        assert!(heavy.iter().any(|s| s.contains("heavy workload")));
    }

    #[test]
    fn medium_focus_only_without_high() {
        let now = Utc::now();
        let far = now + Duration::days(30);
        let tasks = vec![task(TaskPriority::Medium, TaskStatus::Open, far)];

        let insights = build_insights(&compute_analytics(&tasks, now));
        assert!(insights
            .iter()
            .any(|s| s.contains("medium-priority tasks as there are no urgent")));
        assert!(!insights.iter().any(|s| s.contains("high-priority")));
    }

    #[test]
    fn due_warnings_present_when_counts_nonzero() {
        let now = Utc::now();
        let tasks = vec![
            task(TaskPriority::Low, TaskStatus::Open, now + Duration::days(2)),
            task(TaskPriority::Low, TaskStatus::Open, now - Duration::days(1)),
        ];

        let insights = build_insights(&compute_analytics(&tasks, now));
        assert!(insights
            .iter()
            .any(|s| s.contains("1 tasks are due in the next 7 days")));
        assert!(insights.iter().any(|s| s.contains("1 tasks are overdue")));
    }

    #[test]
    fn summary_joins_sentences_with_spaces() {
        let (data, path) = {
            let path = format!("/tmp/tasktracker_insight_{}.redb", std::process::id());
            let _ = std::fs::remove_file(&path);
            (DataContext::new(&path).unwrap(), path)
        };
        data.create_task(&task(
            TaskPriority::Medium,
            TaskStatus::Open,
            Utc::now() + Duration::days(30),
        ))
        .unwrap();

        let report = InsightService::new(data).generate_insights().unwrap();
        assert_eq!(report.summary, report.detailed_insights.join(" "));
        assert_eq!(report.analytics.open_tasks, 1);

        let _ = std::fs::remove_file(&path);
    }
}
