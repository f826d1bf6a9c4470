// src/services/dashboard_service.rs
//
// Pure folds over the four independently fetched collections. Each caller
// fetch may have degraded to an empty vec, so partial data never blocks the
// dashboard; everything here is total and recomputed on every request.

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::Decimal;

use crate::models::{
    dashboard::{ActivityEntry, ActivityKind, DashboardStats},
    invoice::{InvoiceStatus, InvoiceWithProject},
    project::{ProjectStatus, ProjectWithClient},
    scope_request::{ScopeRequestWithProject, ScopeStatus},
    time_log::TimeLogWithProject,
};

pub fn active_project_count(projects: &[ProjectWithClient]) -> usize {
    projects
        .iter()
        .filter(|p| p.project.status == ProjectStatus::Active)
        .count()
}

// Sum of logged minutes inside the trailing 7x24h window, as hours.
// Strictly greater-than: a log exactly seven days old does not count.
pub fn weekly_hours(logs: &[TimeLogWithProject], now: DateTime<Utc>) -> f64 {
    let cutoff = now - Duration::days(7);
    let minutes: i64 = logs
        .iter()
        .filter(|l| l.log.start_time > cutoff)
        .map(|l| i64::from(l.log.duration.unwrap_or(0)))
        .sum();
    minutes as f64 / 60.0
}

pub fn pending_request_count(requests: &[ScopeRequestWithProject]) -> usize {
    requests
        .iter()
        .filter(|r| r.request.status == ScopeStatus::Pending)
        .count()
}

pub fn overdue_invoice_count(invoices: &[InvoiceWithProject]) -> usize {
    invoices
        .iter()
        .filter(|i| i.invoice.status == InvoiceStatus::Overdue)
        .count()
}

// Paid invoices whose payment instant (paid_at, falling back to created_at)
// lands in the current calendar month. Year and month both compared, so last
// January is not this January.
pub fn monthly_earnings(invoices: &[InvoiceWithProject], now: DateTime<Utc>) -> Decimal {
    invoices
        .iter()
        .filter(|i| i.invoice.status == InvoiceStatus::Paid)
        .filter(|i| {
            let paid = i.invoice.paid_at.unwrap_or(i.invoice.created_at);
            paid.year() == now.year() && paid.month() == now.month()
        })
        .map(|i| i.invoice.amount)
        .sum()
}

pub fn stats(
    projects: &[ProjectWithClient],
    logs: &[TimeLogWithProject],
    requests: &[ScopeRequestWithProject],
    invoices: &[InvoiceWithProject],
    monthly_goal: Decimal,
    now: DateTime<Utc>,
) -> DashboardStats {
    DashboardStats {
        active_projects: active_project_count(projects),
        weekly_hours: weekly_hours(logs, now),
        pending_requests: pending_request_count(requests),
        overdue_invoices: overdue_invoice_count(invoices),
        monthly_earnings: monthly_earnings(invoices, now),
        monthly_goal,
    }
}

// First three items from each source, concatenated in source order. The feed
// is not re-sorted chronologically across sources.
pub fn recent_activity(
    logs: &[TimeLogWithProject],
    requests: &[ScopeRequestWithProject],
    invoices: &[InvoiceWithProject],
) -> Vec<ActivityEntry> {
    let mut feed = Vec::with_capacity(9);

    for l in logs.iter().take(3) {
        feed.push(ActivityEntry {
            id: format!("t-{}", l.log.id),
            kind: ActivityKind::TimeLog,
            title: "Work session completed".to_string(),
            description: l
                .log
                .description
                .clone()
                .unwrap_or_else(|| "Time logged".to_string()),
            timestamp: l.log.start_time,
            status: None,
            project: Some(l.project.name.clone()),
        });
    }

    for r in requests.iter().take(3) {
        feed.push(ActivityEntry {
            id: format!("s-{}", r.request.id),
            kind: ActivityKind::ScopeRequest,
            title: "Scope request updated".to_string(),
            description: r.request.title.clone(),
            timestamp: r.request.created_at,
            status: Some(r.request.status.as_str().to_string()),
            project: Some(r.project.name.clone()),
        });
    }

    for i in invoices.iter().take(3) {
        feed.push(ActivityEntry {
            id: format!("i-{}", i.invoice.id),
            kind: ActivityKind::Invoice,
            title: "Invoice status".to_string(),
            description: i.invoice.invoice_number.clone(),
            timestamp: i.invoice.created_at,
            status: Some(i.invoice.status.as_str().to_string()),
            project: Some(i.project.name.clone()),
        });
    }

    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        client::ClientRef,
        invoice::Invoice,
        project::{Project, ProjectRef, ProjectType},
        scope_request::ScopeRequest,
        time_log::TimeLog,
    };
    use uuid::Uuid;

    fn client_ref() -> ClientRef {
        ClientRef {
            id: Uuid::new_v4(),
            name: "TechCorp Inc.".to_string(),
            company: None,
        }
    }

    fn project_ref() -> ProjectRef {
        ProjectRef {
            id: Uuid::new_v4(),
            name: "E-commerce Website Redesign".to_string(),
            client: client_ref(),
        }
    }

    fn project(status: ProjectStatus, estimated: Option<f64>, actual: f64) -> ProjectWithClient {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "P".to_string(),
            description: None,
            status,
            project_type: ProjectType::Hourly,
            hourly_rate: None,
            fixed_price: None,
            start_date: now,
            end_date: None,
            estimated_hours: estimated,
            actual_hours: actual,
            created_at: now,
            updated_at: now,
        };
        let progress = project.progress();
        ProjectWithClient {
            client: client_ref(),
            progress,
            project,
        }
    }

    fn time_log(start: DateTime<Utc>, minutes: i32) -> TimeLogWithProject {
        TimeLogWithProject {
            log: TimeLog {
                id: Uuid::new_v4(),
                project_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                description: Some("work".to_string()),
                start_time: start,
                end_time: Some(start),
                duration: Some(minutes),
                is_running: false,
                created_at: start,
            },
            project: project_ref(),
        }
    }

    fn invoice(status: InvoiceStatus, amount: i64, paid_at: Option<DateTime<Utc>>) -> InvoiceWithProject {
        let now = Utc::now();
        InvoiceWithProject {
            invoice: Invoice {
                id: Uuid::new_v4(),
                project_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                invoice_number: "INV-1".to_string(),
                amount: Decimal::from(amount),
                hours: 0.0,
                scope_charges: Decimal::ZERO,
                status,
                due_date: now,
                paid_at,
                payment_link: None,
                created_at: now,
                updated_at: now,
            },
            project: project_ref(),
        }
    }

    fn scope_request(status: ScopeStatus) -> ScopeRequestWithProject {
        let now = Utc::now();
        ScopeRequestWithProject {
            request: ScopeRequest {
                id: Uuid::new_v4(),
                project_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                title: "More scope".to_string(),
                description: "d".to_string(),
                estimated_hours: 8.0,
                hourly_rate: Decimal::from(75),
                total_cost: Decimal::from(600),
                status,
                client_approved: false,
                created_at: now,
                updated_at: now,
            },
            project: project_ref(),
        }
    }

    #[test]
    fn weekly_hours_excludes_logs_older_than_seven_days() {
        let now = Utc::now();
        let logs = vec![
            time_log(now - Duration::days(6), 120),
            time_log(now - Duration::days(8), 120),
        ];
        assert_eq!(weekly_hours(&logs, now), 2.0);
    }

    #[test]
    fn weekly_hours_window_is_strict() {
        let now = Utc::now();
        let logs = vec![time_log(now - Duration::days(7), 60)];
        assert_eq!(weekly_hours(&logs, now), 0.0);
    }

    #[test]
    fn weekly_hours_treats_missing_duration_as_zero() {
        let now = Utc::now();
        let mut log = time_log(now - Duration::hours(1), 0);
        log.log.duration = None;
        assert_eq!(weekly_hours(&[log], now), 0.0);
    }

    #[test]
    fn progress_is_clamped_at_one() {
        let p = project(ProjectStatus::Active, Some(80.0), 100.0);
        assert_eq!(p.progress, Some(1.0));
    }

    #[test]
    fn progress_is_omitted_without_an_estimate() {
        let p = project(ProjectStatus::Active, None, 10.0);
        assert_eq!(p.progress, None);
    }

    #[test]
    fn monthly_earnings_only_counts_paid_invoices_from_this_month() {
        // Anchored mid-month so the 20-day offset always leaves the month.
        let now = Utc::now()
            .with_day(15)
            .expect("day 15 exists in every month");
        let invoices = vec![
            invoice(InvoiceStatus::Paid, 100, Some(now)),
            invoice(InvoiceStatus::Paid, 50, Some(now - Duration::days(20))),
            invoice(InvoiceStatus::Sent, 999, Some(now)),
        ];
        assert_eq!(monthly_earnings(&invoices, now), Decimal::from(100));
    }

    #[test]
    fn monthly_earnings_falls_back_to_created_at() {
        let now = Utc::now();
        let invoices = vec![invoice(InvoiceStatus::Paid, 42, None)];
        assert_eq!(monthly_earnings(&invoices, now), Decimal::from(42));
    }

    #[test]
    fn counts_by_status() {
        let projects = vec![
            project(ProjectStatus::Active, None, 0.0),
            project(ProjectStatus::Completed, None, 0.0),
            project(ProjectStatus::Active, None, 0.0),
        ];
        assert_eq!(active_project_count(&projects), 2);

        let requests = vec![
            scope_request(ScopeStatus::Pending),
            scope_request(ScopeStatus::Approved),
        ];
        assert_eq!(pending_request_count(&requests), 1);

        let invoices = vec![
            invoice(InvoiceStatus::Overdue, 10, None),
            invoice(InvoiceStatus::Draft, 10, None),
        ];
        assert_eq!(overdue_invoice_count(&invoices), 1);
    }

    #[test]
    fn recent_activity_takes_three_per_source_in_source_order() {
        let now = Utc::now();
        let logs: Vec<_> = (0..5).map(|i| time_log(now - Duration::hours(i), 30)).collect();
        let requests = vec![scope_request(ScopeStatus::Pending)];
        let invoices = vec![invoice(InvoiceStatus::Sent, 10, None)];

        let feed = recent_activity(&logs, &requests, &invoices);
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].kind, ActivityKind::TimeLog);
        assert_eq!(feed[2].kind, ActivityKind::TimeLog);
        assert_eq!(feed[3].kind, ActivityKind::ScopeRequest);
        assert_eq!(feed[3].status.as_deref(), Some("pending"));
        assert_eq!(feed[4].kind, ActivityKind::Invoice);
    }
}
