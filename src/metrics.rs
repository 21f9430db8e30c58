use crate::models::{AgentRate, DurationPoint, MetricsResponse, SentimentSlice, StatCard};
use chrono::{Datelike, Duration, Local, NaiveDate};

pub fn build_metrics() -> MetricsResponse {
    build_metrics_at(Local::now().date_naive())
}

pub fn build_metrics_at(today: NaiveDate) -> MetricsResponse {
    MetricsResponse {
        week: week_label(week_start(today)),
        stats: stat_cards(),
        duration: duration_series(),
        success: success_series(),
        sentiment: sentiment_series(),
    }
}

fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Calls",
            value: "12,543",
            change: "+12.5%",
        },
        StatCard {
            label: "Success Rate",
            value: "94.2%",
            change: "+2.3%",
        },
        StatCard {
            label: "Active Agents",
            value: "24",
            change: "+4",
        },
        StatCard {
            label: "Avg Duration",
            value: "4.2m",
            change: "-0.5m",
        },
    ]
}

fn duration_series() -> Vec<DurationPoint> {
    [
        ("00:00", 3.2),
        ("04:00", 2.8),
        ("08:00", 4.5),
        ("12:00", 5.2),
        ("16:00", 4.8),
        ("20:00", 3.5),
    ]
    .into_iter()
    .map(|(time, minutes)| DurationPoint { time, minutes })
    .collect()
}

fn success_series() -> Vec<AgentRate> {
    [
        ("Agent 1", 96),
        ("Agent 2", 94),
        ("Agent 3", 92),
        ("Agent 4", 98),
        ("Agent 5", 91),
    ]
    .into_iter()
    .map(|(agent, rate)| AgentRate { agent, rate })
    .collect()
}

fn sentiment_series() -> Vec<SentimentSlice> {
    [("Positive", 68), ("Neutral", 24), ("Negative", 8)]
        .into_iter()
        .map(|(name, share)| SentimentSlice { name, share })
        .collect()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
