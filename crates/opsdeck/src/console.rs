//! Terminal panel renderer.
//!
//! Each panel update is an idempotent rewrite of that panel's block of
//! output: stale updates for an off-screen view print harmlessly and are
//! superseded by the next cycle.

use opsdeck_core::model::{StatusIndicator, StatusSummary};
use opsdeck_core::registry::Panel;
use opsdeck_core::render::{ChartKey, HandleTable, PanelSink, PanelUpdate, Series};

use crate::format::{bar, format_countdown, format_uptime, sparkline, trend_marker};

pub struct ConsoleSink {
    charts: HandleTable,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            charts: HandleTable::new(),
        }
    }

    /// Discard all chart handles. Called when the session ends.
    pub fn clear_charts(&mut self) {
        self.charts.clear();
    }

    fn render_status(&self, status: &StatusSummary) {
        let marker = match status.indicator() {
            StatusIndicator::Online => "● online",
            StatusIndicator::Paused => "◐ paused",
            StatusIndicator::Stopped => "■ STOPPED",
        };
        println!(
            "{} | mode {} | up {} | v{}",
            marker,
            status.mode_display(),
            format_uptime(status.uptime_seconds),
            status.version.as_deref().unwrap_or("?"),
        );
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSink for ConsoleSink {
    fn apply(&mut self, update: PanelUpdate) {
        match update {
            PanelUpdate::Status(status) => self.render_status(&status),

            PanelUpdate::Stats { summary, derived } => {
                let mut line = String::new();
                for card in &derived.cards {
                    line.push_str(&format!(
                        "  {} {} {} {}",
                        card.label,
                        card.value,
                        trend_marker(&card.trend),
                        sparkline(&card.history),
                    ));
                }
                println!("stats:{line}");

                let chart = self.charts.upsert(ChartKey::Actions);
                chart.update(
                    summary.by_type.keys().cloned().collect(),
                    vec![Series {
                        name: "actions".to_string(),
                        points: summary.by_type.values().map(|v| *v as f64).collect(),
                    }],
                );
            }

            PanelUpdate::Timeline(history) => {
                let window = history.recent(72);
                let labels = window.iter().map(|p| p.label().to_string()).collect();
                let reddit: Vec<f64> = window.iter().map(|p| p.reddit as f64).collect();
                let telegram: Vec<f64> = window.iter().map(|p| p.telegram as f64).collect();
                let chart = self.charts.upsert(ChartKey::Timeline);
                chart.update(
                    labels,
                    vec![
                        Series {
                            name: "reddit".to_string(),
                            points: reddit,
                        },
                        Series {
                            name: "telegram".to_string(),
                            points: telegram,
                        },
                    ],
                );
                for series in &chart.series {
                    println!("timeline {:>9}: {}", series.name, sparkline(&series.points));
                }
            }

            PanelUpdate::Minimaps(summary) => {
                let max = summary
                    .reddit
                    .iter()
                    .map(|s| s.count_24h)
                    .max()
                    .unwrap_or(1)
                    .max(1);
                for sub in &summary.reddit {
                    println!(
                        "  r/{:<20} {} {:>4} {}",
                        sub.subreddit,
                        bar(sub.count_24h as f64 / max as f64, 12),
                        sub.count_24h,
                        sub.stage.as_deref().unwrap_or(""),
                    );
                }
                for group in &summary.telegram.groups {
                    println!("  tg {:<20} {:>4}", group.display_name(), group.count);
                }
            }

            PanelUpdate::Schedule { jobs, full } => {
                let title = if full { "schedule (all)" } else { "schedule" };
                if jobs.is_empty() {
                    println!("{title}: no scheduled jobs");
                } else {
                    for job in &jobs {
                        println!(
                            "  {:<24} {:>8} {}",
                            job.name,
                            format_countdown(job.seconds_until),
                            job.interval.as_deref().unwrap_or(""),
                        );
                    }
                }
            }

            PanelUpdate::AccountPerformance(accounts) => {
                for account in &accounts {
                    println!(
                        "  @{:<18} {:<8} 24h:{:<4} ok:{:.0}%{}",
                        account.username,
                        account.status,
                        account.total_24h,
                        account.success_rate * 100.0,
                        if account.has_reddit_session {
                            ""
                        } else {
                            " NO SESSION"
                        },
                    );
                }
            }

            PanelUpdate::Heatmap(heatmap) => {
                println!("heatmap: {} active cells", heatmap.grid.len());
            }

            PanelUpdate::Funnel(funnel) => {
                let rates = funnel.stage_rates();
                for (stage, rate) in funnel.stages.iter().zip(rates) {
                    match rate {
                        Some(pct) => println!("  {:<12} {:>6} ({pct}%)", stage.name, stage.count),
                        None => println!("  {:<12} {:>6}", stage.name, stage.count),
                    }
                }
            }

            PanelUpdate::Actions(actions) => {
                for action in actions.iter().take(50) {
                    println!(
                        "  {} {} {} {}",
                        action.created_at.as_deref().unwrap_or("--:--"),
                        action.action_type.as_deref().unwrap_or("?"),
                        action.platform.as_deref().unwrap_or(""),
                        action.location().unwrap_or(""),
                    );
                }
            }

            PanelUpdate::Conversations(convos) => {
                for dm in &convos.dms {
                    let dir = if dm.is_outbound() { "▸" } else { "◂" };
                    println!("  {dir} {} ({}): {}", dm.username, dm.platform, dm.content);
                }
                for alert in &convos.alerts {
                    println!("  ! {}", alert.message);
                }
            }

            PanelUpdate::Brain(brain) => {
                println!(
                    "brain: tone {} | discoveries {} | relationships {} ({} friends)",
                    brain.best_tone.as_deref().unwrap_or("n/a"),
                    brain.discoveries,
                    brain.relationships.total,
                    brain.relationships.friends,
                );
            }

            PanelUpdate::Performance(perf) => {
                println!("performance: {} ({}/100)", perf.grade, perf.score);
                for component in perf.components.keys() {
                    println!("  {:<12} {:>3}%", component, perf.component_percent(component));
                }
            }

            PanelUpdate::Insights(insights) => {
                for sub in insights.top_subreddits.iter().take(5) {
                    println!(
                        "  r/{:<18} {:.1}",
                        sub.subreddit.as_deref().unwrap_or("?"),
                        sub.avg_engagement,
                    );
                }
            }

            PanelUpdate::Opportunities(opps) => {
                for opp in opps.iter().take(25) {
                    println!(
                        "  {:>4.1} {:<10} {}",
                        opp.score,
                        opp.platform.as_deref().unwrap_or(""),
                        opp.excerpt(),
                    );
                }
            }

            PanelUpdate::Decisions(decisions) => {
                for decision in decisions.iter().take(40) {
                    println!(
                        "  {} [{:?}] {}",
                        decision.timestamp.as_deref().unwrap_or("--:--"),
                        decision.kind(),
                        decision.details.as_deref().unwrap_or(""),
                    );
                }
            }

            PanelUpdate::Communities(communities) => {
                for community in &communities {
                    println!(
                        "  r/{:<20} setup {:>3}% posts {}",
                        community.subreddit,
                        community.setup_percent(),
                        community.post_count,
                    );
                }
            }

            PanelUpdate::TakeoverTargets(targets) => {
                for target in &targets {
                    println!("  {:>4.1} r/{}", target.takeover_score, target.subreddit);
                }
            }

            PanelUpdate::TakeoverRequests(requests) => {
                for request in &requests {
                    println!(
                        "  r/{:<20} {}",
                        request.subreddit,
                        request.status.as_deref().unwrap_or("pending"),
                    );
                }
            }

            PanelUpdate::Projects(projects) => {
                for project in &projects {
                    println!(
                        "  {:<20} {} {:>4}/24h w{:.1}",
                        project.name,
                        if project.enabled { "on " } else { "off" },
                        project.actions_24h,
                        project.weight,
                    );
                }
            }

            PanelUpdate::Accounts(accounts) => {
                for account in accounts.iter().filter(|a| a.platform != "twitter") {
                    println!(
                        "  @{:<18} {:<10} {:<8} 24h:{}",
                        account.username, account.platform, account.status, account.total_24h,
                    );
                }
            }

            PanelUpdate::Cookies(cookies) => {
                for cookie in cookies.iter().filter(|c| c.platform != "twitter") {
                    if cookie.has_cookies {
                        println!(
                            "  @{:<18} {} cookies",
                            cookie.username,
                            cookie.count.unwrap_or(0),
                        );
                    } else {
                        println!("  @{:<18} no cookies — login required", cookie.username);
                    }
                }
            }

            PanelUpdate::Server(server) => {
                println!(
                    "server: cpu {:.0}% | ram {:.0}% | disk {:.0}% | rss {}MB | db {:.0}MB",
                    server.cpu.usage_pct,
                    server.ram.percent,
                    server.disk.percent,
                    server.process.rss_mb,
                    server.database.size_mb,
                );
                if server.history.len() > 2 {
                    let chart = self.charts.upsert(ChartKey::Resources);
                    chart.update(
                        server.history.iter().map(|s| s.ts.clone()).collect(),
                        vec![
                            Series {
                                name: "cpu".to_string(),
                                points: server.history.iter().map(|s| s.cpu).collect(),
                            },
                            Series {
                                name: "ram".to_string(),
                                points: server.history.iter().map(|s| s.ram).collect(),
                            },
                        ],
                    );
                    for series in &chart.series {
                        println!("  {:>3}: {}", series.name, sparkline(&series.points));
                    }
                }
            }

            PanelUpdate::Network(graph) => {
                println!(
                    "network: {} nodes, {} links",
                    graph.nodes.len(),
                    graph.links.len(),
                );
            }

            PanelUpdate::Unavailable { panel } => {
                println!("{}: no data available", panel_label(panel));
            }
        }
    }
}

fn panel_label(panel: Panel) -> &'static str {
    match panel {
        Panel::Status => "status",
        Panel::Stats => "stats",
        Panel::Minimaps => "minimaps",
        Panel::Schedule | Panel::ScheduleFull => "schedule",
        Panel::Timeline => "timeline",
        Panel::AccountPerformance => "account performance",
        Panel::Heatmap => "heatmap",
        Panel::Funnel => "funnel",
        Panel::Actions => "actions",
        Panel::Conversations => "conversations",
        Panel::Brain => "brain",
        Panel::Performance => "performance",
        Panel::Insights => "insights",
        Panel::Opportunities => "opportunities",
        Panel::Decisions => "decisions",
        Panel::Communities => "communities",
        Panel::TakeoverTargets => "takeover targets",
        Panel::TakeoverRequests => "takeover requests",
        Panel::Projects => "projects",
        Panel::Accounts => "accounts",
        Panel::Cookies => "cookies",
        Panel::Server => "server",
        Panel::Network => "network",
    }
}
