// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The single-file HTML dashboard.

use wb_core::{RepoSummary, Report, Status, StatusGroup, TaskType, Violation, WorkItem};

use super::{el, safe_url, script_json, Markup};
use crate::config::ReportConfig;
use crate::error::Result;

/// Element id of the embedded status-count JSON block.
pub const STATUS_COUNTS_ID: &str = "status-counts";

const STYLESHEET: &str = include_str!("../../assets/report.css");

/// Presentation settings that are not part of the report data.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub title: &'a str,
    pub zone_label: &'a str,
}

impl<'a> From<&'a ReportConfig> for RenderOptions<'a> {
    fn from(config: &'a ReportConfig) -> Self {
        RenderOptions {
            title: &config.title,
            zone_label: &config.zone_label,
        }
    }
}

/// Render `report` as a complete HTML document.
pub fn render_report(report: &Report<'_>, options: &RenderOptions<'_>) -> Result<String> {
    let head = el("head")
        .child(el("meta").attr("charset", "utf-8").void())
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1")
                .void(),
        )
        .child(el("title").text(options.title))
        .child(el("style").child(Markup::raw(STYLESHEET)));

    let body = el("body").child(
        el("div")
            .class("wrap")
            .child(header(report, options))
            .child(
                el("script")
                    .attr("type", "application/json")
                    .attr("id", STATUS_COUNTS_ID)
                    .child(script_json(&report.counts)?),
            )
            .child(violations_panel(&report.violations))
            .child(el("h2").class("section").text("Repositories"))
            .child(repository_table(&report.repositories))
            .child(el("h2").class("section").text("Items"))
            .children(report.groups.iter().map(status_group)),
    );

    let mut doc = Markup::raw("<!doctype html>\n");
    doc.push(el("html").attr("lang", "en").child(head).child(body));
    doc.push_raw("\n");
    Ok(doc.into_string())
}

fn header(report: &Report<'_>, options: &RenderOptions<'_>) -> Markup {
    let generated = format!(
        "{} {}",
        report.generated_at.format("%Y-%m-%d %H:%M"),
        options.zone_label
    );
    let meta = el("div")
        .class("meta")
        .text("Generated: ")
        .child(el("b").text(&generated))
        .child(el("br").void())
        .text("Total (reported): ")
        .child(el("b").text(&report.reported_total.to_string()))
        .text(" / Items (processed): ")
        .child(el("b").text(&report.processed.to_string()));

    let cards = report.counts.iter().map(|(status, count)| {
        el("div")
            .class(card_class(status))
            .child(el("div").class("k").text(status.as_str()))
            .child(el("div").class("v").text(&count.to_string()))
            .child(el("div").class("r").text(&share(report.counts.ratio(status))))
    });

    el("header")
        .child(el("h1").text(options.title))
        .child(meta)
        .child(el("div").class("grid").children(cards))
        .build()
}

fn violations_panel(violations: &[Violation]) -> Markup {
    let panel = el("section")
        .class("panel")
        .child(el("h2").text("Rule violations"));
    if violations.is_empty() {
        return panel.child(el("p").class("ok").text("None")).build();
    }
    let rows = violations.iter().map(|v| el("li").text(&v.message()));
    panel.child(el("ul").class("violations").children(rows)).build()
}

fn repository_table(repositories: &[RepoSummary]) -> Markup {
    if repositories.is_empty() {
        return el("p").class("muted").text("No items").build();
    }
    let head = el("tr")
        .child(el("th").text("Repository"))
        .children(Status::ALL.iter().map(|s| el("th").class("num").text(s.as_str())))
        .child(el("th").class("num").text("Total"));

    let rows = repositories.iter().map(|summary| {
        let repo_class = if summary.repository.is_unknown() {
            "repo unknown-repo"
        } else {
            "repo"
        };
        el("tr")
            .child(el("td").class(repo_class).text(summary.repository.name()))
            .children(
                summary
                    .counts
                    .iter()
                    .map(|(_, n)| el("td").class("num").text(&n.to_string())),
            )
            .child(el("td").class("num total").text(&summary.total.to_string()))
    });

    el("table")
        .class("repos")
        .child(el("thead").child(head))
        .child(el("tbody").children(rows))
        .build()
}

fn status_group(group: &StatusGroup<'_>) -> Markup {
    let summary = el("summary")
        .child(el("span").class(pill_class(group.status)).text(group.status.as_str()))
        .child(el("span").class("count").text(&group.len().to_string()));

    let head = el("tr")
        .child(el("th").text("Status"))
        .child(el("th").text("Type"))
        .child(el("th").class("num").text("#"))
        .child(el("th").text("Title"));

    el("details")
        .class("group")
        .flag_if("open", opens_by_default(group.status))
        .child(summary)
        .child(
            el("table")
                .class("items")
                .child(el("thead").child(head))
                .child(el("tbody").children(group.items.iter().map(|it| item_row(it)))),
        )
        .build()
}

fn item_row(item: &WorkItem) -> Markup {
    let status = item.status();
    let number = match item.content.number {
        Some(n) => format!("#{}", n),
        None => "-".to_string(),
    };

    let title = match safe_url(item.url()) {
        Some(url) => el("a")
            .attr("href", url)
            .attr("rel", "noopener noreferrer")
            .text(item.display_title()),
        None => el("span").text(item.display_title()),
    };
    let repo = item.repo_key();
    let repo_class = if repo.is_unknown() {
        "sub unknown-repo"
    } else {
        "sub"
    };
    let mut cell = el("td")
        .class("tl")
        .child(title)
        .child(el("div").class(repo_class).text(repo.name()));
    let body = item.body().trim();
    if !body.is_empty() {
        cell = cell.child(
            el("details")
                .class("body")
                .child(el("summary").text("Details"))
                .child(el("pre").text(body)),
        );
    }

    let task_type = item.task_type();
    el("tr")
        .child(el("td").child(el("span").class(pill_class(status)).text(status.as_str())))
        .child(el("td").child(el("span").class(type_class(task_type)).text(task_type.as_str())))
        .child(el("td").class("num").text(&number))
        .child(cell)
        .build()
}

/// Active work starts expanded; finished and unclassified work collapsed.
/// Whole-percent share of the processed items.
fn share(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn opens_by_default(status: Status) -> bool {
    !matches!(status, Status::Done | Status::Unknown)
}

fn card_class(status: Status) -> &'static str {
    match status {
        Status::Inbox => "card st-inbox",
        Status::Ready => "card st-ready",
        Status::Doing => "card st-doing",
        Status::Blocked => "card st-blocked",
        Status::Done => "card st-done",
        Status::Unknown => "card st-unknown",
    }
}

fn pill_class(status: Status) -> &'static str {
    match status {
        Status::Inbox => "pill st-inbox",
        Status::Ready => "pill st-ready",
        Status::Doing => "pill st-doing",
        Status::Blocked => "pill st-blocked",
        Status::Done => "pill st-done",
        Status::Unknown => "pill st-unknown",
    }
}

fn type_class(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::Investigate => "tp tp-investigate",
        TaskType::Decide => "tp tp-decide",
        TaskType::Implement => "tp tp-implement",
        TaskType::Verify => "tp tp-verify",
        TaskType::Unknown => "tp tp-unknown",
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
