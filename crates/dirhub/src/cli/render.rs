//! Text rendering for the CLI.
//!
//! Every function here takes library data and returns a `String`; printing is
//! left to the handlers. JSON output bypasses this module and serializes the
//! library types directly.

use super::styles;
use chrono::NaiveDate;
use dirhubapp::model::{
    DashboardStats, Directory, DirectoryRecord, DirectoryStats, DirectoryStatus, ItemRecord,
};
use dirhubapp::notify::{Notice, NoticeLevel, Notifier};
use dirhubapp::pricing::Tier;
use dirhubapp::views::{BrowseView, DashboardView, DirectoryPage, ItemDetail};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const TITLE_WIDTH: usize = 30;
const CATEGORY_WIDTH: usize = 16;

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left-align `text` in a column of `width` terminal cells.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let fill = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(fill))
}

/// "3 months ago" style age of a creation date.
pub fn format_age(created: NaiveDate, today: NaiveDate) -> String {
    let days = (today - created).num_days().max(0) as u64;
    if days == 0 {
        return "today".to_string();
    }
    let formatter = timeago::Formatter::new();
    formatter.convert(std::time::Duration::from_secs(days * 86_400))
}

fn status_label(status: DirectoryStatus) -> String {
    let text = format!("{:<8}", status.as_str());
    let style = match status {
        DirectoryStatus::Active => &*styles::ACTIVE,
        DirectoryStatus::Draft => &*styles::DRAFT,
        DirectoryStatus::Inactive => &*styles::INACTIVE,
    };
    style.apply_to(text).to_string()
}

/// Humanise a custom field key: `serviceArea` becomes `Service Area`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else if c == '_' || c == '-' {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

pub fn directory_row(record: &DirectoryRecord, today: NaiveDate) -> String {
    let dir = &record.directory;
    format!(
        "{} {} {} {:>5} items {:>7} views  {}",
        styles::ID.apply_to(format!("{:>3}", dir.id)),
        pad_to_width(&dir.name, NAME_WIDTH),
        status_label(dir.status),
        record.item_count,
        dir.views,
        styles::MUTED.apply_to(format_age(dir.created_at, today)),
    )
}

pub fn directory_list(records: &[DirectoryRecord], today: NaiveDate) -> String {
    if records.is_empty() {
        return styles::MUTED.apply_to("No directories found.\n").to_string();
    }
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", directory_row(record, today));
    }
    out
}

pub fn dashboard_stats(stats: &DashboardStats) -> String {
    format!(
        "{} directories · {} items · {} views · {} featured\n",
        stats.total_directories, stats.total_items, stats.total_views, stats.featured_items
    )
}

pub fn directory_stats(stats: &DirectoryStats) -> String {
    format!(
        "{} items · {} views · {} featured · {} categories\n",
        stats.total_items, stats.total_views, stats.featured_items, stats.total_categories
    )
}

pub fn dashboard(view: &DashboardView, shown: &[DirectoryRecord], today: NaiveDate) -> String {
    let mut out = dashboard_stats(&view.stats);
    out.push('\n');
    out.push_str(&directory_list(shown, today));
    out
}

pub fn browse(view: &BrowseView, visible: &[DirectoryRecord], today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styles::TITLE.apply_to("Featured"));
    for record in view.featured() {
        let _ = writeln!(
            out,
            "  {} {}",
            styles::FEATURED.apply_to("★"),
            record.directory.name
        );
    }

    let _ = writeln!(out, "\n{}", styles::TITLE.apply_to("Categories"));
    for count in view.category_counts() {
        let _ = writeln!(
            out,
            "  {} {:>3}  {}",
            pad_to_width(&count.name, 20),
            count.count,
            styles::MUTED.apply_to(&count.id)
        );
    }

    let _ = writeln!(out, "\n{}", styles::TITLE.apply_to("Directories"));
    out.push_str(&directory_list(visible, today));
    out
}

pub fn item_row(record: &ItemRecord) -> String {
    let item = &record.item;
    let marker = if item.featured {
        styles::FEATURED.apply_to("★").to_string()
    } else {
        " ".to_string()
    };
    format!(
        "{} {} {} {} {:>6} views",
        styles::ID.apply_to(format!("{:>3}", item.id)),
        marker,
        pad_to_width(&item.title, TITLE_WIDTH),
        styles::MUTED.apply_to(pad_to_width(&record.category_name, CATEGORY_WIDTH)),
        item.views,
    )
}

pub fn item_list(records: &[ItemRecord]) -> String {
    if records.is_empty() {
        return styles::MUTED.apply_to("No items found.\n").to_string();
    }
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", item_row(record));
    }
    out
}

pub fn directory_page(page: &DirectoryPage, visible: &[ItemRecord], today: NaiveDate) -> String {
    let dir = &page.directory.directory;
    let mut out = String::new();
    let _ = writeln!(out, "{}", styles::TITLE.apply_to(&dir.name));
    if !dir.description.is_empty() {
        let _ = writeln!(out, "{}", dir.description);
    }
    let _ = writeln!(
        out,
        "{}",
        styles::MUTED.apply_to(format!(
            "/{} · created {}",
            dir.slug,
            format_age(dir.created_at, today)
        ))
    );
    out.push_str(&directory_stats(&page.stats));

    if !page.categories.is_empty() {
        let names: Vec<&str> = page.categories.iter().map(|c| c.name.as_str()).collect();
        let _ = writeln!(out, "Categories: {}", names.join(", "));
    }

    let _ = writeln!(out, "\n{}", styles::TITLE.apply_to("Featured Listings"));
    let featured = page.featured_items();
    if featured.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            styles::MUTED.apply_to("No featured listings at the moment.")
        );
    }
    for record in featured {
        let _ = writeln!(out, "{}", item_row(record));
    }

    let _ = writeln!(out, "\n{}", styles::TITLE.apply_to("All Listings"));
    out.push_str(&item_list(visible));
    out
}

pub fn item_detail(detail: &ItemDetail) -> String {
    let item = &detail.item.item;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        styles::MUTED.apply_to(format!("Browse › {} › {}", detail.directory.directory.name, item.title))
    );
    let _ = write!(out, "{}", styles::TITLE.apply_to(&item.title));
    if item.featured {
        let _ = write!(out, " {}", styles::FEATURED.apply_to("★ featured"));
    }
    out.push('\n');
    if !item.description.is_empty() {
        let _ = writeln!(out, "{}", item.description);
    }
    let _ = writeln!(
        out,
        "Category: {} · {} views",
        detail.item.category_name, item.views
    );
    if let Some(image) = &item.image {
        let _ = writeln!(out, "Image: {}", image);
    }
    for (key, value) in &item.custom_fields {
        let _ = writeln!(out, "{}: {}", humanize_key(key), value);
    }
    out
}

pub fn directory(dir: &Directory) -> String {
    format!(
        "{} {} {} /{}\n",
        styles::ID.apply_to(format!("{:>3}", dir.id)),
        styles::TITLE.apply_to(&dir.name),
        status_label(dir.status),
        dir.slug
    )
}

pub fn pricing(tiers: &[Tier], selected: &str) -> String {
    let mut out = String::new();
    for tier in tiers {
        let marker = if tier.key() == selected { "▶" } else { " " };
        let _ = write!(
            out,
            "{} {} {}{}",
            marker,
            styles::TITLE.apply_to(tier.name),
            tier.price,
            styles::MUTED.apply_to(format!("/{}", tier.period))
        );
        if tier.popular {
            let _ = write!(out, "  {}", styles::FEATURED.apply_to("Most Popular"));
        }
        let _ = writeln!(out, "\n  {}", tier.description);
        for feature in &tier.features {
            let _ = writeln!(out, "  {} {}", styles::SUCCESS.apply_to("✓"), feature);
        }
        for limitation in &tier.limitations {
            let _ = writeln!(out, "  {} {}", styles::MUTED.apply_to("✗"), limitation);
        }
        let _ = writeln!(out, "  [{}]\n", tier.button_text);
    }
    out
}

pub fn notice(notice: &Notice) -> String {
    let style = match notice.level {
        NoticeLevel::Info => &*styles::MUTED,
        NoticeLevel::Success => &*styles::SUCCESS,
        NoticeLevel::Warning => &*styles::WARNING,
        NoticeLevel::Error => &*styles::ERROR,
    };
    style.apply_to(&notice.content).to_string()
}

/// Prints notices as they arrive: to stdout for text output, to stderr when
/// stdout carries JSON.
pub struct TerminalNotifier {
    json: bool,
}

impl TerminalNotifier {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, n: Notice) {
        if self.json {
            eprintln!("{}", notice(&n));
        } else {
            println!("{}", notice(&n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, status: DirectoryStatus) -> DirectoryRecord {
        DirectoryRecord {
            directory: Directory {
                id: 4,
                name: name.to_string(),
                slug: "slug".to_string(),
                description: String::new(),
                status,
                views: 320,
                created_at: date(2024, 1, 1),
                category: None,
            },
            item_count: 2,
        }
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("Home Services Network", 10), "Home Serv…");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_truncate_wide_chars() {
        let cut = truncate_to_width("日本語のテキスト", 7);
        assert!(cut.width() <= 7);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(date(2024, 5, 1), date(2024, 5, 1)), "today");
        assert_eq!(format_age(date(2024, 5, 1), date(2024, 5, 3)), "2 days ago");
        // future dates clamp to today
        assert_eq!(format_age(date(2024, 6, 1), date(2024, 5, 1)), "today");
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("serviceArea"), "Service Area");
        assert_eq!(humanize_key("phone"), "Phone");
        assert_eq!(humanize_key("opening_hours"), "Opening hours");
    }

    #[test]
    fn test_directory_row_contains_fields() {
        let row = directory_row(&record("Wellness Pros", DirectoryStatus::Inactive), date(2024, 1, 1));
        assert!(row.contains("Wellness Pros"));
        assert!(row.contains("inactive"));
        assert!(row.contains("2 items"));
        assert!(row.contains("320 views"));
    }

    #[test]
    fn test_empty_lists() {
        assert!(directory_list(&[], date(2024, 1, 1)).contains("No directories found."));
        assert!(item_list(&[]).contains("No items found."));
    }

    #[test]
    fn test_item_detail_shows_custom_fields() {
        let mut custom_fields = BTreeMap::new();
        custom_fields.insert("serviceArea".to_string(), "North".to_string());
        let detail = ItemDetail {
            item: ItemRecord {
                item: dirhubapp::model::Item {
                    id: 7,
                    title: "Reliable Plumbing".to_string(),
                    description: "Call-outs".to_string(),
                    directory_id: 4,
                    category_id: None,
                    views: 10,
                    featured: true,
                    image: None,
                    custom_fields,
                },
                category_name: "Uncategorized".to_string(),
            },
            directory: record("Home Services Network", DirectoryStatus::Active),
        };
        let text = item_detail(&detail);
        assert!(text.contains("Service Area: North"));
        assert!(text.contains("Category: Uncategorized"));
        assert!(text.contains("featured"));
    }
}
