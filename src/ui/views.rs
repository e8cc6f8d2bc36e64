//! Plain-text renderings of the console pages.

use crate::core::attendance::worked_minutes;
use crate::core::form::EntryForm;
use crate::core::nav::{Page, SessionContext, can_view_settings, visible_pages};
use crate::core::report::{ReportPeriod, totals};
use crate::core::worklog::FormMode;
use crate::models::work_log_entry::dimension_cell;
use crate::models::{AttendanceRecord, DashboardSummary, Employee, ReportData, WorkLogEntry};
use crate::utils::colors::{colorize_optional, colorize_status, colorize_unit};
use crate::utils::date::{display_date, long_date};
use crate::utils::formatting::{bold, format_percent, format_quantity, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

/// Display options taken from the config.
#[derive(Debug, Clone)]
pub struct ViewStyle {
    pub date_pattern: String,
    pub separator: char,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            date_pattern: "%b %d, %Y".to_string(),
            separator: '-',
        }
    }
}

pub fn render_entries(entries: &[&WorkLogEntry], style: &ViewStyle) -> String {
    if entries.is_empty() {
        return "No work logs found. Type 'new' to get started.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::left("Id"),
        Column::left("Date"),
        Column::left("Type of Work"),
        Column::right("L (in)"),
        Column::right("W (in)"),
        Column::right("T (in)"),
        Column::right("Pieces"),
        Column::left("Unit"),
        Column::left("Notes"),
        Column::left("Photo"),
    ])
    .with_separator(style.separator);

    for e in entries {
        table.add_row(vec![
            e.id.clone(),
            display_date(e.date, &style.date_pattern),
            e.type_of_work.clone(),
            colorize_optional(&dimension_cell(e.length)),
            colorize_optional(&dimension_cell(e.width)),
            colorize_optional(&dimension_cell(e.thickness)),
            format_quantity(e.quantity),
            colorize_unit(&e.unit),
            colorize_optional(&truncate(e.notes.as_deref().unwrap_or("-"), 30)),
            e.photo_file_name.clone().unwrap_or_else(|| "-".into()),
        ]);
    }

    table.render()
}

pub fn render_form(form: &EntryForm, mode: &FormMode) -> String {
    let title = match mode {
        FormMode::Editing(id) => format!("Edit Work Log ({id})"),
        _ => "Add New Work Log".to_string(),
    };
    let show = |s: &str| {
        if s.is_empty() {
            colorize_optional("-")
        } else {
            s.to_string()
        }
    };

    let mut out = format!("{}\n", bold(&title));
    let date = form
        .date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let rows = [
        ("Date", show(&date)),
        ("Type of Work", show(form.type_of_work())),
        ("Length (in)", show(form.length())),
        ("Width (in)", show(form.width())),
        ("Thickness (in)", show(form.thickness())),
        ("Number of Pieces", show(form.quantity())),
        ("Unit", show(form.unit())),
        (
            "Photo",
            show(form.photo().map(|p| p.file_name.as_str()).unwrap_or("")),
        ),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  {:<17} {}\n", label, value));
    }

    out.push_str("  Notes/Remarks\n");
    if form.notes().is_empty() {
        out.push_str(&format!("    {}\n", colorize_optional("-")));
    } else {
        for line in textwrap::wrap(form.notes(), 60) {
            out.push_str(&format!("    {line}\n"));
        }
    }
    out.push_str(
        "  Unit is auto-calculated as Board Feet (BF) if L, W, T, and Pieces are valid. Otherwise, enter manually.\n",
    );
    out
}

pub fn render_attendance(date: NaiveDate, sheet: &[AttendanceRecord], style: &ViewStyle) -> String {
    let mut out = format!("{}\n", bold(&format!("Attendance for {}", long_date(date))));

    let mut table = Table::new(vec![
        Column::left("Id"),
        Column::left("Employee Name"),
        Column::left("Status"),
        Column::left("Time In"),
        Column::left("Time Out"),
        Column::right("Worked"),
    ])
    .with_separator(style.separator);

    for r in sheet {
        let (time_in, time_out) = if r.status.is_present() {
            (r.time_in.as_str(), r.time_out.as_str())
        } else {
            ("", "")
        };
        let blank = |s: &str| {
            if s.is_empty() {
                colorize_optional("--:--")
            } else {
                s.to_string()
            }
        };
        table.add_row(vec![
            r.employee_id.clone(),
            r.employee_name.clone(),
            colorize_status(r.status),
            blank(time_in),
            blank(time_out),
            worked_minutes(r)
                .map(format_minutes)
                .unwrap_or_else(|| colorize_optional("-")),
        ]);
    }

    out.push_str(&table.render());
    let present = sheet.iter().filter(|r| r.status.is_present()).count();
    out.push_str(&format!("Present: {} / {}\n", present, sheet.len()));
    out
}

pub fn render_report(period: ReportPeriod, rows: &[ReportData], style: &ViewStyle) -> String {
    let mut out = format!("{}\n", bold(period.title()));

    let mut table = Table::new(vec![
        Column::left("Period"),
        Column::right("Total Production"),
        Column::right("Avg. Attendance"),
    ])
    .with_separator(style.separator);

    for r in rows {
        table.add_row(vec![
            r.period.clone(),
            format!("{} {}", r.total_production, r.production_unit),
            format_percent(r.average_attendance),
        ]);
    }
    out.push_str(&table.render());

    let (production, attendance) = totals(rows);
    let unit = rows.first().map(|r| r.production_unit.as_str()).unwrap_or("");
    out.push_str(&format!(
        "Total: {} {} | Mean attendance: {}\n",
        production,
        unit,
        format_percent(attendance)
    ));
    out
}

pub fn render_dashboard(date: NaiveDate, summary: &DashboardSummary) -> String {
    let mut out = format!("{}\n", bold(&format!("Dashboard for {}", long_date(date))));
    out.push_str(&format!(
        "  Timber processed today : {:.2} {}\n",
        summary.daily_production.value, summary.daily_production.unit
    ));
    out.push_str(&format!(
        "  Employees present      : {} / {} ({} attendance rate)\n",
        summary.employees_present.present,
        summary.employees_present.total,
        format_percent(summary.employees_present.rate())
    ));
    out.push_str(&format!(
        "  Pending tasks          : {} logs without board-feet measurements\n",
        summary.pending_tasks
    ));
    out
}

pub fn render_nav(ctx: &SessionContext) -> String {
    let mut out = format!(
        "{} | signed in as {} <{}> ({})\n",
        bold("TimberOps"),
        ctx.user.name,
        ctx.user.email,
        ctx.role()
    );
    for page in visible_pages(ctx) {
        out.push_str(&nav_line(page));
    }
    if can_view_settings(ctx) {
        out.push_str(&format!("  {}\n", "─".repeat(20)));
        out.push_str(&nav_line(Page::Settings));
    }
    out
}

fn nav_line(page: Page) -> String {
    match page.badge() {
        Some(badge) => format!("  {:<12} {:<20} [{}]\n", page.label(), page.href(), badge),
        None => format!("  {:<12} {}\n", page.label(), page.href()),
    }
}

pub fn render_employees(employees: &[Employee], style: &ViewStyle) -> String {
    let mut table = Table::new(vec![
        Column::left("Id"),
        Column::left("Name"),
        Column::left("Role"),
    ])
    .with_separator(style.separator);

    for e in employees {
        table.add_row(vec![e.id.clone(), e.name.clone(), e.role.to_string()]);
    }
    table.render()
}
