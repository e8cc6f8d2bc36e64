//! State of one interactive console session and the command dispatcher.

use crate::config::Config;
use crate::console::parser::{AttendanceCommand, ConsoleCommand, EmployeeCommand};
use crate::core::attendance::{AttendanceBook, TimeField};
use crate::core::form::FormField;
use crate::core::log::AuditLog;
use crate::core::nav::{Page, SessionContext};
use crate::core::photo::load_photo;
use crate::core::report::{self, ReportPeriod};
use crate::core::users::EmployeeDirectory;
use crate::core::worklog::{SaveKind, WorkLog, WorkLogPage, sample_entries};
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::export::{
    AttendanceExport, ExportDataset, ExportFormat, ExportLogic, ExportRequest, ReportExport,
    WorkLogExport,
};
use crate::models::AttendanceStatus;
use crate::ui::messages::{Level, info, success, toast};
use crate::ui::views::{self, ViewStyle};
use crate::utils::date::{long_date, parse_date};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    ctx: SessionContext,
    today: NaiveDate,
    style: ViewStyle,
    worklog: WorkLogPage,
    directory: EmployeeDirectory,
    attendance: AttendanceBook,
    audit: Rc<RefCell<AuditLog>>,
}

impl Session {
    pub fn new(cfg: &Config, ctx: SessionContext, today: NaiveDate) -> Self {
        let log = if cfg.seed_sample_data {
            WorkLog::from_entries(sample_entries())
        } else {
            WorkLog::new()
        };

        let mut worklog = WorkLogPage::new(log, cfg.id_scheme.generator());
        let audit = Rc::new(RefCell::new(AuditLog::new()));

        let journal = Rc::clone(&audit);
        worklog.on_entry_saved(move |saved| {
            let (op, verb) = match saved.kind {
                SaveKind::Added => ("add", "added"),
                SaveKind::Updated => ("edit", "updated"),
            };
            journal.borrow_mut().record(
                op,
                &saved.entry.id,
                &format!(
                    "{} {} ({} {})",
                    saved.entry.type_of_work, verb, saved.entry.quantity, saved.entry.unit
                ),
            );
        });

        let directory = EmployeeDirectory::new(cfg.employees.clone());
        let attendance = AttendanceBook::new(directory.all(), today);

        Self {
            ctx,
            today,
            style: ViewStyle {
                date_pattern: cfg.date_display.clone(),
                separator: cfg.separator(),
            },
            worklog,
            directory,
            attendance,
            audit,
        }
    }

    fn record(&self, operation: &str, target: &str, message: &str) {
        self.audit.borrow_mut().record(operation, target, message);
    }

    pub fn execute(&mut self, cmd: ConsoleCommand) -> AppResult<Flow> {
        match cmd {
            ConsoleCommand::New => {
                self.ctx.require(Page::WorkLog)?;
                self.worklog.open_new(self.today)?;
                self.show_form()?;
            }
            ConsoleCommand::Edit { id } => {
                self.ctx.require(Page::WorkLog)?;
                self.worklog.begin_edit(&id)?;
                self.show_form()?;
            }
            ConsoleCommand::Set { field, value } => {
                let field = FormField::parse(&field)?;
                let value = value.join(" ");
                let form = self.worklog.form_mut()?;
                form.set_field(field, &value)?;
                if matches!(
                    field,
                    FormField::Length | FormField::Width | FormField::Thickness | FormField::Quantity
                ) {
                    info(format!("Unit: {}", display_or_dash(form.unit())));
                }
            }
            ConsoleCommand::Photo { path, clear } => {
                let form = self.worklog.form_mut()?;
                if clear {
                    form.clear_photo();
                    info("Photo removed.");
                } else {
                    let path = path.ok_or_else(|| {
                        AppError::InvalidPhoto("give an image path or --clear".into())
                    })?;
                    let photo = load_photo(&expand_tilde(&path))?;
                    info(format!("Photo attached: {}", photo.file_name));
                    form.attach_photo(photo);
                }
            }
            ConsoleCommand::Show => self.show_form()?,
            ConsoleCommand::Submit => {
                let saved = self.worklog.submit()?;
                toast(
                    Level::Success,
                    "Work Log Saved",
                    format!(
                        "Entry for {} on {} has been saved.",
                        saved.entry.type_of_work,
                        long_date(saved.entry.date)
                    ),
                );
                info(format!("Entry id: {} | Unit: {}", saved.entry.id, saved.entry.unit));
            }
            ConsoleCommand::Cancel => {
                self.worklog.cancel();
                info("Form closed.");
            }
            ConsoleCommand::Delete { id } => {
                self.ctx.require(Page::WorkLog)?;
                match self.worklog.delete(&id) {
                    Some(removed) => {
                        self.record("del", &id, &format!("{} deleted", removed.type_of_work));
                        success(format!("Deleted entry {id} ({}).", removed.type_of_work));
                    }
                    None => info(format!("No entry with id '{id}'; nothing deleted.")),
                }
            }
            ConsoleCommand::List { range } => {
                self.ctx.require(Page::WorkLog)?;
                let log = self.worklog.log();
                let entries = match range {
                    Some(r) => {
                        let (start, end) = parse_range(&r)?;
                        log.in_range(start, end)
                    }
                    None => log.entries().iter().collect(),
                };
                print!("{}", views::render_entries(&entries, &self.style));
            }
            ConsoleCommand::Attendance(cmd) => {
                self.ctx.require(Page::Attendance)?;
                self.attendance_command(cmd)?;
            }
            ConsoleCommand::Report { period } => {
                self.ctx.require(Page::Reports)?;
                print!(
                    "{}",
                    views::render_report(period, &report::series(period), &self.style)
                );
            }
            ConsoleCommand::Dashboard { date } => {
                self.ctx.require(Page::Dashboard)?;
                let date = match date {
                    Some(d) => resolve_date(&d, self.today)?,
                    None => self.today,
                };
                let summary = report::dashboard(
                    self.worklog.log(),
                    &self.attendance,
                    self.directory.all(),
                    date,
                );
                print!("{}", views::render_dashboard(date, &summary));
            }
            ConsoleCommand::Nav => print!("{}", views::render_nav(&self.ctx)),
            ConsoleCommand::Employees(cmd) => self.employee_command(cmd)?,
            ConsoleCommand::Export {
                dataset,
                format,
                file,
                range,
                period,
                force,
            } => self.export(dataset, format, file, range, period, force)?,
            ConsoleCommand::Log => print!("{}", self.audit.borrow().render()),
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show_form(&self) -> AppResult<()> {
        let form = self.worklog.form().ok_or(AppError::FormNotOpen)?;
        print!("{}", views::render_form(form, self.worklog.mode()));
        Ok(())
    }

    fn attendance_command(&mut self, cmd: AttendanceCommand) -> AppResult<()> {
        match cmd {
            AttendanceCommand::Date { date } => {
                let date = resolve_date(&date, self.today)?;
                self.attendance.select_date(self.directory.all(), date);
                print!(
                    "{}",
                    views::render_attendance(date, self.attendance.sheet(), &self.style)
                );
            }
            AttendanceCommand::Present { employee } => {
                let r = self.attendance.set_status(&employee, AttendanceStatus::Present)?;
                info(format!("{} marked present.", r.employee_name));
            }
            AttendanceCommand::Absent { employee } => {
                let r = self.attendance.set_status(&employee, AttendanceStatus::Absent)?;
                info(format!("{} marked absent.", r.employee_name));
            }
            AttendanceCommand::In { employee, time } => {
                let r = self.attendance.set_time(&employee, TimeField::In, &time)?;
                info(format!("{} in at {}.", r.employee_name, r.time_in));
            }
            AttendanceCommand::Out { employee, time } => {
                let r = self.attendance.set_time(&employee, TimeField::Out, &time)?;
                info(format!("{} out at {}.", r.employee_name, r.time_out));
            }
            AttendanceCommand::Show => {
                print!(
                    "{}",
                    views::render_attendance(
                        self.attendance.date(),
                        self.attendance.sheet(),
                        &self.style
                    )
                );
            }
            AttendanceCommand::Save => {
                let summary = self.attendance.save();
                let date = summary.date.format("%Y-%m-%d").to_string();
                self.record(
                    "attendance",
                    &date,
                    &format!("{} of {} present", summary.present, summary.total),
                );
                toast(
                    Level::Success,
                    "Attendance Saved",
                    format!("Attendance for {} has been saved.", long_date(summary.date)),
                );
            }
        }
        Ok(())
    }

    fn employee_command(&mut self, cmd: EmployeeCommand) -> AppResult<()> {
        match cmd {
            EmployeeCommand::List => {
                self.ctx.require(Page::Settings)?;
                print!("{}", views::render_employees(self.directory.all(), &self.style));
            }
            EmployeeCommand::Add { name, role } => {
                self.ctx.require(Page::Settings)?;
                let added = self.directory.add(&name, role)?.clone();
                self.attendance.refresh(self.directory.all());
                self.record("employee", &added.id, &format!("{} added as {}", added.name, role));
                toast(
                    Level::Success,
                    "User Added",
                    format!("{} has been added ({}).", added.name, added.id),
                );
            }
            EmployeeCommand::Remove { id } => {
                self.ctx.require(Page::Settings)?;
                let removed = self.directory.remove(&id)?;
                self.attendance.refresh(self.directory.all());
                self.record("employee", &id, &format!("{} removed", removed.name));
                success(format!("{} removed.", removed.name));
            }
        }
        Ok(())
    }

    fn export(
        &mut self,
        dataset: ExportDataset,
        format: ExportFormat,
        file: String,
        range: Option<String>,
        period: ReportPeriod,
        force: bool,
    ) -> AppResult<()> {
        let req = ExportRequest {
            format,
            file,
            force,
            interactive: false,
        };

        let (written, label) = match dataset {
            ExportDataset::Worklog => {
                self.ctx.require(Page::WorkLog)?;
                let log = self.worklog.log();
                let entries = match &range {
                    Some(r) => {
                        let (start, end) = parse_range(r)?;
                        log.in_range(start, end)
                    }
                    None => log.entries().iter().collect(),
                };
                let rows: Vec<WorkLogExport> = entries.into_iter().map(WorkLogExport::from).collect();
                (ExportLogic::export(&rows, &req, "Work Log")?, "work log")
            }
            ExportDataset::Attendance => {
                self.ctx.require(Page::Attendance)?;
                let rows: Vec<AttendanceExport> = self
                    .attendance
                    .sheet()
                    .iter()
                    .map(AttendanceExport::from)
                    .collect();
                (ExportLogic::export(&rows, &req, "Attendance")?, "attendance")
            }
            ExportDataset::Report => {
                self.ctx.require(Page::Reports)?;
                let rows: Vec<ReportExport> =
                    report::series(period).iter().map(ReportExport::from).collect();
                (ExportLogic::export(&rows, &req, "Report")?, "report")
            }
        };

        if written > 0 {
            self.record(
                "export",
                format.as_str(),
                &format!("{written} {label} rows to {}", req.file),
            );
        }
        Ok(())
    }
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

/// `today` or `YYYY-MM-DD`.
fn resolve_date(s: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
