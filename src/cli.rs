use std::{
    collections::HashMap,
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::{Context, bail};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

use nonprofit_crm::{
    Crm,
    board::{MemberDraft, Position},
    calendar::{EventDraft, EventType, Priority, YearMonth},
    finance::{TransactionDraft, TransactionFilter, TransactionStatus, TransactionType, ViewPeriod, report_file_name, write_csv},
    storage::config::Config,
    ui::{agenda_view, board_view, donor_view, finance_view, month_view},
};

pub const USAGE: &str = "\
Usage: nonprofit-crm <command> [options]

Commands:
  calendar [YYYY/MM]                     Month grid with events
  upcoming                               Next scheduled events
  event add <YYYY-MM-DD> <title> [--start HH:MM] [--end HH:MM] [--type T]
            [--location L] [--priority P] [--amount N] [--donor D] [--notes N]
  event delete <id> [--yes]
  board [search]                         Roster and board statistics
  board seating                          Seat positions around the table
  board add <name> [--position P] [--company C] [--title T] [--email E]
            [--phone P] [--attendance N] [--donation N] [--committees a,b]
  board delete <id> [--yes]
  finances [--year Y] [--month M] [--yearly] [--search S] [--category C]
           [--export [PATH]]
  transaction add <income|expense> <amount> <description> [--category C]
            [--subcategory S] [--source S] [--date YYYY-MM-DD] [--status S]
            [--recurring] [--notes N]
  transaction delete <id> [--yes]
  donors [search]                        Donor directory
  donor show <id>
  donor note <id> <text>
  ask <question>                         Ask the assistant
  --help";

/// Inputs that the parser needs but does not read from the arguments.
pub struct ParseContext {
    pub today: NaiveDate,
    pub default_period: ViewPeriod,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportTarget {
    DefaultFile,
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Calendar(YearMonth),
    Upcoming,
    AddEvent { date: NaiveDate, draft: EventDraft },
    DeleteEvent { id: String, confirmed: bool },
    Board { search: Option<String> },
    Seating,
    AddMember(MemberDraft),
    DeleteMember { id: String, confirmed: bool },
    Finances { filter: TransactionFilter, export: Option<ExportTarget> },
    AddTransaction { date: Option<NaiveDate>, draft: TransactionDraft },
    DeleteTransaction { id: String, confirmed: bool },
    Donors { search: Option<String> },
    ShowDonor(String),
    AddDonorNote { id: String, note: String },
    Ask(String),
    Help,
}

const SWITCHES: [&str; 3] = ["--yes", "--yearly", "--recurring"];

/// Positional words and `--flag [value]` options of one subcommand.
struct Args {
    positional: Vec<String>,
    flags: HashMap<String, Option<String>>,
}

impl Args {
    fn split(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut positional = Vec::new();
        let mut flags = HashMap::new();
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            if !arg.starts_with("--") {
                positional.push(arg);
                continue;
            }
            let value = if SWITCHES.contains(&arg.as_str()) {
                None
            } else if let Some(next) = args.peek()
                && !next.starts_with("--")
            {
                args.next()
            } else if arg == "--export" {
                None
            } else {
                return Err(format!("{} needs a value", arg));
            };
            flags.insert(arg, value);
        }

        Ok(Self { positional, flags })
    }

    fn switch(&mut self, name: &str) -> bool {
        self.flags.remove(name).is_some()
    }

    fn value(&mut self, name: &str) -> Option<String> {
        self.flags.remove(name).flatten()
    }

    fn parsed<T>(&mut self, name: &str, parse: impl FnOnce(&str) -> Option<T>) -> Result<Option<T>, String> {
        match self.value(name) {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| format!("Invalid value '{}' for {}", raw, name)),
            None => Ok(None),
        }
    }

    fn next_positional(&mut self, what: &str) -> Result<String, String> {
        if self.positional.is_empty() {
            Err(format!("Missing {}", what))
        } else {
            Ok(self.positional.remove(0))
        }
    }

    fn rest(&mut self) -> Option<String> {
        let text = self.positional.drain(..).collect::<Vec<_>>().join(" ");
        Some(text).filter(|t| !t.trim().is_empty())
    }

    /// Errors on any flag the subcommand did not consume.
    fn finish(self) -> Result<(), String> {
        match self.flags.keys().next() {
            Some(flag) => Err(format!("Unknown argument: {}", flag)),
            None => Ok(()),
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_amount(value: &str) -> Option<Decimal> {
    value.replace([',', '$'], "").parse().ok()
}

fn parse_list(value: &str) -> Option<Vec<String>> {
    Some(
        value
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

fn parse_year_month(value: &str) -> Result<YearMonth, String> {
    let invalid = || format!("Invalid month '{}'. Use YYYY/MM.", value);
    let (year, month) = value.split_once('/').ok_or_else(invalid)?;
    let year = year.parse().map_err(|_| invalid())?;
    let month = month.parse().map_err(|_| invalid())?;
    YearMonth::new(year, month).ok_or_else(invalid)
}

fn parse_status(value: &str) -> Option<TransactionStatus> {
    match value.to_lowercase().as_str() {
        "pending" => Some(TransactionStatus::Pending),
        "completed" => Some(TransactionStatus::Completed),
        "cancelled" => Some(TransactionStatus::Cancelled),
        _ => None,
    }
}

fn parse_delete(mut args: Args) -> Result<(String, bool), String> {
    let id = args.next_positional("id")?;
    let confirmed = args.switch("--yes");
    args.finish()?;
    Ok((id, confirmed))
}

fn parse_event_add(mut args: Args) -> Result<CliCommand, String> {
    let raw_date = args.next_positional("date")?;
    let date = parse_date(&raw_date).ok_or_else(|| format!("Invalid date '{}'. Use YYYY-MM-DD.", raw_date))?;

    let mut draft = EventDraft::titled(args.rest().unwrap_or_default());
    draft.start_time = args.value("--start").unwrap_or_default();
    draft.end_time = args.value("--end");
    if let Some(event_type) = args.parsed("--type", EventType::parse)? {
        draft.event_type = event_type;
    }
    if let Some(priority) = args.parsed("--priority", Priority::parse)? {
        draft.priority = priority;
    }
    draft.location = args.value("--location");
    draft.amount = args.parsed("--amount", parse_amount)?;
    draft.related_donor = args.value("--donor");
    draft.notes = args.value("--notes");
    draft.description = args.value("--description").unwrap_or_default();
    if let Some(attendees) = args.parsed("--attendees", parse_list)? {
        draft.attendees = attendees;
    }
    args.finish()?;

    Ok(CliCommand::AddEvent { date, draft })
}

fn parse_member_add(mut args: Args) -> Result<CliCommand, String> {
    let mut draft = MemberDraft::named(args.rest().unwrap_or_default());
    if let Some(position) = args.parsed("--position", Position::parse)? {
        draft.position = position;
    }
    draft.company = args.value("--company").unwrap_or_default();
    draft.title = args.value("--title").unwrap_or_default();
    draft.email = args.value("--email").unwrap_or_default();
    draft.phone = args.value("--phone").unwrap_or_default();
    draft.notes = args.value("--notes").unwrap_or_default();
    draft.attendance = args.parsed("--attendance", |v| v.parse().ok())?;
    if let Some(donation) = args.parsed("--donation", parse_amount)? {
        draft.donation_total = donation;
    }
    if let Some(committees) = args.parsed("--committees", parse_list)? {
        draft.committees = committees;
    }
    args.finish()?;

    Ok(CliCommand::AddMember(draft))
}

fn parse_transaction_add(mut args: Args) -> Result<CliCommand, String> {
    let kind = match args.next_positional("transaction type")?.as_str() {
        "income" => TransactionType::Income,
        "expense" => TransactionType::Expense,
        other => return Err(format!("Unknown transaction type '{}'. Use income or expense.", other)),
    };
    let raw_amount = args.next_positional("amount")?;
    let amount = parse_amount(&raw_amount).ok_or_else(|| format!("Invalid amount '{}'", raw_amount))?;

    let mut draft = TransactionDraft {
        description: args.rest().unwrap_or_default(),
        amount,
        kind,
        ..TransactionDraft::default()
    };
    if let Some(category) = args.value("--category") {
        draft.category = category;
    }
    draft.subcategory = args.value("--subcategory");
    draft.source = args.value("--source");
    draft.notes = args.value("--notes");
    draft.recurring = args.switch("--recurring");
    if let Some(status) = args.parsed("--status", parse_status)? {
        draft.status = status;
    }
    let date = args.parsed("--date", parse_date)?;
    args.finish()?;

    Ok(CliCommand::AddTransaction { date, draft })
}

fn parse_finances(mut args: Args, context: &ParseContext) -> Result<CliCommand, String> {
    let year = args.parsed("--year", |v| v.parse().ok())?.unwrap_or(context.today.year());
    let month_arg = args.parsed("--month", |v| v.parse().ok())?;
    let yearly = args.switch("--yearly") || (context.default_period == ViewPeriod::Yearly && month_arg.is_none());
    let month = month_arg.unwrap_or(context.today.month());

    let mut filter = if yearly {
        TransactionFilter::yearly(year).in_month(month)
    } else {
        let period = YearMonth::new(year, month).ok_or_else(|| format!("Invalid month {}", month))?;
        TransactionFilter::monthly(period)
    };
    if let Some(search) = args.value("--search") {
        filter = filter.with_search(search);
    }
    if let Some(category) = args.value("--category") {
        filter = filter.with_category(category);
    }

    let export = if args.flags.contains_key("--export") {
        let target = match args.value("--export") {
            Some(path) => ExportTarget::Path(PathBuf::from(path)),
            None => ExportTarget::DefaultFile,
        };
        Some(target)
    } else {
        None
    };
    args.finish()?;

    Ok(CliCommand::Finances { filter, export })
}

pub fn parse_command(args: impl IntoIterator<Item = String>, context: &ParseContext) -> Result<CliCommand, String> {
    let mut args = args.into_iter();
    let Some(command) = args.next() else {
        return Ok(CliCommand::Help);
    };
    let mut rest = Args::split(args)?;

    match command.as_str() {
        "--help" | "help" => Ok(CliCommand::Help),
        "calendar" => {
            let month = match rest.positional.first() {
                Some(value) => parse_year_month(value)?,
                None => YearMonth::from_date(context.today),
            };
            Ok(CliCommand::Calendar(month))
        }
        "upcoming" => {
            rest.finish()?;
            Ok(CliCommand::Upcoming)
        }
        "event" => match rest.next_positional("event action")?.as_str() {
            "add" => parse_event_add(rest),
            "delete" => {
                let (id, confirmed) = parse_delete(rest)?;
                Ok(CliCommand::DeleteEvent { id, confirmed })
            }
            other => Err(format!("Unknown event action '{}'", other)),
        },
        "board" => match rest.positional.first().cloned().as_deref() {
            Some("add") => {
                rest.positional.remove(0);
                parse_member_add(rest)
            }
            Some("delete") => {
                rest.positional.remove(0);
                let (id, confirmed) = parse_delete(rest)?;
                Ok(CliCommand::DeleteMember { id, confirmed })
            }
            Some("seating") => Ok(CliCommand::Seating),
            _ => Ok(CliCommand::Board { search: rest.rest() }),
        },
        "finances" => parse_finances(rest, context),
        "transaction" => match rest.next_positional("transaction action")?.as_str() {
            "add" => parse_transaction_add(rest),
            "delete" => {
                let (id, confirmed) = parse_delete(rest)?;
                Ok(CliCommand::DeleteTransaction { id, confirmed })
            }
            other => Err(format!("Unknown transaction action '{}'", other)),
        },
        "donors" => Ok(CliCommand::Donors { search: rest.rest() }),
        "donor" => match rest.next_positional("donor action")?.as_str() {
            "show" => Ok(CliCommand::ShowDonor(rest.next_positional("donor id")?)),
            "note" => {
                let id = rest.next_positional("donor id")?;
                let note = rest.rest().ok_or_else(|| "Missing note text".to_string())?;
                Ok(CliCommand::AddDonorNote { id, note })
            }
            other => Err(format!("Unknown donor action '{}'", other)),
        },
        "ask" => {
            let question = rest.rest().ok_or_else(|| "Missing question".to_string())?;
            Ok(CliCommand::Ask(question))
        }
        _ => Err(format!("Unknown argument: {}", command)),
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn confirm(prompt: &str) -> Result<bool, io::Error> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Asks before deleting unless `--yes` was given.
fn confirmed_delete(kind: &str, label: &str, confirmed: bool) -> Result<bool, io::Error> {
    if confirmed {
        return Ok(true);
    }
    let proceed = confirm(&format!("Delete {} \"{}\"?", kind, label))?;
    if !proceed {
        println!("Cancelled.");
    }
    Ok(proceed)
}

pub async fn run_command(command: CliCommand, config: &Config) -> anyhow::Result<()> {
    if command == CliCommand::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut crm = Crm::open(config).context("Failed to open data store")?;
    let now = Utc::now();

    match command {
        CliCommand::Help => {}
        CliCommand::Calendar(month) => {
            let grid = crm.calendar.month_grid(month);
            let text = month_view::render_month(&grid, now.date_naive(), config.calendar.events_per_day);
            display_with_pager(&text)?;
        }
        CliCommand::Upcoming => {
            let upcoming = crm.calendar.upcoming(now, config.calendar.upcoming_limit);
            println!("{}", agenda_view::format_upcoming(&upcoming, &crm.calendar.stats(now)));
        }
        CliCommand::AddEvent { date, draft } => {
            let event = crm.calendar.add(draft, midnight(date))?;
            println!("Added event {}: {}", event.id, agenda_view::build_agenda_line(&event, usize::MAX));
        }
        CliCommand::DeleteEvent { id, confirmed } => {
            let Some(event) = crm.calendar.get(&id) else {
                bail!("No event with id {}", id);
            };
            if confirmed_delete("event", &event.title, confirmed)? {
                crm.calendar.remove(&id)?;
                println!("Deleted event {}.", id);
            }
        }
        CliCommand::Board { search } => {
            let members = match &search {
                Some(term) => crm.board.search(term),
                None => crm.board.members().iter().collect(),
            };
            let text = board_view::format_roster(&members, &crm.board.stats(now), now);
            display_with_pager(&text)?;
        }
        CliCommand::Seating => {
            println!("{}", board_view::format_seating(&crm.board.seating()));
        }
        CliCommand::AddMember(draft) => {
            let member = crm.board.add(draft, now)?;
            println!("Added {} in seat {} (id {}).", member.name, member.seat_number, member.id);
        }
        CliCommand::DeleteMember { id, confirmed } => {
            let Some(member) = crm.board.get(&id) else {
                bail!("No board member with id {}", id);
            };
            if confirmed_delete("board member", &member.name, confirmed)? {
                crm.board.remove(&id)?;
                println!("Removed board member {}.", id);
            }
        }
        CliCommand::Finances { filter, export } => {
            let filtered = crm.ledger.filtered(&filter);
            let text = [
                finance_view::format_summary(&filter, &crm.ledger.financials(&filter)),
                finance_view::format_transactions(&filtered),
                finance_view::format_breakdown(&crm.ledger.donation_breakdown(&filter)),
                finance_view::format_budgets(&crm.ledger.budget_analysis()),
            ]
            .join("\n\n");

            if let Some(target) = export {
                let path = match target {
                    ExportTarget::Path(path) => path,
                    ExportTarget::DefaultFile => PathBuf::from(report_file_name(filter.year, filter.month)),
                };
                write_csv(&path, &filtered)?;
                println!("Exported {} transactions to {}", filtered.len(), path.display());
            } else {
                display_with_pager(&text)?;
            }
        }
        CliCommand::AddTransaction { date, draft } => {
            let date = date.map(midnight).unwrap_or(now);
            let tx = crm.ledger.add(draft, date)?;
            println!("Recorded {} (id {}).", finance_view::format_transactions(&[&tx]), tx.id);
        }
        CliCommand::DeleteTransaction { id, confirmed } => {
            let Some(tx) = crm.ledger.get(&id) else {
                bail!("No transaction with id {}", id);
            };
            if confirmed_delete("transaction", &tx.description, confirmed)? {
                crm.ledger.remove(&id)?;
                println!("Deleted transaction {}.", id);
            }
        }
        CliCommand::Donors { search } => {
            let donors = match &search {
                Some(term) => crm.donors.search(term),
                None => crm.donors.get(),
            };
            let text = donor_view::format_directory(&donors, &crm.donors.stats(now), now);
            display_with_pager(&text)?;
        }
        CliCommand::ShowDonor(id) => {
            let Some(donor) = crm.donors.find(&id) else {
                bail!("No donor with id {}", id);
            };
            display_with_pager(&donor_view::format_donor_detail(&donor))?;
        }
        CliCommand::AddDonorNote { id, note } => {
            let Some(interaction) = crm.donors.add_note(&id, &note, now)? else {
                bail!("No donor with id {}", id);
            };
            println!("Added note {} to donor {}.", interaction.id, id);
        }
        CliCommand::Ask(question) => {
            let mut session = crm.mock_chat(config)?;
            if let Some(reply) = session.send(&question).await? {
                println!("{}", reply.content);
            }
        }
    }

    Ok(())
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd).args(&args).stdin(Stdio::piped()).spawn() {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}
