//! Interactive menu loop: the terminal front end of the ledger.
//!
//! Generic over input and output so a whole session can be scripted.

use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::{DayClosePolicy, Ledger};
use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, EntryDraft, EntryKind};
use crate::store::LedgerStore;
use crate::ui::presenter::{render_balance, render_entries};
use crate::utils::date::{self, DAY_LABELS};
use chrono::{NaiveDate, Utc};
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &str = "Commands:
    n: new entry
    r: refresh
    a: add to overtime
    s: subtract from overtime
    c: close today
    q: quit
> ";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ledger = open_ledger(cfg)?;
    let policy = cfg.day_close()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut ledger, policy.as_ref(), stdin.lock(), stdout.lock()).run()
}

pub struct Session<'a, S: LedgerStore, R, W> {
    ledger: &'a mut Ledger<S>,
    policy: &'a dyn DayClosePolicy,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<'a, S: LedgerStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(
        ledger: &'a mut Ledger<S>,
        policy: &'a dyn DayClosePolicy,
        input: R,
        output: W,
    ) -> Self {
        Self {
            ledger,
            policy,
            input,
            output,
            today: date::today(),
        }
    }

    /// Pin "today" (weekday menu and day close resolve against it).
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn run(mut self) -> AppResult<()> {
        loop {
            self.display()?;
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(command) = self.read_line()? else {
                break;
            };

            let result = match command.as_str() {
                "q" => break,
                "r" | "" => Ok(()),
                "n" => self.new_entry(),
                "a" => self.adjust(1),
                "s" => self.adjust(-1),
                "c" => self.close_today(),
                other => {
                    debug!(command = other, "unknown prompt command");
                    writeln!(self.output, "Unknown command. Please try again.")?;
                    Ok(())
                }
            };

            // a bad answer only aborts the current action, not the session
            if let Err(e) = result {
                if matches!(e, AppError::Io(_)) {
                    return Err(e);
                }
                writeln!(self.output, "Error: {e}")?;
            }
        }

        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    fn display(&mut self) -> AppResult<()> {
        let entries = self.ledger.get_entries(None)?;
        write!(self.output, "{}", render_entries(&entries))?;
        writeln!(self.output, "{}", render_balance(self.ledger.last_overtime_balance()?))?;
        Ok(())
    }

    /// Next trimmed line, `None` at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()?.ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
        })
    }

    fn ask_minutes(&mut self, question: &str) -> AppResult<i64> {
        let answer = self.ask(question)?;
        answer
            .parse::<i64>()
            .map_err(|_| AppError::InvalidTime(format!("'{answer}' is not a number of minutes")))
    }

    fn adjust(&mut self, sign: i64) -> AppResult<()> {
        let verb = if sign > 0 { "add to" } else { "subtract from" };
        let minutes = self.ask_minutes(&format!(
            "Please enter the time you want to {verb} the overtime: "
        ))?;

        let magnitude = minutes
            .checked_abs()
            .ok_or_else(|| AppError::InvalidTime(format!("'{minutes}' minutes is out of range")))?;

        let entry = self
            .ledger
            .insert_entry(EntryDraft::overtime(Utc::now(), sign * magnitude))?;
        writeln!(self.output, "Overtime adjusted by {:+} min.", entry.entry_time)?;
        Ok(())
    }

    fn new_entry(&mut self) -> AppResult<()> {
        let kind_answer = self.ask("Please enter the new entry (start, end, overtime): ")?;
        let kind = EntryKind::from_input(&kind_answer)
            .ok_or_else(|| AppError::InvalidEntryKind(kind_answer.clone()))?;

        if kind == EntryKind::Overtime {
            let delta = self.ask_minutes("Please enter the minutes (negative to subtract): ")?;
            let entry = self.ledger.insert_entry(EntryDraft::overtime(Utc::now(), delta))?;
            writeln!(self.output, "Overtime adjusted by {:+} min.", entry.entry_time)?;
            return Ok(());
        }

        let time_answer = self.ask("Please enter the time (e.g. 1300): ")?;
        let clock = ClockTime::parse(&time_answer)?;

        let day_answer = self.ask(&format!("Please enter the day ({}): ", DAY_LABELS.join(", ")))?;
        let day = date::resolve_day(&day_answer, self.today)
            .ok_or_else(|| AppError::InvalidDate(day_answer.clone()))?;

        let first_of_day = self.ledger.is_first_entry_on(day)?;
        let entry = self.ledger.insert_entry(EntryDraft::clock_event(kind, day, clock)?)?;

        if first_of_day {
            writeln!(self.output, "First entry of {day}.")?;
        }
        match kind {
            EntryKind::End => writeln!(
                self.output,
                "Logged end at {clock} on {day}: worked {} min.",
                entry.worked_time
            )?,
            _ => writeln!(self.output, "Logged {kind} at {clock} on {day}.")?,
        }
        Ok(())
    }

    fn close_today(&mut self) -> AppResult<()> {
        match self.ledger.close_day(self.today, self.policy)? {
            Some(entry) => writeln!(
                self.output,
                "Closed {}: overtime adjusted by {:+} min.",
                self.today, entry.entry_time
            )?,
            None => writeln!(self.output, "Nothing to close for {}.", self.today)?,
        }
        Ok(())
    }
}
