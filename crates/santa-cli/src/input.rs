//! Participant input: text files, JSON files, and an interactive prompt.
//!
//! Text format, one participant per line:
//!
//! ```text
//! Name;Contact[;Excluded1,Excluded2,...]
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Fields are trimmed
//! and empty exclusion entries are ignored.

use std::io::{BufRead, Write};
use std::path::Path;

use santa_registry::ParticipantRecord;

use crate::error::{Error, Result};

/// Read participants from a file, picking the format from its extension.
///
/// `.json` files hold an array of records; anything else is the text format.
pub fn read_file(path: &Path) -> Result<Vec<ParticipantRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&contents)
    } else {
        parse_text(&contents)
    }
}

/// Parse the `Name;Contact[;Exclusions]` text format.
pub fn parse_text(text: &str) -> Result<Vec<ParticipantRecord>> {
    let mut records = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(parse_line(line).map_err(|reason| Error::Parse {
            line: number + 1,
            reason,
        })?);
    }

    Ok(records)
}

fn parse_line(line: &str) -> std::result::Result<ParticipantRecord, String> {
    let mut fields = line.split(';').map(str::trim);

    let name = fields.next().unwrap_or_default();
    let contact = fields.next().unwrap_or_default();
    let exclusions = fields.next().map(split_names).unwrap_or_default();

    if fields.next().is_some() {
        return Err(format!("too many fields for {name}"));
    }

    let record = ParticipantRecord::new(name, contact).excluding(exclusions);
    check_record(&record)?;
    Ok(record)
}

/// Every input path requires a name and a contact.
fn check_record(record: &ParticipantRecord) -> std::result::Result<(), String> {
    if record.name.is_empty() {
        return Err("missing name".to_string());
    }
    if record.contact.is_empty() {
        return Err(format!("missing contact for {}", record.name));
    }
    Ok(())
}

/// Split a comma separated list of names, dropping empty entries.
fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a JSON array of participant records.
pub fn parse_json(text: &str) -> Result<Vec<ParticipantRecord>> {
    let records: Vec<ParticipantRecord> = serde_json::from_str(text)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> Result<ParticipantRecord> {
            let record = ParticipantRecord {
                name: record.name.trim().to_string(),
                contact: record.contact.trim().to_string(),
                exclusions: record
                    .exclusions
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect(),
            };
            check_record(&record).map_err(|reason| Error::Record {
                index: index + 1,
                reason,
            })?;
            Ok(record)
        })
        .collect()
}

/// Ask for participants interactively.
///
/// Prompts go to `output`; answers are read line by line from `input`.
pub fn prompt<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<Vec<ParticipantRecord>> {
    let count_answer = ask(&mut input, &mut output, "Number of participants: ")?;
    let count: usize = count_answer
        .parse()
        .map_err(|_| Error::InvalidInput(format!("not a number: {count_answer:?}")))?;

    let mut records = Vec::with_capacity(count);
    for n in 1..=count {
        writeln!(output, "\nParticipant {n}:")?;
        let name = ask(&mut input, &mut output, "Name: ")?;
        let contact = ask(&mut input, &mut output, "Contact: ")?;
        let exclusions = ask(
            &mut input,
            &mut output,
            "Names this participant may not give to (comma separated): ",
        )?;

        let record = ParticipantRecord::new(name, contact).excluding(split_names(&exclusions));
        check_record(&record)
            .map_err(|reason| Error::InvalidInput(format!("participant {n}: {reason}")))?;
        records.push(record);
    }

    Ok(records)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(Error::InvalidInput("unexpected end of input".to_string()));
    }
    Ok(answer.trim().to_string())
}
