//! The sectioned reservations file.
//!
//! The file holds one `Reservations:<bus>` section per bus that has ever
//! been booked, followed by one `WaitingList:<bus>` section per bus that
//! has ever had a queue. A section may be empty. Each section lists
//! customer records in seat or queue order:
//!
//! ```text
//! Reservations:B1
//! Alice,555-0100,alice@example.com,Pune,30
//! WaitingList:B1
//! Bob,555-0101,bob@example.com,Pune,41
//! ```

use std::collections::{BTreeMap, VecDeque};

use csv::QuoteStyle;

use crate::error::Result;
use crate::store::{decode_line, encode_fields, encode_line, Record, SkippedLine};
use crate::Customer;

pub(crate) const RESERVATIONS_HEADER: &str = "Reservations:";
pub(crate) const WAITING_LIST_HEADER: &str = "WaitingList:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Reservations,
    WaitingList,
}

/// Seated customers and waiting queues, keyed by bus number.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Sections {
    pub(crate) reservations: BTreeMap<String, Vec<Customer>>,
    pub(crate) waiting_list: BTreeMap<String, VecDeque<Customer>>,
}

fn is_header(line: &str) -> bool {
    line.starts_with(RESERVATIONS_HEADER) || line.starts_with(WAITING_LIST_HEADER)
}

/// Encodes a customer, quoting every field if the plain line would be
/// mistaken for a section header.
fn encode_customer(customer: &Customer) -> Result<String> {
    let line = encode_line(customer)?;
    if is_header(&line) {
        encode_fields(&customer.to_fields(), QuoteStyle::Always)
    } else {
        Ok(line)
    }
}

impl Sections {
    /// Renders the file lines, one header per entry even when it is empty.
    pub(crate) fn encode(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        for (bus_number, seated) in &self.reservations {
            lines.push(format!("{RESERVATIONS_HEADER}{bus_number}"));
            for customer in seated {
                lines.push(encode_customer(customer)?);
            }
        }

        for (bus_number, queue) in &self.waiting_list {
            lines.push(format!("{WAITING_LIST_HEADER}{bus_number}"));
            for customer in queue {
                lines.push(encode_customer(customer)?);
            }
        }

        Ok(lines)
    }

    /// Rebuilds the sections from trimmed, numbered lines.
    ///
    /// Customer lines that fail to decode, that precede any header, or that
    /// follow a header without a bus number are returned as skipped.
    pub(crate) fn decode(lines: &[(usize, String)]) -> (Self, Vec<SkippedLine>) {
        let mut sections = Self::default();
        let mut skipped = Vec::new();
        let mut current: Option<(Section, String)> = None;

        let skip = |skipped: &mut Vec<SkippedLine>, line_number: usize, line: &str, reason: String| {
            skipped.push(SkippedLine {
                line_number,
                content: line.to_string(),
                reason,
            });
        };

        for (line_number, line) in lines {
            let header = if let Some(bus) = line.strip_prefix(RESERVATIONS_HEADER) {
                Some((Section::Reservations, bus.trim()))
            } else {
                line.strip_prefix(WAITING_LIST_HEADER)
                    .map(|bus| (Section::WaitingList, bus.trim()))
            };

            if let Some((section, bus_number)) = header {
                if bus_number.is_empty() {
                    skip(
                        &mut skipped,
                        *line_number,
                        line,
                        "section header has no bus number".to_string(),
                    );
                    current = None;
                } else {
                    match section {
                        Section::Reservations => {
                            sections.reservations.entry(bus_number.to_string()).or_default();
                        }
                        Section::WaitingList => {
                            sections.waiting_list.entry(bus_number.to_string()).or_default();
                        }
                    }
                    current = Some((section, bus_number.to_string()));
                }
                continue;
            }

            let Some((section, bus_number)) = &current else {
                skip(
                    &mut skipped,
                    *line_number,
                    line,
                    "customer record outside of any section".to_string(),
                );
                continue;
            };

            match decode_line::<Customer>(line) {
                Ok(customer) => match section {
                    Section::Reservations => sections
                        .reservations
                        .entry(bus_number.clone())
                        .or_default()
                        .push(customer),
                    Section::WaitingList => sections
                        .waiting_list
                        .entry(bus_number.clone())
                        .or_default()
                        .push_back(customer),
                },
                Err(e) => skip(&mut skipped, *line_number, line, e.to_string()),
            }
        }

        (sections, skipped)
    }
}
