//! Plain-text rendering of user rows.

use std::io::{self, Write};

use crate::record::{FieldName, UserRecord};
use crate::schema::USER_FIELDS;

const ID_HEADING: &str = "ID";
const COLUMN_GAP: &str = "  ";

/// Write `users` as an aligned table with one header row.
///
/// An empty slice prints the empty-state text instead. `searching` selects
/// the hint shown with it.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_table<W: Write>(out: &mut W, users: &[&UserRecord], searching: bool) -> io::Result<()> {
    if users.is_empty() {
        writeln!(out, "No users found")?;
        let hint = if searching {
            "Try adjusting your search"
        } else {
            "Get started by adding your first user"
        };
        return writeln!(out, "{hint}");
    }

    let mut headings = vec![ID_HEADING];
    headings.extend(USER_FIELDS.iter().map(|field| field.label));
    let rows: Vec<Vec<String>> = users.iter().map(|user| row(user)).collect();
    let widths: Vec<usize> = headings
        .iter()
        .enumerate()
        .map(|(column, heading)| {
            rows.iter()
                .filter_map(|cells| cells.get(column))
                .map(|cell| cell.chars().count())
                .chain([heading.chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect();

    write_row(out, headings.iter().copied(), &widths)?;
    for cells in &rows {
        write_row(out, cells.iter().map(String::as_str), &widths)?;
    }
    Ok(())
}

fn row(user: &UserRecord) -> Vec<String> {
    let mut cells = vec![user.id.to_string()];
    cells.extend(
        FieldName::ALL
            .iter()
            .map(|field| user.field(*field).unwrap_or_default().to_owned()),
    );
    cells
}

fn write_row<'a, W: Write>(
    out: &mut W,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> io::Result<()> {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(out, "{}", line.trim_end())
}
