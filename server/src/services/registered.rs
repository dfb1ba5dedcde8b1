//! Registered-roster service — listing with attendance, mark-here, CSV import.
//!
//! DESIGN
//! ======
//! The roster itself is reference data seeded from the event's registration
//! CSV export; check-ins live in a separate attendance table keyed by
//! registration id. The wire `here` flag is computed at read time by joining
//! the two, so marking someone here never mutates a roster row.

use records::RegisteredRecord;
use sqlx::PgPool;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RegisteredError {
    #[error("csv header missing registration_id column")]
    MissingIdColumn,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One roster row parsed from an import CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub registration_id: String,
    pub customer_code: String,
    pub customer_name: String,
    pub attendee_name: String,
}

/// Counts reported back from a roster import.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
}

// =============================================================================
// CSV PARSING
// =============================================================================

/// Split one CSV line into fields: quoted fields may contain commas, and a
/// doubled quote inside a quoted field is a literal quote.
pub(crate) fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn column_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|col| col.trim().eq_ignore_ascii_case(name))
}

/// Parse a header + data CSV into roster rows.
///
/// Rows without a registration id are counted as skipped rather than failing
/// the whole import; a roster export routinely carries blank trailing lines.
///
/// # Errors
///
/// Returns [`RegisteredError::MissingIdColumn`] when the header row has no
/// `registration_id` column.
pub(crate) fn parse_roster_csv(text: &str) -> Result<(Vec<RosterRow>, usize), RegisteredError> {
    let mut lines = text.lines();
    let header = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break split_csv_line(line),
            None => return Err(RegisteredError::MissingIdColumn),
        }
    };

    let id_col = column_index(&header, "registration_id").ok_or(RegisteredError::MissingIdColumn)?;
    let code_col = column_index(&header, "customer_code");
    let customer_col = column_index(&header, "customer_name");
    let attendee_col = column_index(&header, "attendee_name");

    let field = |fields: &[String], idx: Option<usize>| -> String {
        idx.and_then(|i| fields.get(i)).map(|s| s.trim().to_owned()).unwrap_or_default()
    };

    let mut rows = Vec::new();
    let mut skipped = 0_usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(line);
        let registration_id = field(&fields, Some(id_col));
        if registration_id.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(RosterRow {
            registration_id,
            customer_code: field(&fields, code_col),
            customer_name: field(&fields, customer_col),
            attendee_name: field(&fields, attendee_col),
        });
    }
    Ok((rows, skipped))
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// List the full roster with the computed `here` flag.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_records(pool: &PgPool) -> Result<Vec<RegisteredRecord>, RegisteredError> {
    let rows = sqlx::query_as::<_, (String, String, String, String, bool)>(
        "SELECT r.registration_id, r.customer_code, r.customer_name, r.attendee_name, \
                a.registration_id IS NOT NULL \
         FROM registered r \
         LEFT JOIN attendance a ON a.registration_id = r.registration_id \
         ORDER BY r.registration_id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(registration_id, customer_code, customer_name, attendee_name, here)| RegisteredRecord {
            registration_id,
            customer_code,
            customer_name,
            attendee_name,
            here: if here { "true".to_owned() } else { "false".to_owned() },
        })
        .collect())
}

/// Record a check-in. Idempotent: repeat marks for the same registration id
/// leave the original attendance row untouched.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn mark_here(pool: &PgPool, registration_id: &str) -> Result<(), RegisteredError> {
    sqlx::query(
        "INSERT INTO attendance (registration_id, source) VALUES ($1, 'registered') \
         ON CONFLICT (registration_id) DO NOTHING",
    )
    .bind(registration_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Import (or refresh) the roster from a CSV export. Existing rows with the
/// same registration id are updated in place; attendance is untouched.
///
/// # Errors
///
/// Returns [`RegisteredError::MissingIdColumn`] for an unusable header, or a
/// database error if an upsert fails.
pub async fn import_roster(pool: &PgPool, csv_text: &str) -> Result<ImportOutcome, RegisteredError> {
    let (rows, skipped) = parse_roster_csv(csv_text)?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO registered (registration_id, customer_code, customer_name, attendee_name) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (registration_id) DO UPDATE SET \
                 customer_code = EXCLUDED.customer_code, \
                 customer_name = EXCLUDED.customer_name, \
                 attendee_name = EXCLUDED.attendee_name",
        )
        .bind(&row.registration_id)
        .bind(&row.customer_code)
        .bind(&row.customer_name)
        .bind(&row.attendee_name)
        .execute(pool)
        .await?;
    }

    Ok(ImportOutcome { imported: rows.len(), skipped })
}

#[cfg(test)]
#[path = "registered_test.rs"]
mod tests;
