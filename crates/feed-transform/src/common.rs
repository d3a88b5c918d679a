//! Helpers shared by the per-table validation passes.

use feed_model::{FeedError, Result, SourceTable};
use feed_vocab::{Vocabulary, WHOLE_BLOOD_SOURCE};

/// Container label whose whole-blood specimen-type derivation is
/// self-referential in the source data; those rows are excluded up front.
pub(crate) const UNRESOLVABLE_CONTAINER: &str = "Micronic 1.4";

pub(crate) fn is_unresolvable_whole_blood(
    source: Option<&str>,
    container_type: Option<&str>,
) -> bool {
    source == Some(WHOLE_BLOOD_SOURCE) && container_type == Some(UNRESOLVABLE_CONTAINER)
}

/// Map every raw status to its canonical label, or abort the table naming
/// every specimen id whose status falls outside the closed domain.
pub(crate) fn canonicalize_statuses<R>(
    table: SourceTable,
    rows: &mut [R],
    vocab: &Vocabulary,
    id_of: fn(&R) -> &str,
    status_of: fn(&R) -> Option<&str>,
    set_status: fn(&mut R, String),
) -> Result<()> {
    let offenders: Vec<String> = rows
        .iter()
        .filter(|row| {
            status_of(row)
                .and_then(|raw| vocab.canonical_status(raw))
                .is_none()
        })
        .map(|row| id_of(row).to_string())
        .collect();
    if !offenders.is_empty() {
        return Err(FeedError::Validation {
            table,
            field: "Status",
            specimen_ids: offenders,
        });
    }
    for row in rows.iter_mut() {
        let canonical = status_of(row)
            .and_then(|raw| vocab.canonical_status(raw))
            .map(str::to_string);
        if let Some(canonical) = canonical {
            set_status(row, canonical);
        }
    }
    Ok(())
}

/// Fail the table when any row's value falls outside an enumerated domain.
/// Missing values count as offenders: the domains are closed, and absence is
/// just as unmappable as a bad label.
pub(crate) fn check_domain<R>(
    table: SourceTable,
    field: &'static str,
    rows: &[R],
    id_of: fn(&R) -> &str,
    value_of: fn(&R) -> Option<&str>,
    in_domain: impl Fn(&str) -> bool,
) -> Result<()> {
    let offenders: Vec<String> = rows
        .iter()
        .filter(|row| !value_of(row).map(&in_domain).unwrap_or(false))
        .map(|row| id_of(row).to_string())
        .collect();
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(FeedError::Validation {
            table,
            field,
            specimen_ids: offenders,
        })
    }
}
