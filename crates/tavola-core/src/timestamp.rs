//! Naive timestamp normalization.
//!
//! The calendar surface emits selection endpoints as zone-qualified ISO 8601
//! strings (`2025-01-10T18:00:00-05:00`), while the booking endpoint only
//! accepts naive local date-times (`2025-01-10T18:00:00`). This module strips
//! the offset suffix and nothing else.
//!
//! Normalization is best-effort: anything that does not look like
//! `<date><T|space><time>[offset]` is passed through untouched rather than
//! rejected.

/// A timestamp split into its `date`, `time` and optional `offset` parts.
///
/// All parts borrow from the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampParts<'a> {
    /// Everything before the date/time separator, e.g. `2025-01-10`.
    pub date: &'a str,
    /// The separator character (`T` or a space).
    pub separator: char,
    /// Time of day, including any fractional seconds.
    pub time: &'a str,
    /// Offset suffix (`-05:00`, `+01:00`, `Z`), if any.
    pub offset: Option<&'a str>,
    naive: &'a str,
}

impl<'a> TimestampParts<'a> {
    /// Splits `raw` into its components.
    ///
    /// The offset search is anchored after the date/time separator, so the
    /// hyphens inside the date portion are never mistaken for an offset sign.
    /// Returns `None` when there is no separator or either side of it is empty.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let sep_idx = raw.find(['T', ' '])?;
        if sep_idx == 0 {
            return None;
        }
        // Both separators are ASCII, so byte arithmetic is safe here.
        let separator = if raw.as_bytes()[sep_idx] == b'T' { 'T' } else { ' ' };
        let date = &raw[..sep_idx];
        let rest = &raw[sep_idx + 1..];

        let offset_idx = rest
            .find(['+', '-'])
            .or_else(|| rest.ends_with(['Z', 'z']).then(|| rest.len() - 1));

        let (time, offset) = match offset_idx {
            Some(idx) => (&rest[..idx], Some(&rest[idx..])),
            None => (rest, None),
        };
        if time.is_empty() {
            return None;
        }

        Some(Self {
            date,
            separator,
            time,
            offset,
            naive: &raw[..sep_idx + 1 + time.len()],
        })
    }

    /// The timestamp with the offset removed.
    pub fn naive(&self) -> &'a str {
        self.naive
    }

    /// Whether the timestamp carried any timezone marker.
    pub fn has_offset(&self) -> bool {
        self.offset.is_some()
    }
}

/// Converts a zone-qualified timestamp into the naive wire format.
///
/// Never fails: unrecognized input is returned unchanged. Applying the
/// function twice yields the same result as applying it once.
pub fn normalize_timestamp(raw: &str) -> String {
    match TimestampParts::parse(raw) {
        Some(parts) if parts.has_offset() => parts.naive().to_string(),
        _ => raw.to_string(),
    }
}
