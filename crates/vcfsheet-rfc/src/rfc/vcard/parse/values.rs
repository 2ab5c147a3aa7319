//! vCard value helpers: structured value splitting and date normalization.

use chrono::NaiveDate;

/// Splits a structured value (N, ADR, ORG) on `;` and trims each component.
///
/// Empty components are kept so positions stay aligned with their labels.
#[must_use]
pub fn split_structured(value: &str) -> Vec<&str> {
    value.split(';').map(str::trim).collect()
}

/// Date layouts accepted for BDAY-style values, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `YYYYMMDD`
    Basic,
    /// `YYYY-MM-DD`
    Extended,
    /// `MM/DD/YYYY`
    MonthFirst,
    /// `DD/MM/YYYY`
    DayFirst,
}

/// One piece of a date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Year,
    Month,
    Day,
    Sep(u8),
}

impl Part {
    /// Lengths this part can consume at the start of `input`, most preferred first.
    ///
    /// Year is four digits. Month is `1[0-2]`, `0[1-9]` or `[1-9]`. Day is
    /// `3[01]`, `[12][0-9]`, `0[1-9]`, `[1-9]` or a space-padded `" [1-9]"`.
    fn candidates(self, input: &[u8]) -> Vec<usize> {
        let first = input.first().copied();
        let second = input.get(1).copied();
        let mut lens = Vec::with_capacity(2);

        match self {
            Self::Year => {
                if input.len() >= 4 && input[..4].iter().all(u8::is_ascii_digit) {
                    lens.push(4);
                }
            }
            Self::Month => {
                let two = matches!(
                    (first, second),
                    (Some(b'1'), Some(b'0'..=b'2')) | (Some(b'0'), Some(b'1'..=b'9'))
                );
                if two {
                    lens.push(2);
                }
                if matches!(first, Some(b'1'..=b'9')) {
                    lens.push(1);
                }
            }
            Self::Day => {
                let two = matches!(
                    (first, second),
                    (Some(b'3'), Some(b'0' | b'1'))
                        | (Some(b'1' | b'2'), Some(b'0'..=b'9'))
                        | (Some(b'0' | b' '), Some(b'1'..=b'9'))
                );
                if two && first != Some(b' ') {
                    lens.push(2);
                }
                if matches!(first, Some(b'1'..=b'9')) {
                    lens.push(1);
                }
                if two && first == Some(b' ') {
                    lens.push(2);
                }
            }
            Self::Sep(sep) => {
                if first == Some(sep) {
                    lens.push(1);
                }
            }
        }

        lens
    }
}

/// Year, month and day read off the input.
#[derive(Debug, Default, Clone, Copy)]
struct Fields {
    year: u32,
    month: u32,
    day: u32,
}

impl Fields {
    fn set(&mut self, part: Part, text: &[u8]) {
        let value = text
            .iter()
            .filter(|b| b.is_ascii_digit())
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'));
        match part {
            Part::Year => self.year = value,
            Part::Month => self.month = value,
            Part::Day => self.day = value,
            Part::Sep(_) => {}
        }
    }
}

/// Matches `parts` against the start of `input`, backtracking through each
/// part's alternatives. Returns the number of bytes consumed by the first
/// complete match; trailing input is left for the caller to judge.
fn match_parts(parts: &[Part], input: &[u8], fields: &mut Fields) -> Option<usize> {
    let Some((&part, rest)) = parts.split_first() else {
        return Some(0);
    };

    part.candidates(input).into_iter().find_map(|len| {
        let tail = match_parts(rest, &input[len..], fields)?;
        fields.set(part, &input[..len]);
        Some(len + tail)
    })
}

impl DatePattern {
    /// All patterns in the order they are tried.
    pub const ORDERED: [Self; 4] = [Self::Basic, Self::Extended, Self::MonthFirst, Self::DayFirst];

    const fn layout(self) -> &'static [Part] {
        match self {
            Self::Basic => &[Part::Year, Part::Month, Part::Day],
            Self::Extended => &[Part::Year, Part::Sep(b'-'), Part::Month, Part::Sep(b'-'), Part::Day],
            Self::MonthFirst => &[Part::Month, Part::Sep(b'/'), Part::Day, Part::Sep(b'/'), Part::Year],
            Self::DayFirst => &[Part::Day, Part::Sep(b'/'), Part::Month, Part::Sep(b'/'), Part::Year],
        }
    }

    /// Attempts to read `s` with this layout.
    ///
    /// The first match of the layout must consume the whole input; a match
    /// that leaves trailing characters is a failure even if a shorter reading
    /// of an earlier part would have fit.
    #[must_use]
    pub fn parse(self, s: &str) -> Option<NaiveDate> {
        let mut fields = Fields::default();
        let consumed = match_parts(self.layout(), s.as_bytes(), &mut fields)?;
        if consumed != s.len() || fields.year == 0 {
            return None;
        }

        NaiveDate::from_ymd_opt(i32::try_from(fields.year).ok()?, fields.month, fields.day)
    }
}

/// Reformats a date value to `YYYY-MM-DD`.
///
/// Tries each [`DatePattern`] in order and returns the first successful
/// reading. Unrecognized values are returned unchanged.
#[must_use]
pub fn normalize_date(value: &str) -> String {
    DatePattern::ORDERED
        .iter()
        .find_map(|pattern| pattern.parse(value))
        .map_or_else(
            || value.to_string(),
            |date| date.format("%Y-%m-%d").to_string(),
        )
}
