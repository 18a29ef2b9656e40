use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, DisplayFormats};

/// Pattern tokens understood by time-axis display formats.
///
/// Fields are matched as whole runs of one letter, so `YYY` is rejected
/// rather than read as `YY` + `Y`. `Do` is the only mixed-letter field.
const DISPLAY_FORMAT_TOKENS: &[&str] = &[
    "YYYY", "YY", "Q", "MMMM", "MMM", "MM", "M", "Do", "DD", "D", "dddd", "ddd", "dd", "d", "HH",
    "H", "hh", "h", "mm", "m", "ss", "s", "SSS", "SS", "S", "A", "a", "LLLL", "LLL", "LL", "L",
    "llll", "lll", "ll", "l",
];

const DISPLAY_FORMAT_SEPARATORS: [char; 6] = [' ', ':', '-', '/', '.', ','];

/// One lexical element of a display-format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayFormatToken {
    Field(&'static str),
    Literal(String),
}

/// Splits a display-format pattern into field and literal tokens.
///
/// Bracketed text (`[at] HH:mm`) is kept verbatim. Any other letter run that
/// is not a known field, or a character outside the separator set, rejects
/// the pattern.
pub fn tokenize_display_format(pattern: &str) -> ChartResult<Vec<DisplayFormatToken>> {
    let invalid = |reason: String| ChartError::InvalidDisplayFormat {
        pattern: pattern.to_owned(),
        reason,
    };
    if pattern.trim().is_empty() {
        return Err(invalid("pattern must not be empty".to_owned()));
    }

    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut index = 0;
    while index < chars.len() {
        let current = chars[index];

        if current == '[' {
            let Some(offset) = chars[index + 1..].iter().position(|c| *c == ']') else {
                return Err(invalid("unterminated `[` literal".to_owned()));
            };
            let literal: String = chars[index + 1..index + 1 + offset].iter().collect();
            tokens.push(DisplayFormatToken::Literal(literal));
            index += offset + 2;
            continue;
        }

        if DISPLAY_FORMAT_SEPARATORS.contains(&current) {
            tokens.push(DisplayFormatToken::Literal(current.to_string()));
            index += 1;
            continue;
        }

        if current == 'D' && chars.get(index + 1) == Some(&'o') {
            tokens.push(DisplayFormatToken::Field("Do"));
            index += 2;
            continue;
        }

        if current.is_ascii_alphabetic() {
            let run = chars[index..].iter().take_while(|c| **c == current).count();
            let run_text: String = chars[index..index + run].iter().collect();
            let Some(token) = DISPLAY_FORMAT_TOKENS.iter().find(|t| **t == run_text) else {
                return Err(invalid(format!("unknown token `{run_text}`")));
            };
            tokens.push(DisplayFormatToken::Field(*token));
            index += run;
            continue;
        }

        return Err(invalid(format!("unexpected character `{current}`")));
    }

    if !tokens
        .iter()
        .any(|token| matches!(token, DisplayFormatToken::Field(_)))
    {
        return Err(invalid("pattern has no date or time field".to_owned()));
    }

    Ok(tokens)
}

pub(super) fn validate_display_formats(formats: &DisplayFormats) -> ChartResult<()> {
    for (_, pattern) in formats.iter() {
        tokenize_display_format(pattern)?;
    }
    Ok(())
}

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    if config.dataset.label.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "dataset label must not be empty".to_owned(),
        ));
    }
    config.dataset.background_color.validate()?;
    config.dataset.border_color.validate()?;
    validate_display_formats(&config.x_axis.display_formats)
}
