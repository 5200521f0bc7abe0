use log::warn;
use std::io::{BufRead, Write};

use crate::constants::*;
use crate::error::InputError;
use crate::types::*;
use crate::utils::*;

type PromptResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Accepts one or more decimal digits. No upper bound beyond `u64`.
pub fn parse_count(raw: &str) -> Result<u64, InputError> {
    let value = raw.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::InvalidCount);
    }
    value.parse::<u64>().map_err(|_| InputError::CountOverflow(value.to_string()))
}

/// Parses a menu answer such as `1,3,5`.
///
/// The accepted shape is one or more digits `0`-`7`, each optionally followed
/// by a comma. Spaces are allowed only around commas, so `1 2` is rejected
/// rather than read as `12`. A `0` anywhere wins over every other code.
/// Tokens that are not a known code (`12`, `77`) are dropped.
pub fn parse_selection(raw: &str) -> Result<Selection, InputError> {
    let compact = raw.trim().split(',').map(str::trim).collect::<Vec<_>>().join(",");
    if !is_selection_shape(&compact) {
        return Err(InputError::InvalidSelection);
    }
    if compact.contains(ABORT_CODE) {
        return Ok(Selection::Abort);
    }
    let mut kinds = OutputSelection::new();
    for token in compact.split(',').filter(|t| !t.is_empty()) {
        match token.parse::<u32>().ok().and_then(OutputKind::from_code) {
            Some(kind) => {
                kinds.insert(kind);
            }
            None => warn!("Ignoring unknown option {}", token),
        }
    }
    Ok(Selection::Export(kinds))
}

fn is_selection_shape(value: &str) -> bool {
    let mut prev_digit = false;
    for c in value.chars() {
        match c {
            '0'..='7' => prev_digit = true,
            ',' if prev_digit => prev_digit = false,
            _ => return false,
        }
    }
    !value.is_empty()
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> PromptResult<String> {
    write!(output, "{} ", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("Input closed before an answer was given".into());
    }
    Ok(line)
}

pub fn prompt_wallet_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> PromptResult<u64> {
    loop {
        let answer = read_answer(input, output, "Enter number of wallets to generate:")?;
        match parse_count(&answer) {
            Ok(count) => return Ok(count),
            Err(e) => writeln!(output, "{} {}", severity_tag(log::Level::Warn), e)?,
        }
    }
}

pub fn prompt_output_selection<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> PromptResult<Selection> {
    print_menu(output)?;
    loop {
        let answer = read_answer(input, output, "Enter the number(s) separated by commas (e.g., 1,3,5):")?;
        match parse_selection(&answer) {
            Ok(selection) => return Ok(selection),
            Err(e) => writeln!(output, "{} {}", severity_tag(log::Level::Warn), e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn kinds(selection: Selection) -> Vec<OutputKind> {
        match selection {
            Selection::Export(k) => k.into_iter().collect(),
            Selection::Abort => panic!("unexpected abort"),
        }
    }

    #[test]
    fn count_accepts_digits_only() {
        assert_eq!(parse_count("3\n"), Ok(3));
        assert_eq!(parse_count(" 0 "), Ok(0));
        assert_eq!(parse_count("007"), Ok(7));
        assert_eq!(parse_count("-1"), Err(InputError::InvalidCount));
        assert_eq!(parse_count("3.5"), Err(InputError::InvalidCount));
        assert_eq!(parse_count(""), Err(InputError::InvalidCount));
        assert_eq!(parse_count("ten"), Err(InputError::InvalidCount));
    }

    #[test]
    fn count_overflow_is_reported() {
        assert!(matches!(parse_count("99999999999999999999999"), Err(InputError::CountOverflow(_))));
    }

    #[test]
    fn selection_maps_codes() {
        assert_eq!(kinds(parse_selection("1,2").unwrap()), vec![OutputKind::Addresses, OutputKind::PrivateKeys]);
        assert_eq!(kinds(parse_selection("4").unwrap()), vec![OutputKind::Details]);
        assert_eq!(kinds(parse_selection("7,5,").unwrap()), vec![OutputKind::SerialAddresses, OutputKind::SerialMnemonic]);
        assert_eq!(kinds(parse_selection(" 1, 3 \n").unwrap()), vec![OutputKind::Addresses, OutputKind::Mnemonic]);
    }

    #[test]
    fn duplicate_codes_collapse() {
        assert_eq!(kinds(parse_selection("2,2,2").unwrap()), vec![OutputKind::PrivateKeys]);
    }

    #[test]
    fn abort_wins_over_everything() {
        assert_eq!(parse_selection("0"), Ok(Selection::Abort));
        assert_eq!(parse_selection("0,4"), Ok(Selection::Abort));
        assert_eq!(parse_selection("4,5,0"), Ok(Selection::Abort));
        assert_eq!(parse_selection("10"), Ok(Selection::Abort));
    }

    #[test]
    fn multi_digit_tokens_are_dropped() {
        assert_eq!(kinds(parse_selection("12").unwrap()), vec![]);
        assert_eq!(kinds(parse_selection("12,3").unwrap()), vec![OutputKind::Mnemonic]);
    }

    #[test]
    fn selection_rejects_bad_shapes() {
        for bad in ["", ",1", "1,,2", "8", "1;2", "a", "1-3", "1 2", "4 5", "1 0", "1, 2 3"] {
            assert_eq!(parse_selection(bad), Err(InputError::InvalidSelection), "{bad:?}");
        }
    }

    #[test]
    fn count_prompt_retries_until_valid() {
        let mut input = Cursor::new("abc\n-4\n5\n");
        let mut output = Vec::new();
        assert_eq!(prompt_wallet_count(&mut input, &mut output).unwrap(), 5);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Enter number of wallets").count(), 3);
        assert_eq!(shown.matches("Please enter a valid number.").count(), 2);
    }

    #[test]
    fn selection_prompt_shows_menu_and_retries() {
        let mut input = Cursor::new("9\n1,6\n");
        let mut output = Vec::new();
        let selection = prompt_output_selection(&mut input, &mut output).unwrap();
        assert_eq!(kinds(selection), vec![OutputKind::Addresses, OutputKind::SerialPrivateKeys]);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Exit"));
        assert!(shown.contains("All Wallet Details (With Serial Number)"));
        assert!(shown.contains("Invalid input!"));
    }

    #[test]
    fn space_separated_codes_are_rejected() {
        assert_eq!(parse_selection("1 2"), Err(InputError::InvalidSelection));
        assert_eq!(parse_selection("1 0"), Err(InputError::InvalidSelection));
        assert_eq!(kinds(parse_selection(" 4 , 5 ").unwrap()), vec![OutputKind::Details, OutputKind::SerialAddresses]);
    }

    #[test]
    fn selection_prompt_retries_on_space_separated_codes() {
        let mut input = Cursor::new("4 5\n4\n");
        let mut output = Vec::new();
        let selection = prompt_output_selection(&mut input, &mut output).unwrap();
        assert_eq!(kinds(selection), vec![OutputKind::Details]);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Enter the number(s)").count(), 2);
        assert_eq!(shown.matches("Invalid input!").count(), 1);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_wallet_count(&mut input, &mut output).is_err());
    }
}
