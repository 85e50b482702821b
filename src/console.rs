use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use crate::adjustments::AdjustmentMap;

/// Parse a space-separated list of integer scores.
pub fn parse_scores(raw: &str) -> Result<Vec<i64>, ParseIntError> {
    raw.split_whitespace().map(|token| token.parse()).collect()
}

/// Prompt for a single trimmed line of text.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt until a non-empty list of integer scores is entered.
pub fn prompt_scores<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Vec<i64>> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match parse_scores(&line) {
            Ok(scores) if !scores.is_empty() => return Ok(scores),
            Ok(_) => writeln!(output, "Enter at least one score.")?,
            Err(_) => writeln!(output, "Scores must be whole numbers separated by spaces.")?,
        }
    }
}

/// Collect head-to-head adjustment entries until the user types `done`.
///
/// Each entry is a home score, an away score, and a multiplicative factor.
/// An entry with any unparseable value is reported and dropped, and
/// collection continues with the next entry. Re-entering a pair overwrites
/// the earlier factor.
pub fn collect_adjustments<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    adjustments: &mut AdjustmentMap,
) -> io::Result<()> {
    writeln!(
        output,
        "\nEnter head-to-head adjustments for specific score pairs."
    )?;

    loop {
        let first = prompt_line(input, output, "Home score (or 'done' to finish)")?;
        if first.eq_ignore_ascii_case("done") {
            break;
        }
        let Ok(home) = first.parse::<i64>() else {
            writeln!(output, "Invalid entry: scores must be whole numbers.")?;
            continue;
        };

        let second = prompt_line(input, output, "Away score")?;
        let Ok(away) = second.parse::<i64>() else {
            writeln!(output, "Invalid entry: scores must be whole numbers.")?;
            continue;
        };

        let third = prompt_line(
            input,
            output,
            &format!("Factor for ({home}, {away}) (e.g. 1.2)"),
        )?;
        let Ok(factor) = third.parse::<f64>() else {
            writeln!(output, "Invalid entry: the factor must be a number.")?;
            continue;
        };

        adjustments.set(home, away, factor);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(script: &str) -> AdjustmentMap {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        let mut adjustments = AdjustmentMap::new();
        collect_adjustments(&mut input, &mut output, &mut adjustments).unwrap();
        adjustments
    }

    #[test]
    fn test_parse_scores() {
        assert_eq!(parse_scores("10 14 14").unwrap(), vec![10, 14, 14]);
        assert_eq!(parse_scores("  7 ").unwrap(), vec![7]);
        assert!(parse_scores("10 x 14").is_err());
        assert!(parse_scores("").unwrap().is_empty());
    }

    #[test]
    fn test_prompt_scores_reprompts_until_valid() {
        let mut input = "ten\n\n10 14\n".as_bytes();
        let mut output = Vec::new();
        let scores = prompt_scores(&mut input, &mut output, "Scores").unwrap();
        assert_eq!(scores, vec![10, 14]);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("whole numbers"));
        assert!(transcript.contains("at least one"));
    }

    #[test]
    fn test_collect_adjustments_entries() {
        let adjustments = collect("14\n12\n5.0\n12\n15\n0.8\ndone\n");
        assert_eq!(adjustments.len(), 2);
        assert_eq!(adjustments.factor(14, 12), 5.0);
        assert_eq!(adjustments.factor(12, 15), 0.8);
    }

    #[test]
    fn test_collect_adjustments_done_immediately() {
        assert!(collect("DONE\n").is_empty());
    }

    #[test]
    fn test_collect_adjustments_discards_bad_entries() {
        // A bad score drops the whole entry; a bad factor drops the pair too.
        let adjustments = collect("oops\n14\n12\nhigh\n14\n12\n5.0\ndone\n");
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments.factor(14, 12), 5.0);
    }

    #[test]
    fn test_collect_adjustments_last_write_wins() {
        let adjustments = collect("14\n12\n1.5\n14\n12\n2.5\ndone\n");
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments.factor(14, 12), 2.5);
    }
}
