// --- File: crates/scheduler_devdata/src/prompt.rs ---
//! Yes/no confirmation for destructive scripts.

use std::io::{self, BufRead, Write};

use crate::error::DevDataError;

/// Answers accepted by `delete-all`.
pub const YES_OR_Y: &[&str] = &["yes", "y"];

/// Answers accepted by `delete-specific-events`.
pub const YES_ONLY: &[&str] = &["yes"];

/// Asks `question` and returns whether the trimmed, lowercased answer is accepted.
/// End of input counts as "no".
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    accepted: &[&str],
) -> io::Result<bool> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(accepted.contains(&answer.as_str()))
}

/// [`confirm`] on stdin/stdout, run off the async thread so an interrupt
/// can still be observed while waiting for the answer.
pub async fn confirm_on_terminal(question: &str, accepted: &'static [&'static str]) -> Result<bool, DevDataError> {
    let question = question.to_string();
    let answer = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        confirm(&mut input, &mut io::stdout(), &question, accepted)
    })
    .await
    .map_err(io::Error::other)??;
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str, accepted: &[&str]) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let confirmed = confirm(&mut input, &mut output, "Proceed? (yes/no): ", accepted).unwrap();
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_short_yes_only_where_allowed() {
        assert!(ask("y\n", YES_OR_Y).0);
        assert!(!ask("y\n", YES_ONLY).0);
    }

    #[test]
    fn test_answer_is_trimmed_and_case_insensitive() {
        assert!(ask("  YES \n", YES_ONLY).0);
        assert!(!ask("no\n", YES_OR_Y).0);
    }

    #[test]
    fn test_end_of_input_declines() {
        let (confirmed, shown) = ask("", YES_OR_Y);
        assert!(!confirmed);
        assert_eq!(shown, "Proceed? (yes/no): ");
    }
}
