//! Terminal rendering of a finished conversation.

use core::fmt::Write as _;
use voyage_agent::{ConversationOutcome, Transcript};

/// Heading above the transcript.
pub const HISTORY_HEADING: &str = "Here is the Agent Chat History";

/// Heading above the summary.
pub const SUMMARY_HEADING: &str = "Here is the Summary for Your Travel Request";

/// Renders the transcript, one block per message, labelled with its role.
#[must_use]
pub fn render_transcript(transcript: &Transcript) -> String {
    let mut out = String::new();
    for (index, message) in transcript.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}:", index + 1, message.role);
        for line in message.content.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}

/// Renders the full report: query, transcript, and summary or failure notice.
#[must_use]
pub fn render_outcome(outcome: &ConversationOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Your query: {}\n", outcome.query);
    let _ = writeln!(out, "# {HISTORY_HEADING}:\n");
    out.push_str(&render_transcript(&outcome.transcript));

    match &outcome.error {
        None => {
            let _ = writeln!(out, "\n# {SUMMARY_HEADING}:\n");
            let _ = writeln!(out, "{}", outcome.summary);
        }
        Some(err) => {
            let _ = writeln!(out, "\n# The travel request could not be completed\n");
            let _ = writeln!(out, "{err}");
        }
    }
    out
}
