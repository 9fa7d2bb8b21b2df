use super::*;

/// Canonicalizes whitespace: CRLF to LF, per-line edge trimming, runs of
/// horizontal whitespace to a single space, runs of 3+ newlines to a blank
/// line, and a final whole-text trim.
pub struct CollapseWhitespaceStage;

impl Stage for CollapseWhitespaceStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let text = context.take_text();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = re::LINE_EDGE_WS.replace_all(&text, "");
    let text = re::HORIZONTAL_WS_RUNS.replace_all(&text, " ");
    let text = re::NEWLINE_RUNS.replace_all(&text, "\n\n");

    context.set_text(text.trim().to_string());

    Ok(())
  }
}
