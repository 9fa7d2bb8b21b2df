/// A host-owned element holding one raw description.
///
/// The core reads `raw_content`, writes canonical text back through
/// `set_text`, and records completion with `mark_processed`. An
/// implementation is expected to apply its preserve-whitespace display hint
/// when text is written so embedded newlines render visibly, and to keep
/// the processed marker out of whatever mutation notifications it emits.
pub trait MarkupNode {
  /// The node's current markup source.
  fn raw_content(&self) -> String;

  /// The node's currently displayed text. Defaults to the raw content for
  /// hosts that do not distinguish the two.
  fn current_text(&self) -> String {
    self.raw_content()
  }

  fn set_text(&mut self, text: &str);

  fn processed(&self) -> bool;

  fn mark_processed(&mut self);

  /// Whether the node is attached to the live tree.
  fn attached(&self) -> bool;

  /// Whether the node is currently rendered on screen.
  fn visible(&self) -> bool;
}
