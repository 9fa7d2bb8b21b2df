use super::*;

/// Removes every remaining tag, keeping only text content. A `<` with no
/// identifiable closing `>` is not a tag and stays as literal text.
pub struct StripTagsStage;

impl Stage for StripTagsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let text = context.take_text();

    context.set_text(re::TAG_TOKEN.replace_all(&text, "").into_owned());

    Ok(())
  }
}
