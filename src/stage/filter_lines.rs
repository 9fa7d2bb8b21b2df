use super::*;

/// Line-level filtering over flat text: image references and bare URLs,
/// separator rule-lines, single-symbol placeholder lines, and denylisted
/// styling-class tokens.
///
/// Every rule is line-scoped or token-scoped; punctuation embedded within
/// prose is never touched, which is what distinguishes a placeholder line
/// from a sentence ending in a dash.
pub struct FilterLinesStage;

impl Stage for FilterLinesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let text = context.take_text();
    let text = re::IMAGE_OR_URL.replace_all(&text, "");
    let text = re::SEPARATOR_LINE.replace_all(&text, "");
    let text = re::PLACEHOLDER_LINE.replace_all(&text, "");

    let filtered = match context.denylist() {
      Some(denylist) => denylist.replace_all(&text, "").into_owned(),
      None => text.into_owned(),
    };

    context.set_text(filtered);

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  test! {
    name: markdown_images_removed_without_residue,
    stage: FilterLinesStage,
    content: "a ![pic](https://x/y.png) b",
    expected: "a  b",
  }

  test! {
    name: bare_urls_removed,
    stage: FilterLinesStage,
    content: "see https://example.com/page for more",
    expected: "see  for more",
  }

  test! {
    name: separator_lines_removed_entirely,
    stage: FilterLinesStage,
    content: "above\n----------\nbelow",
    expected: "above\nbelow",
  }

  test! {
    name: placeholder_lines_removed_entirely,
    stage: FilterLinesStage,
    content: "above\n.\nbelow",
    expected: "above\nbelow",
  }

  test! {
    name: trailing_dash_in_prose_is_preserved,
    stage: FilterLinesStage,
    content: "a sentence ending in a dash -",
    expected: "a sentence ending in a dash -",
  }

  test! {
    name: double_symbols_are_not_placeholders,
    stage: FilterLinesStage,
    content: "above\n..\nbelow",
    expected: "above\n..\nbelow",
  }

  #[test]
  fn denylisted_class_tokens_stripped_case_insensitively() {
    let denylist = Regex::new(r"(?i)\b(?:ch_description)\b").unwrap();
    let mut context =
      Context::new("text CH_Description more".to_string(), Some(&denylist));

    FilterLinesStage.run(&mut context).unwrap();

    pretty_assertions::assert_eq!(context.into_text(), "text  more");
  }
}
