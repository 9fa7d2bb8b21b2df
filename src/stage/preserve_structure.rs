use super::*;

/// Rewrites block-level structure into newline conventions before generic
/// tag stripping: headings surrounded by a blank line, paragraphs followed
/// by one, list items bulleted, line breaks as single newlines.
///
/// Heading, paragraph, and list handling must run before the coarser
/// div/span unwrapping and line-break conversion; the later rewrites would
/// otherwise destroy the markers the earlier ones key on.
pub struct PreserveStructureStage;

impl Stage for PreserveStructureStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let text = context.take_text();
    let text = re::HEADING_TAG.replace_all(&text, "\n\n");
    let text = re::PARAGRAPH_OPEN.replace_all(&text, "");
    let text = re::PARAGRAPH_CLOSE.replace_all(&text, "\n\n");
    let text = re::LIST_OPEN.replace_all(&text, "\n");
    let text = re::LIST_CLOSE.replace_all(&text, "\n\n");
    let text = re::LIST_ITEM_OPEN.replace_all(&text, "• ");
    let text = re::LIST_ITEM_CLOSE.replace_all(&text, "\n");
    let text = re::INLINE_TAG.replace_all(&text, "");
    let text = re::DIV_OPEN.replace_all(&text, "");
    let text = re::DIV_CLOSE.replace_all(&text, "\n");
    let text = re::LINE_BREAK.replace_all(&text, "\n");

    context.set_text(text.into_owned());

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  test! {
    name: headings_are_surrounded_by_blank_lines,
    stage: PreserveStructureStage,
    content: "<h1>Title</h1>body",
    expected: "\n\nTitle\n\nbody",
  }

  test! {
    name: paragraphs_end_with_a_blank_line,
    stage: PreserveStructureStage,
    content: "<p>one</p><p>two</p>",
    expected: "one\n\ntwo\n\n",
  }

  test! {
    name: list_items_are_bulleted,
    stage: PreserveStructureStage,
    content: "<ul><li>a</li><li>b</li></ul>",
    expected: "\n• a\n• b\n\n\n",
  }

  test! {
    name: line_breaks_become_single_newlines,
    stage: PreserveStructureStage,
    content: "one<br>two<br />three",
    expected: "one\ntwo\nthree",
  }

  test! {
    name: inline_emphasis_is_unwrapped,
    stage: PreserveStructureStage,
    content: "likes <b>tea</b> and <em>cats</em>",
    expected: "likes tea and cats",
  }

  test! {
    name: divs_unwrap_with_trailing_newline,
    stage: PreserveStructureStage,
    content: "<div>first</div><div>second</div>",
    expected: "first\nsecond\n",
  }

  test! {
    name: attributes_do_not_defeat_rewrites,
    stage: PreserveStructureStage,
    content: "<h2 class=\"big\">T</h2><li data-index=\"0\">item</li>",
    expected: "\n\nT\n\n• item\n",
  }
}
