use super::*;

const EMPTY_CONTAINER_PASSES: usize = 8;

/// Deletes constructs that carry no content: style and script blocks with
/// their contents, markup comments, containers whose inline styling marks
/// them decorative, and empty containers.
pub struct RemoveNonContentStage;

impl Stage for RemoveNonContentStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let text = context.take_text();
    let text = re::STYLE_BLOCK.replace_all(&text, "");
    let text = re::SCRIPT_BLOCK.replace_all(&text, "");
    let text = re::MARKUP_COMMENT.replace_all(&text, "");
    let text = Self::remove_decorative_containers(&text);
    let text = Self::remove_empty_containers(text);

    context.set_text(text);

    Ok(())
  }
}

impl RemoveNonContentStage {
  /// Absolute or fixed positioning combined with an animation or zero
  /// opacity marks a container as purely presentational.
  fn is_decorative(style: &str) -> bool {
    re::POSITIONED_STYLE.is_match(style)
      && (re::ANIMATED_STYLE.is_match(style)
        || re::ZERO_OPACITY_STYLE.is_match(style))
  }

  fn remove_decorative_containers(text: &str) -> String {
    re::STYLED_CONTAINER
      .replace_all(text, |captures: &regex::Captures<'_>| {
        let style = captures
          .name("dq")
          .or_else(|| captures.name("sq"))
          .map_or("", |m| m.as_str());

        if Self::is_decorative(style) {
          String::new()
        } else {
          captures
            .get(0)
            .map_or(String::new(), |m| m.as_str().to_string())
        }
      })
      .into_owned()
  }

  /// Removing one empty container can empty its parent, so iterate to a
  /// fixed point with a bounded pass count.
  fn remove_empty_containers(text: String) -> String {
    let mut text = text;

    for _ in 0..EMPTY_CONTAINER_PASSES {
      let next = re::EMPTY_CONTAINER.replace_all(&text, "");

      if next == text {
        break;
      }

      text = next.into_owned();
    }

    text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  test! {
    name: style_blocks_removed_with_contents,
    stage: RemoveNonContentStage,
    content: "before<style>.x { color: red; }</style>after",
    expected: "beforeafter",
  }

  test! {
    name: script_blocks_removed_with_contents,
    stage: RemoveNonContentStage,
    content: "a<script type=\"text/javascript\">alert('x')</script>b",
    expected: "ab",
  }

  test! {
    name: markup_comments_removed,
    stage: RemoveNonContentStage,
    content: "keep<!-- drop\nthis -->keep",
    expected: "keepkeep",
  }

  test! {
    name: decorative_container_removed_entirely,
    stage: RemoveNonContentStage,
    content: "x<div style=\"position:absolute; animation: pulse 2s;\">✨</div>y",
    expected: "xy",
  }

  test! {
    name: hidden_container_removed_entirely,
    stage: RemoveNonContentStage,
    content: "x<span style='position: fixed; opacity: 0;'>ghost</span>y",
    expected: "xy",
  }

  test! {
    name: styled_content_container_is_kept,
    stage: RemoveNonContentStage,
    content: "<div style=\"color: red\">real text</div>",
    expected: "<div style=\"color: red\">real text</div>",
  }

  test! {
    name: positioned_but_visible_container_is_kept,
    stage: RemoveNonContentStage,
    content: "<div style=\"position:absolute\">tooltip text</div>",
    expected: "<div style=\"position:absolute\">tooltip text</div>",
  }

  test! {
    name: nested_empty_containers_removed,
    stage: RemoveNonContentStage,
    content: "a<div><span> </span></div>b",
    expected: "ab",
  }
}
