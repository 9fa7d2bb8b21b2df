use super::*;

/// Rewrites markup character entities into literal characters. Purely
/// lexical; the markup is never rendered. Runs twice in the default
/// pipeline: once up front and once after tag stripping, to catch entities
/// the earlier passes re-introduce.
pub struct DecodeEntitiesStage;

impl Stage for DecodeEntitiesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let text = context.take_text();

    context.set_text(Self::decode(&text));

    Ok(())
  }
}

impl DecodeEntitiesStage {
  const REPLACEMENT_CHAR: char = '\u{FFFD}';

  fn decode(input: &str) -> String {
    if !input.contains('&') {
      return input.to_string();
    }

    let named_decoded = re::NAMED_ENTITY.replace_all(
      input,
      |captures: &regex::Captures<'_>| -> String {
        match &captures["name"] {
          "quot" => "\"".to_string(),
          "amp" => "&".to_string(),
          "apos" => "'".to_string(),
          "lt" => "<".to_string(),
          "gt" => ">".to_string(),
          "nbsp" => " ".to_string(),
          _ => captures
            .get(0)
            .map_or(String::new(), |m| m.as_str().to_string()),
        }
      },
    );

    re::NUMERIC_ENTITY
      .replace_all(&named_decoded, |captures: &regex::Captures<'_>| {
        let (value, radix) = if let Some(hex) = captures.get(1) {
          (hex.as_str(), 16)
        } else if let Some(num) = captures.get(2) {
          (num.as_str(), 10)
        } else {
          return captures.get(0).map_or(String::new(), |m| m.as_str().into());
        };

        let parsed =
          u32::from_str_radix(value, radix).unwrap_or(u32::from(Self::REPLACEMENT_CHAR));

        Self::decode_codepoint(parsed).to_string()
      })
      .into_owned()
  }

  fn decode_codepoint(value: u32) -> char {
    const SURROGATE_START: u32 = 0xD800;
    const SURROGATE_END: u32 = 0xDFFF;
    const MAX_CODEPOINT: u32 = 0x0010_FFFF;

    if value == 0
      || value > MAX_CODEPOINT
      || (SURROGATE_START..=SURROGATE_END).contains(&value)
    {
      Self::REPLACEMENT_CHAR
    } else {
      char::from_u32(value).unwrap_or(Self::REPLACEMENT_CHAR)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  test! {
    name: decodes_named_entities,
    stage: DecodeEntitiesStage,
    content: "&lt;p&gt;Fish &amp; chips&lt;/p&gt;",
    expected: "<p>Fish & chips</p>",
  }

  test! {
    name: decodes_numeric_entities,
    stage: DecodeEntitiesStage,
    content: "&#65;&#x42;&#x1F600;",
    expected: "AB😀",
  }

  test! {
    name: nbsp_becomes_plain_space,
    stage: DecodeEntitiesStage,
    content: "a&nbsp;b",
    expected: "a b",
  }

  test! {
    name: invalid_codepoints_become_replacement_char,
    stage: DecodeEntitiesStage,
    content: "&#0;&#xD800;&#x110000;",
    expected: "\u{FFFD}\u{FFFD}\u{FFFD}",
  }

  test! {
    name: plain_text_is_untouched,
    stage: DecodeEntitiesStage,
    content: "Tom & Jerry",
    expected: "Tom & Jerry",
  }
}
