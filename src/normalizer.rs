use super::*;

/// Stateless markup-to-text canonicalizer.
///
/// `normalize` is total: malformed markup degrades to best-effort literal
/// text, and re-running on already-canonical text leaves it unchanged.
pub struct Normalizer {
  denylist: Option<Regex>,
  options: NormalizerOptions,
}

impl Normalizer {
  pub fn new(options: NormalizerOptions) -> Result<Self> {
    let denylist = Self::compile_denylist(&options.class_denylist)?;

    Ok(Self { denylist, options })
  }

  pub fn normalize(&self, raw: &str) -> String {
    if raw.trim().is_empty() {
      return String::new();
    }

    let context = Context::new(raw.to_string(), self.denylist.as_ref());

    match Pipeline::with_default_stages(context).run() {
      Ok(context) => context.into_text(),
      Err(_) => raw.trim().to_string(),
    }
  }

  pub fn options(&self) -> &NormalizerOptions {
    &self.options
  }

  fn compile_denylist(tokens: &[String]) -> Result<Option<Regex>> {
    if tokens.is_empty() {
      return Ok(None);
    }

    for token in tokens {
      if !re::DENYLIST_TOKEN.is_match(token) {
        return Err(Error::InvalidDenylistToken {
          token: token.clone(),
        });
      }
    }

    let alternation = tokens
      .iter()
      .map(|token| regex::escape(token))
      .collect::<Vec<String>>()
      .join("|");

    let pattern = format!(r"(?i)\b(?:{alternation})\b");

    Ok(Some(Regex::new(&pattern)?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn normalizer() -> Normalizer {
    Normalizer::new(NormalizerOptions::default()).unwrap()
  }

  #[test]
  fn empty_input_yields_empty_output() {
    assert_eq!(normalizer().normalize(""), "");
    assert_eq!(normalizer().normalize("  \n\t "), "");
  }

  #[test]
  fn idempotent_on_canonical_text() {
    let inputs = [
      "<h1>Bio</h1><p>Likes <b>tea</b>.</p>",
      "<ul><li>Cats</li><li>Dogs</li></ul>",
      "plain text with a dash - and dots...",
      "para one<br><br>para two",
      "&quot;quoted&quot; &amp; plain",
    ];

    let normalizer = normalizer();

    for input in inputs {
      let once = normalizer.normalize(input);
      let twice = normalizer.normalize(&once);

      pretty_assertions::assert_eq!(once, twice, "not idempotent: {input}");
    }
  }

  #[test]
  fn malformed_markup_degrades_to_literal_text() {
    assert_eq!(normalizer().normalize("<b unclosed tag"), "<b unclosed tag");
  }

  #[test]
  fn invalid_denylist_token_is_rejected() {
    let options = NormalizerOptions::builder()
      .class_denylist(["two words"])
      .build();

    assert!(matches!(
      Normalizer::new(options),
      Err(Error::InvalidDenylistToken { .. })
    ));
  }

  #[test]
  fn denylist_tokens_are_stripped_from_output() {
    let options = NormalizerOptions::builder()
      .class_denylist(["ch_description"])
      .build();

    let normalizer = Normalizer::new(options).unwrap();

    assert_eq!(
      normalizer.normalize("<p>ch_description Loves rain.</p>"),
      "Loves rain."
    );
  }
}
