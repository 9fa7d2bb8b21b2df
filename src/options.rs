use super::*;

/// Tuning knobs for normalization and re-application.
///
/// The separator and placeholder symbol sets are fixed tables compiled into
/// the normalizer; only the class-token denylist and the aggressive
/// reprocessing mode are configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
  /// Styling-class tokens that may leak through as bare words, stripped
  /// from flat text case-insensitively.
  pub class_denylist: Vec<String>,
  /// Reprocess visible nodes whose content still looks tag-like even when
  /// already flagged as processed. Safe only because normalization is
  /// idempotent.
  pub reprocess_tag_like: bool,
}

impl NormalizerOptions {
  #[must_use]
  pub fn builder() -> NormalizerOptionsBuilder {
    NormalizerOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct NormalizerOptionsBuilder {
  inner: NormalizerOptions,
}

impl NormalizerOptionsBuilder {
  #[must_use]
  pub fn build(self) -> NormalizerOptions {
    self.inner
  }

  #[must_use]
  pub fn class_denylist<I, S>(self, tokens: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: NormalizerOptions {
        class_denylist: tokens.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn reprocess_tag_like(self, reprocess_tag_like: bool) -> Self {
    Self {
      inner: NormalizerOptions {
        reprocess_tag_like,
        ..self.inner
      },
    }
  }
}
