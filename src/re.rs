use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

macro_rules! line_re {
  ($pat:expr) => {
    LazyLock::new(|| {
      Regex::new(concat!(r"(?m)^[ \t]*", $pat, r"[ \t]*\r?$\n?")).unwrap()
    })
  };
}

pub(crate) static ANIMATED_STYLE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\banimation(?:-[a-z]+)?\s*:").unwrap());

pub(crate) static DENYLIST_TOKEN: LazyLock<Regex> =
  re!(r"[A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)*");

pub(crate) static DIV_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)</div\s*>").unwrap());

pub(crate) static DIV_OPEN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<div\b[^>]*>").unwrap());

pub(crate) static EMPTY_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?is)<(?:div|span|p)\b[^>]*>\s*</(?:div|span|p)\s*>").unwrap()
});

pub(crate) static HEADING_TAG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)</?h[1-6]\b[^>]*>").unwrap());

pub(crate) static HORIZONTAL_WS_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[ \t\x{A0}]{2,}").unwrap());

pub(crate) static IMAGE_OR_URL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)!\[[^\]]*\]\([^)]*\)|\b[a-z][a-z0-9+.-]*://\S+").unwrap()
});

pub(crate) static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)</?(?:em|strong|b|i|u|span)\b[^>]*>").unwrap()
});

pub(crate) static LINE_BREAK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<br\b[^>]*>").unwrap());

pub(crate) static LINE_EDGE_WS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^[ \t\x{A0}]+|[ \t\x{A0}]+$").unwrap()
});

pub(crate) static LIST_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)</[uo]l\s*>").unwrap());

pub(crate) static LIST_ITEM_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)</li\s*>").unwrap());

pub(crate) static LIST_ITEM_OPEN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").unwrap());

pub(crate) static LIST_OPEN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<[uo]l\b[^>]*>").unwrap());

pub(crate) static MARKUP_COMMENT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

pub(crate) static NAMED_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"&(?P<name>quot|amp|apos|lt|gt|nbsp);").unwrap()
});

pub(crate) static NEWLINE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

pub(crate) static NUMERIC_ENTITY: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"&#(?:x([0-9a-fA-F]+)|([0-9]+));").unwrap());

pub(crate) static PARAGRAPH_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)</p\s*>").unwrap());

pub(crate) static PARAGRAPH_OPEN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<p\b[^>]*>").unwrap());

/// A line consisting solely of one placeholder symbol, conventionally
/// meaning "intentionally empty". Consumes the line terminator.
pub(crate) static PLACEHOLDER_LINE: LazyLock<Regex> = line_re!(r"[.*_~…-]");

pub(crate) static POSITIONED_STYLE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)\bposition\s*:\s*(?:absolute|fixed)\b").unwrap()
});

pub(crate) static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap()
});

/// A line consisting solely of 3+ repeated separator symbols, the visual
/// rule convention. Consumes the line terminator.
pub(crate) static SEPARATOR_LINE: LazyLock<Regex> =
  line_re!(r"[-_~=*\\/]{3,}");

pub(crate) static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap()
});

pub(crate) static STYLED_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(concat!(
    r#"(?is)<(?:div|span)\b[^>]*?\bstyle\s*=\s*"#,
    r#"(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#,
    r"[^>]*>.*?</(?:div|span)\s*>"
  ))
  .unwrap()
});

pub(crate) static TAG_TOKEN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

pub(crate) static ZERO_OPACITY_STYLE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)\bopacity\s*:\s*0+(?:\.0+)?\s*(?:;|!|$)").unwrap()
});
