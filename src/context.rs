use super::*;

pub(crate) struct Context<'a> {
  denylist: Option<&'a Regex>,
  text: String,
}

impl<'a> Context<'a> {
  pub(crate) fn denylist(&self) -> Option<&Regex> {
    self.denylist
  }

  pub(crate) fn into_text(self) -> String {
    self.text
  }

  pub(crate) fn new(text: String, denylist: Option<&'a Regex>) -> Self {
    Self { denylist, text }
  }

  pub(crate) fn set_text(&mut self, text: String) {
    self.text = text;
  }

  pub(crate) fn take_text(&mut self) -> String {
    mem::take(&mut self.text)
  }
}
