use super::*;

mod collapse_whitespace;
mod decode_entities;
mod filter_lines;
mod preserve_structure;
mod remove_non_content;
mod strip_tags;

pub(crate) use {
  collapse_whitespace::CollapseWhitespaceStage,
  decode_entities::DecodeEntitiesStage, filter_lines::FilterLinesStage,
  preserve_structure::PreserveStructureStage,
  remove_non_content::RemoveNonContentStage, strip_tags::StripTagsStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}

#[cfg(test)]
macro_rules! test {
  {
    name: $name:ident,
    stage: $stage:expr,
    content: $content:expr,
    expected: $expected:expr,
  } => {
    #[test]
    fn $name() {
      let mut context = Context::new($content.to_string(), None);
      let mut stage = $stage;

      stage.run(&mut context).unwrap();

      pretty_assertions::assert_eq!(context.into_text(), $expected);
    }
  };
}

#[cfg(test)]
pub(crate) use test;
