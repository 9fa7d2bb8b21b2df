use {
  context::Context,
  pipeline::Pipeline,
  regex::Regex,
  serde::{Deserialize, Serialize},
  stage::{
    CollapseWhitespaceStage, DecodeEntitiesStage, FilterLinesStage,
    PreserveStructureStage, RemoveNonContentStage, Stage, StripTagsStage,
  },
  std::{collections::HashMap, mem, sync::LazyLock, time::Duration},
  tracing::{debug, trace},
};

pub use crate::{
  applier::{
    Applier, BindOutcome, HostEvent, ObserverHandle, PassOutcome,
    ScheduledPass,
  },
  error::Error,
  node::MarkupNode,
  normalizer::Normalizer,
  options::{NormalizerOptions, NormalizerOptionsBuilder},
};

mod applier;
mod context;
mod error;
mod node;
mod normalizer;
mod options;
mod pipeline;
mod re;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
