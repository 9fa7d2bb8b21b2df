use super::*;

/// Fixed interval between container discovery attempts.
const DISCOVERY_RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Deferral applied after a UI transition so the host can finish rendering.
const RENDER_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Debounce applied to bursts of content-change notifications.
const CONTENT_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Host-side UI transitions that drive normalization passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
  ContainerShown,
  ContentChanged,
  ItemsMutated,
  NavigationCompleted,
}

/// Identity token for a bound watch. A delivery carrying a stale token is
/// dropped, so a released observer can never produce a duplicate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// How a bind attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
  /// This container instance already has a live watch.
  AlreadyBound(ObserverHandle),
  /// A watch was installed on a container seen for the first time.
  Bound(ObserverHandle),
  /// The container was replaced; the prior watch was released first.
  Rebound(ObserverHandle),
}

impl BindOutcome {
  pub fn observer(self) -> ObserverHandle {
    match self {
      Self::AlreadyBound(observer)
      | Self::Bound(observer)
      | Self::Rebound(observer) => observer,
    }
  }
}

/// A normalization pass the host should run once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledPass {
  pub delay: Duration,
}

/// Counts for one batch, plus whether the delivery was dropped as stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassOutcome {
  pub processed: usize,
  pub skipped: usize,
  pub stale: bool,
}

struct WatchState {
  instance: u64,
  observer: ObserverHandle,
}

/// Applies the normalizer to qualifying nodes exactly once under steady
/// state, re-applying only under the bounded conditions the options allow.
///
/// The applier owns one `WatchState` per container key; node collections
/// are handed in by the host on every pass, so the core never touches
/// shared tree state it did not select.
pub struct Applier {
  normalizer: Normalizer,
  observer_sequence: u64,
  watches: HashMap<String, WatchState>,
}

impl Applier {
  pub fn new(normalizer: Normalizer) -> Self {
    Self {
      normalizer,
      observer_sequence: 0,
      watches: HashMap::new(),
    }
  }

  /// Directive for a host that could not find the container yet: try again
  /// after a fixed, cheap interval. Self-terminates once binding succeeds.
  pub fn container_missing(&self, key: &str) -> Duration {
    trace!(container = key, "container not present, scheduling retry");

    DISCOVERY_RETRY_INTERVAL
  }

  /// Binds a watch to a container instance, releasing any watch held for a
  /// prior instance of the same key first. Binding the same instance twice
  /// is a no-op.
  pub fn ensure_bound(&mut self, key: &str, instance: u64) -> BindOutcome {
    if let Some(state) = self.watches.get(key)
      && state.instance == instance
    {
      return BindOutcome::AlreadyBound(state.observer);
    }

    let replaced = self.release(key);
    let observer = self.next_observer();

    self
      .watches
      .insert(key.to_string(), WatchState { instance, observer });

    if replaced {
      debug!(
        container = key,
        observer = observer.0,
        "watch rebound after container replacement"
      );

      BindOutcome::Rebound(observer)
    } else {
      debug!(container = key, observer = observer.0, "watch attached");

      BindOutcome::Bound(observer)
    }
  }

  pub fn normalizer(&self) -> &Normalizer {
    &self.normalizer
  }

  /// Tears down the watch for a container. Returns whether one was held.
  pub fn release(&mut self, key: &str) -> bool {
    match self.watches.remove(key) {
      Some(state) => {
        debug!(
          container = key,
          observer = state.observer.0,
          "watch released"
        );

        true
      }
      None => false,
    }
  }

  /// Processes a whole batch of nodes for one delivery. Writes are
  /// suppressed when the canonical text already matches the node, so
  /// setting the processed marker can never re-trigger a qualifying
  /// mutation.
  pub fn run_pass<N: MarkupNode>(
    &mut self,
    key: &str,
    observer: ObserverHandle,
    nodes: &mut [N],
  ) -> Result<PassOutcome> {
    let Some(state) = self.watches.get(key) else {
      return Err(Error::WatchNotBound(key.to_string()));
    };

    if state.observer != observer {
      trace!(container = key, "dropping delivery from stale observer");

      return Ok(PassOutcome {
        stale: true,
        ..PassOutcome::default()
      });
    }

    let mut outcome = PassOutcome::default();

    for node in nodes {
      if !self.qualifies(node) {
        outcome.skipped += 1;
        continue;
      }

      let text = self.normalizer.normalize(&node.raw_content());

      if text != node.current_text() {
        node.set_text(&text);
      }

      node.mark_processed();
      outcome.processed += 1;
    }

    debug!(
      container = key,
      processed = outcome.processed,
      skipped = outcome.skipped,
      "normalization pass complete"
    );

    Ok(outcome)
  }

  /// Maps a host transition to the pass the host should schedule.
  pub fn schedule(&self, event: HostEvent) -> ScheduledPass {
    let delay = match event {
      HostEvent::ContainerShown | HostEvent::NavigationCompleted => {
        RENDER_SETTLE_DELAY
      }
      HostEvent::ContentChanged => CONTENT_CHANGE_DEBOUNCE,
      HostEvent::ItemsMutated => Duration::ZERO,
    };

    ScheduledPass { delay }
  }

  fn next_observer(&mut self) -> ObserverHandle {
    self.observer_sequence += 1;

    ObserverHandle(self.observer_sequence)
  }

  fn qualifies<N: MarkupNode>(&self, node: &N) -> bool {
    if !node.attached() {
      return false;
    }

    if !node.processed() {
      return true;
    }

    self.normalizer.options().reprocess_tag_like
      && node.visible()
      && re::TAG_TOKEN.is_match(&node.raw_content())
  }
}
