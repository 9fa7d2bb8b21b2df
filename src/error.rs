#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid denylist pattern: {source}")]
  InvalidDenylistPattern {
    #[from]
    source: regex::Error,
  },
  #[error("invalid denylist token `{token}`: expected a single bare word")]
  InvalidDenylistToken { token: String },
  #[error("no watch bound for container `{0}`")]
  WatchNotBound(String),
}
