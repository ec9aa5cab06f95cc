//! Records extracted from the upstream tables and the JSON envelopes that carry them

mod envelope;
mod records;

pub use envelope::{
    package, package_error, ErrorEnvelope, ResultBody, ResultEnvelope, BAD_REQUEST_MESSAGE,
    INTERNAL_ERROR_MESSAGE, LATEST_ROUND, MALFORMED_MARKUP_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE,
    NOT_FOUND_MESSAGE, UPSTREAM_ERROR_MESSAGE,
};
pub use records::{ScorerRow, StandingsRow};
