//! Distributed trace context — W3C `traceparent` value object.
//!
//! The context is an explicit value handed down the pipeline and injected
//! into outbound requests by adapters; span export is not modeled here.

use std::fmt;
use std::str::FromStr;

/// Header carrying the context between services.
pub const TRACEPARENT_HEADER: &str = "traceparent";

/// A propagated trace position: trace id, parent span id, sampling flag.
///
/// Renders as `00-<32 hex>-<16 hex>-<2 hex>` and parses the same shape.
/// All-zero trace or span ids are invalid per the header contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceContext {
    trace_id: u128,
    span_id: u64,
    sampled: bool,
}

impl TraceContext {
    /// Start a new trace with random ids, sampled.
    #[must_use]
    pub fn new_root() -> Self {
        // uuid v4 keeps its version bits set, so neither id can be zero.
        Self {
            trace_id: uuid::Uuid::new_v4().as_u128(),
            span_id: uuid::Uuid::new_v4().as_u64_pair().0,
            sampled: true,
        }
    }

    /// Derive a child position: same trace id, fresh span id.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            trace_id: self.trace_id,
            span_id: uuid::Uuid::new_v4().as_u64_pair().0,
            sampled: self.sampled,
        }
    }

    /// The 32-character lowercase-hex trace id.
    #[must_use]
    pub fn trace_id_hex(&self) -> String {
        format!("{:032x}", self.trace_id)
    }

    /// The 16-character lowercase-hex span id.
    #[must_use]
    pub fn span_id_hex(&self) -> String {
        format!("{:016x}", self.span_id)
    }

    /// Whether the caller requested sampling.
    #[must_use]
    pub fn is_sampled(&self) -> bool {
        self.sampled
    }
}

impl fmt::Display for TraceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "00-{:032x}-{:016x}-{}",
            self.trace_id,
            self.span_id,
            if self.sampled { "01" } else { "00" }
        )
    }
}

/// Failure to parse a `traceparent` header value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed traceparent header")]
pub struct ParseTraceContextError;

impl FromStr for TraceContext {
    type Err = ParseTraceContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(version), Some(trace), Some(span), Some(flags), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(ParseTraceContextError);
        };
        if version != "00" || trace.len() != 32 || span.len() != 16 || flags.len() != 2 {
            return Err(ParseTraceContextError);
        }
        let trace_id = u128::from_str_radix(trace, 16).map_err(|_| ParseTraceContextError)?;
        let span_id = u64::from_str_radix(span, 16).map_err(|_| ParseTraceContextError)?;
        let flags = u8::from_str_radix(flags, 16).map_err(|_| ParseTraceContextError)?;
        if trace_id == 0 || span_id == 0 {
            return Err(ParseTraceContextError);
        }
        Ok(Self {
            trace_id,
            span_id,
            sampled: (flags & 0x01) == 0x01,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01";

    #[test]
    fn should_parse_canonical_header() {
        let ctx: TraceContext = SAMPLE.parse().unwrap();
        assert_eq!(ctx.trace_id_hex(), "0af7651916cd43dd8448eb211c80319c");
        assert_eq!(ctx.span_id_hex(), "b7ad6b7169203331");
        assert!(ctx.is_sampled());
    }

    #[test]
    fn should_roundtrip_through_display() {
        let ctx: TraceContext = SAMPLE.parse().unwrap();
        assert_eq!(ctx.to_string(), SAMPLE);
        let reparsed: TraceContext = ctx.to_string().parse().unwrap();
        assert_eq!(reparsed, ctx);
    }

    #[test]
    fn should_parse_unsampled_flags() {
        let header = "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-00";
        let ctx: TraceContext = header.parse().unwrap();
        assert!(!ctx.is_sampled());
    }

    #[test]
    fn should_reject_unknown_version() {
        let header = "01-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01";
        assert!(header.parse::<TraceContext>().is_err());
    }

    #[test]
    fn should_reject_wrong_field_lengths() {
        assert!("00-abc-b7ad6b7169203331-01".parse::<TraceContext>().is_err());
        assert!(
            "00-0af7651916cd43dd8448eb211c80319c-abc-01"
                .parse::<TraceContext>()
                .is_err()
        );
    }

    #[test]
    fn should_reject_all_zero_ids() {
        assert!(
            "00-00000000000000000000000000000000-b7ad6b7169203331-01"
                .parse::<TraceContext>()
                .is_err()
        );
        assert!(
            "00-0af7651916cd43dd8448eb211c80319c-0000000000000000-01"
                .parse::<TraceContext>()
                .is_err()
        );
    }

    #[test]
    fn should_reject_non_hex_fields() {
        let header = "00-zzf7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01";
        assert!(header.parse::<TraceContext>().is_err());
    }

    #[test]
    fn should_keep_trace_id_in_children() {
        let root = TraceContext::new_root();
        let child = root.child();
        assert_eq!(child.trace_id_hex(), root.trace_id_hex());
        assert_ne!(child.span_id_hex(), root.span_id_hex());
        assert_eq!(child.is_sampled(), root.is_sampled());
    }

    #[test]
    fn should_generate_distinct_roots() {
        let a = TraceContext::new_root();
        let b = TraceContext::new_root();
        assert_ne!(a.trace_id_hex(), b.trace_id_hex());
    }
}
