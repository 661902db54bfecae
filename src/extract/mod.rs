//! Format-aware payload extraction.
//!
//! Turns a raw artifact into the flat byte sequence that gets rasterized. The
//! caller picks the strategy from the file type; the only content check done
//! here is the `MZ`/`PE\0\0` validation needed to strip PE headers.
//!
//! Extraction never fails. Any structural problem yields an empty payload,
//! which callers treat as "skip this artifact". [`extract_detailed`] also
//! reports why the payload came out the way it did.

pub mod listing;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::formats::pe::{self, PeError};

pub use listing::{strip_address_column, ListingPolicy, ListingStats};

/// Flat extracted byte sequence. May be empty.
pub type PayloadBytes = Vec<u8>;

/// Selects the extraction algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Every byte of the artifact, in file order.
    #[default]
    Raw,
    /// Bytes from `SizeOfHeaders` to EOF of a PE image.
    PeHeaderStrip,
    /// Hex bytes of a disassembly listing with the address column removed.
    AddressColumnStrip(ListingPolicy),
}

/// Extracted payload plus diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub payload: PayloadBytes,
    /// Set when PE header stripping rejected the artifact
    pub header_error: Option<PeError>,
    /// Listing counters; zero for non-listing strategies
    pub listing: ListingStats,
}

impl Extraction {
    /// True when there is nothing to rasterize.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Extract payload bytes from `artifact`.
pub fn extract(artifact: &[u8], strategy: ExtractionStrategy) -> PayloadBytes {
    extract_detailed(artifact, strategy).payload
}

/// Extract payload bytes together with the reason for any loss.
pub fn extract_detailed(artifact: &[u8], strategy: ExtractionStrategy) -> Extraction {
    let extraction = match strategy {
        ExtractionStrategy::Raw => Extraction {
            payload: artifact.to_vec(),
            ..Default::default()
        },
        ExtractionStrategy::PeHeaderStrip => match pe::strip_headers(artifact) {
            Ok(body) => Extraction {
                payload: body.to_vec(),
                ..Default::default()
            },
            Err(err) => {
                debug!(error = %err, len = artifact.len(), "PE header strip rejected artifact");
                Extraction {
                    header_error: Some(err),
                    ..Default::default()
                }
            }
        },
        ExtractionStrategy::AddressColumnStrip(policy) => {
            let (payload, stats) = strip_address_column(artifact, policy);
            debug!(
                ?policy,
                accepted = stats.accepted_lines,
                rejected = stats.rejected_lines,
                unparsable_tokens = stats.unparsable_tokens,
                "Stripped listing address column"
            );
            Extraction {
                payload,
                listing: stats,
                ..Default::default()
            }
        }
    };

    debug!(
        ?strategy,
        input = artifact.len(),
        payload = extraction.payload.len(),
        "Extracted payload"
    );
    extraction
}
