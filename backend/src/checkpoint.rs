//! Checkpoint - Save/Load Generator State
//!
//! Serializes the full stream position of a generator so a run can be paused
//! and resumed, or a stream forked on purpose.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator emits exactly the outputs the
//!   source generator would have emitted from the same point
//! - **Integrity**: State length, cursor range and checksum are verified on
//!   restore

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::RngError;
use crate::rng::{Generator, STATE_SIZE};

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// All 624 state words
    pub state: Vec<u32>,

    /// Index of the next unconsumed word (624 = regeneration pending)
    pub cursor: usize,

    pub initialized: bool,

    /// Twist passes performed before the snapshot
    pub regenerations: u64,

    /// SHA256 over the fields above (for validation)
    pub checksum: String,
}

/// Checksummed portion of a snapshot
#[derive(Serialize)]
struct SnapshotBody<'a> {
    state: &'a [u32],
    cursor: usize,
    initialized: bool,
    regenerations: u64,
}

impl GeneratorSnapshot {
    fn body(&self) -> SnapshotBody<'_> {
        SnapshotBody {
            state: &self.state,
            cursor: self.cursor,
            initialized: self.initialized,
            regenerations: self.regenerations,
        }
    }

    pub fn to_json(&self) -> Result<String, RngError> {
        serde_json::to_string(self).map_err(|e| {
            RngError::SerializationError(format!("Snapshot serialization failed: {}", e))
        })
    }

    pub fn from_json(json: &str) -> Result<Self, RngError> {
        serde_json::from_str(json).map_err(|e| {
            RngError::SerializationError(format!("Snapshot deserialization failed: {}", e))
        })
    }
}

impl Generator {
    /// Capture the current stream position
    ///
    /// # Example
    /// ```
    /// use mtrand_core_rs::Generator;
    ///
    /// let mut rng = Generator::with_seed(7);
    /// rng.next_uint32();
    /// let snapshot = rng.snapshot().unwrap();
    ///
    /// let mut fork = Generator::restore(&snapshot).unwrap();
    /// assert_eq!(rng.next_uint32(), fork.next_uint32());
    /// ```
    pub fn snapshot(&self) -> Result<GeneratorSnapshot, RngError> {
        let mut snapshot = GeneratorSnapshot {
            state: self.state().to_vec(),
            cursor: self.cursor(),
            initialized: self.is_initialized(),
            regenerations: self.regeneration_count(),
            checksum: String::new(),
        };
        snapshot.checksum = compute_hash(&snapshot.body())?;
        Ok(snapshot)
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// Returns `InvalidSnapshot` if the state length, cursor or checksum is
    /// wrong.
    pub fn restore(snapshot: &GeneratorSnapshot) -> Result<Self, RngError> {
        validate_snapshot(snapshot)?;

        let mut state = [0u32; STATE_SIZE];
        state.copy_from_slice(&snapshot.state);

        tracing::debug!(
            cursor = snapshot.cursor,
            regenerations = snapshot.regenerations,
            "restored generator from snapshot"
        );
        Ok(Generator::from_parts(
            state,
            snapshot.cursor,
            snapshot.initialized,
            snapshot.regenerations,
        ))
    }
}

// ============================================================================
// Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of any serializable value
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on field or map ordering.
pub fn compute_hash<T: Serialize + ?Sized>(value: &T) -> Result<String, RngError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(value)
        .map_err(|e| RngError::SerializationError(format!("Hash input serialization failed: {}", e)))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| RngError::SerializationError(format!("Hash input serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Validation
// ============================================================================

/// Validate snapshot integrity
///
/// Checks:
/// - State holds exactly 624 words
/// - Cursor is within `[0, 624]`
/// - Checksum matches the contents
pub fn validate_snapshot(snapshot: &GeneratorSnapshot) -> Result<(), RngError> {
    if snapshot.state.len() != STATE_SIZE {
        return Err(RngError::InvalidSnapshot(format!(
            "expected {} state words, got {}",
            STATE_SIZE,
            snapshot.state.len()
        )));
    }

    if snapshot.cursor > STATE_SIZE {
        return Err(RngError::InvalidSnapshot(format!(
            "cursor {} out of range [0, {}]",
            snapshot.cursor, STATE_SIZE
        )));
    }

    let expected = compute_hash(&snapshot.body())?;
    if expected != snapshot.checksum {
        return Err(RngError::InvalidSnapshot(format!(
            "checksum mismatch: expected {}, got {}",
            expected, snapshot.checksum
        )));
    }

    Ok(())
}
