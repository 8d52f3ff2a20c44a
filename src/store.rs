// 🗄️ Receipt Store - Identifier generation + points table
// Owns the id → points mapping. One mutex guards both the map and the RNG, so
// record/lookup are mutually exclusive and ids come from a single sequence.

use crate::receipt::Receipt;
use crate::scoring::{self, Points};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Group lengths of a receipt id (8-4-4-4-12)
pub const ID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

// ============================================================================
// STORE
// ============================================================================

/// In-memory receipt points store
///
/// Construct once and share (`Arc<ReceiptStore>`) with whatever serves
/// requests. Nothing is persisted; the table lives as long as the store.
pub struct ReceiptStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    rng: StdRng,
    points: HashMap<String, Points>,
}

impl ReceiptStore {
    /// Create an empty store with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty store whose ids follow a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        ReceiptStore {
            inner: Mutex::new(StoreInner {
                rng,
                points: HashMap::new(),
            }),
        }
    }

    /// Score a receipt and store the result under a fresh id
    pub fn record(&self, receipt: &Receipt) -> String {
        let points = scoring::calculate(receipt);

        let mut inner = self.inner.lock();
        let id = loop {
            let candidate = generate_id(&mut inner.rng);
            if !inner.points.contains_key(&candidate) {
                break candidate;
            }
            tracing::warn!(id = %candidate, "generated id collided with an existing receipt, retrying");
        };
        inner.points.insert(id.clone(), points);
        drop(inner);

        tracing::info!(id = %id, points, retailer = %receipt.retailer, "receipt recorded");
        id
    }

    /// Points stored for `id`, or `None` if the id was never issued
    pub fn lookup(&self, id: &str) -> Option<Points> {
        self.inner.lock().points.get(id).copied()
    }

    /// Number of receipts recorded
    pub fn len(&self) -> usize {
        self.inner.lock().points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ID GENERATION
// ============================================================================

/// Random lowercase-alphanumeric groups joined by '-'
///
/// Shaped like a UUID but not one: no version bits, no uniqueness guarantee
/// beyond the generator's.
fn generate_id<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(ID_GROUPS.iter().sum::<usize>() + ID_GROUPS.len() - 1);
    for (i, len) in ID_GROUPS.iter().enumerate() {
        if i > 0 {
            id.push('-');
        }
        for _ in 0..*len {
            let idx = rng.gen_range(0..ID_CHARSET.len());
            id.push(ID_CHARSET[idx] as char);
        }
    }
    id
}

/// Check that `id` has the shape produced by the store
pub fn is_well_formed_id(id: &str) -> bool {
    let groups: Vec<&str> = id.split('-').collect();
    groups.len() == ID_GROUPS.len()
        && groups.iter().zip(ID_GROUPS.iter()).all(|(group, len)| {
            group.len() == *len
                && group
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

// ============================================================================
// TESTS
// ============================================================================
