//! Constrained sampling
//!
//! Validates a request, builds the eligible pool, then draws either with
//! replacement or via a partial Fisher–Yates shuffle.

use tracing::debug;

use crate::error::DrawError;
use crate::random::RandomSource;
use crate::request::{DrawRequest, MAX_POOL_SPAN};

/// Run a draw
///
/// # Arguments
/// * `request` - Count, range, flags, exclusions and optional seed
///
/// # Returns
/// Exactly `request.count` values, or the first validation failure
pub fn draw(request: &DrawRequest) -> Result<Vec<i64>, DrawError> {
    let pool = eligible_pool(request)?;
    let mut source = RandomSource::resolve(request.effective_seed());

    debug!(
        count = request.count,
        min = request.min,
        max = request.max,
        unique = request.unique,
        pool_size = pool.len(),
        seeded = source.is_seeded(),
        "drawing numbers"
    );

    let mut out = if request.unique {
        sample_unique(pool, request.count, &mut source)
    } else {
        sample_with_replacement(&pool, request.count, &mut source)
    };

    if request.sort_ascending {
        out.sort_unstable();
    }
    Ok(out)
}

/// Validate a request without drawing
pub fn validate(request: &DrawRequest) -> Result<(), DrawError> {
    eligible_pool(request).map(|_| ())
}

/// Check the request and build its pool. Consumes no randomness.
fn eligible_pool(request: &DrawRequest) -> Result<Vec<i64>, DrawError> {
    if request.min > request.max {
        return Err(DrawError::InvalidRange { min: request.min, max: request.max });
    }
    if request.count == 0 {
        return Err(DrawError::InvalidCount);
    }

    let span = request.span();
    if span > MAX_POOL_SPAN {
        return Err(DrawError::range_too_large(span));
    }

    let pool = request.pool();
    if pool.is_empty() {
        return Err(DrawError::PoolExhausted { min: request.min, max: request.max });
    }
    if request.unique && request.count > pool.len() {
        return Err(DrawError::InsufficientPool {
            requested: request.count,
            available: pool.len(),
        });
    }
    Ok(pool)
}

/// Partial Fisher–Yates: only the first `count` slots are shuffled.
fn sample_unique(mut pool: Vec<i64>, count: usize, source: &mut RandomSource) -> Vec<i64> {
    debug_assert!(count <= pool.len());
    let len = pool.len();
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let j = source.next_index(len - i) + i;
        pool.swap(i, j);
        out.push(pool[i]);
    }
    out
}

fn sample_with_replacement(pool: &[i64], count: usize, source: &mut RandomSource) -> Vec<i64> {
    (0..count).map(|_| pool[source.next_index(pool.len())]).collect()
}
