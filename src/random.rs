use tracing::warn;
use uuid::{Builder, Uuid};

use crate::errors::{HelperError, Result};

/// Random `i32` from the thread-local CSPRNG (OS-seeded ChaCha).
pub fn rand32() -> i32 {
    rand::random()
}

/// Version-4 UUID in canonical hyphenated form.
pub fn new_uuid() -> Result<String> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|e| {
        warn!(error = %e, "os randomness unavailable");
        HelperError::Generation(format!("could not generate uuid: {e}"))
    })?;
    let id: Uuid = Builder::from_random_bytes(bytes).into_uuid();
    Ok(id.hyphenated().to_string())
}
