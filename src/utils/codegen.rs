use base64::Engine as _;
use rand::TryRngCore;
use rand::rngs::OsRng;

/// Mints a short URL-safe session code from OS randomness.
///
/// 9 random bytes encode to 12 base64 characters, which is plenty of
/// keyspace for an in-memory session map.
pub fn gen_code() -> Result<String, rand::rand_core::OsError> {
    let mut buf = [0u8; 9];
    OsRng.try_fill_bytes(&mut buf)?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf))
}
