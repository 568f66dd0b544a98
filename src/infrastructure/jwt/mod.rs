//! Token signing backed by `jsonwebtoken`.

mod jwt_signer;

pub use jwt_signer::{Claims, JwtSigner, TOKEN_TTL_DAYS, verify};
