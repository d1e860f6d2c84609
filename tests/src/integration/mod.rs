//! Cross-crate integration tests.

pub mod properties;

/// Development signing key shared by the suite. Its address is
/// `0x0d1d4e623d10f9fba5db95830f7d3839406c6af2`.
pub const DEV_KEY: &str = "0x388c684f0ba1ef5017716adb5d21a053ea8e90277d0868337519f97bede61418";

/// Canonical deal-parameter encoding: seven 32-byte big-endian fields
/// (roundIndex=2, requiredBalance=3e18, setupDeadline=5000000,
/// reportDeadline=6000000, dealId, payment=11e18, termsCommit).
pub const CANONICAL_PARAMS_HEX: &str = concat!(
    "0x",
    "0000000000000000000000000000000000000000000000000000000000000002",
    "00000000000000000000000000000000000000000000000029a2241af62c0000",
    "00000000000000000000000000000000000000000000000000000000004c4b40",
    "00000000000000000000000000000000000000000000000000000000005b8d80",
    "abcdef47abcdef47abcdef47abcdef47abcdef47abcdef47abcdef47abcdef47",
    "00000000000000000000000000000000000000000000000098a7d9b8314c0000",
    "1122334455667788112233445566778811223344556677881122334455667788",
);

/// Keccak-256 of the canonical parameter bytes.
pub const CANONICAL_PARAMS_HASH: &str =
    "0xe587d3d48510f67b15a72b9566d6c1e5eef15be530ad0d9c2f52473e8c97d9f7";

/// Expected endorsement of the canonical commitment under [`DEV_KEY`].
pub const CANONICAL_V: u8 = 27;
/// First signature scalar for the canonical commitment.
pub const CANONICAL_R: &str =
    "0x8185d067f84fa954f4d21b99367e6f23bb186b75b131a05dd58a75d6d902767a";
/// Second signature scalar for the canonical commitment.
pub const CANONICAL_S: &str =
    "0x19481aed82dc28e5256c4205f60e4acc31bdeb7f0aacaeeae967dcce078adac0";
