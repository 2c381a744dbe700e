//! HMAC-SHA256 signature verification over raw webhook bodies.
//!
//! Verification always runs over the exact bytes received on the wire,
//! never a re-serialized form of the parsed body.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// How a provider encodes the HMAC digest in its signature header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureScheme {
    /// Bare lowercase hex digest (Gitea's `X-Gitea-Signature`).
    RawHex,
    /// `sha256=` followed by the hex digest (GitHub's `X-Hub-Signature-256`).
    PrefixedHex,
}

impl SignatureScheme {
    /// Strip the scheme's framing, leaving the bare hex digest.
    /// Returns `None` when the framing is wrong for this scheme.
    fn digest_hex<'a>(&self, provided: &'a str) -> Option<&'a str> {
        match self {
            Self::RawHex => Some(provided),
            Self::PrefixedHex => provided.strip_prefix("sha256="),
        }
    }
}

/// Verify a webhook signature.
///
/// An unset or empty `secret` makes verification succeed unconditionally.
/// This is a deliberate escape hatch for unsecured deployments; callers are
/// expected to surface that configuration state loudly at startup rather
/// than here, since this function is pure and runs per request.
///
/// With a secret present, the HMAC-SHA256 digest of `payload` keyed by the
/// secret is compared against `provided` under `scheme`. The comparison is
/// constant-time; malformed hex or a missing prefix simply fails.
pub fn verify(payload: &[u8], provided: &str, secret: Option<&str>, scheme: SignatureScheme) -> bool {
    let secret = match secret {
        Some(s) if !s.is_empty() => s,
        _ => return true,
    };

    let Some(digest_hex) = scheme.digest_hex(provided) else {
        return false;
    };
    let Ok(digest) = hex::decode(digest_hex) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload);
    mac.verify_slice(&digest).is_ok()
}

/// Compute the signature header value a well-behaved sender would attach.
pub fn compute(payload: &[u8], secret: &str, scheme: SignatureScheme) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload);
    let digest = hex::encode(mac.finalize().into_bytes());
    match scheme {
        SignatureScheme::RawHex => digest,
        SignatureScheme::PrefixedHex => format!("sha256={digest}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "relay-secret";

    #[test]
    fn correct_raw_hex_signature_verifies() {
        let payload = b"{\"ref\":\"refs/heads/main\"}";
        let sig = compute(payload, SECRET, SignatureScheme::RawHex);
        assert!(verify(payload, &sig, Some(SECRET), SignatureScheme::RawHex));
    }

    #[test]
    fn correct_prefixed_signature_verifies() {
        let payload = b"{\"ref\":\"refs/heads/main\"}";
        let sig = compute(payload, SECRET, SignatureScheme::PrefixedHex);
        assert!(sig.starts_with("sha256="));
        assert!(verify(payload, &sig, Some(SECRET), SignatureScheme::PrefixedHex));
    }

    #[test]
    fn altered_payload_fails() {
        let sig = compute(b"payload", SECRET, SignatureScheme::RawHex);
        assert!(!verify(b"payloae", &sig, Some(SECRET), SignatureScheme::RawHex));
    }

    #[test]
    fn altered_signature_fails() {
        let mut sig = compute(b"payload", SECRET, SignatureScheme::RawHex);
        let last = sig.pop().unwrap();
        sig.push(if last == '0' { '1' } else { '0' });
        assert!(!verify(b"payload", &sig, Some(SECRET), SignatureScheme::RawHex));
    }

    #[test]
    fn wrong_secret_fails() {
        let sig = compute(b"payload", SECRET, SignatureScheme::PrefixedHex);
        assert!(!verify(b"payload", &sig, Some("other"), SignatureScheme::PrefixedHex));
    }

    #[test]
    fn scheme_mismatch_fails() {
        let payload = b"payload";
        let raw = compute(payload, SECRET, SignatureScheme::RawHex);
        let prefixed = compute(payload, SECRET, SignatureScheme::PrefixedHex);
        assert!(!verify(payload, &raw, Some(SECRET), SignatureScheme::PrefixedHex));
        assert!(!verify(payload, &prefixed, Some(SECRET), SignatureScheme::RawHex));
    }

    #[test]
    fn unset_secret_bypasses_both_schemes() {
        assert!(verify(b"anything", "garbage", None, SignatureScheme::RawHex));
        assert!(verify(b"anything", "garbage", None, SignatureScheme::PrefixedHex));
        assert!(verify(b"anything", "", Some(""), SignatureScheme::RawHex));
        assert!(verify(b"anything", "", Some(""), SignatureScheme::PrefixedHex));
    }

    #[test]
    fn malformed_signatures_fail_without_panicking() {
        assert!(!verify(b"payload", "not-hex!", Some(SECRET), SignatureScheme::RawHex));
        assert!(!verify(b"payload", "sha256=zz", Some(SECRET), SignatureScheme::PrefixedHex));
        assert!(!verify(b"payload", "", Some(SECRET), SignatureScheme::RawHex));
        assert!(!verify(b"payload", "deadbeef", Some(SECRET), SignatureScheme::PrefixedHex));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_verifies(payload in proptest::collection::vec(any::<u8>(), 0..512), secret in "[a-zA-Z0-9]{1,32}") {
                for scheme in [SignatureScheme::RawHex, SignatureScheme::PrefixedHex] {
                    let sig = compute(&payload, &secret, scheme);
                    prop_assert!(verify(&payload, &sig, Some(&secret), scheme));
                }
            }

            #[test]
            fn single_byte_flip_fails(payload in proptest::collection::vec(any::<u8>(), 1..512), idx in any::<usize>()) {
                let secret = "prop-secret";
                let sig = compute(&payload, secret, SignatureScheme::RawHex);
                let mut tampered = payload.clone();
                let idx = idx % tampered.len();
                tampered[idx] ^= 0x01;
                prop_assert!(!verify(&tampered, &sig, Some(secret), SignatureScheme::RawHex));
            }
        }
    }
}
