//! Text encodings used at API boundaries.
//!
//! Keys travel as unpadded RFC 4648 base-32 (uppercase), ciphertexts as
//! base-64. Callers pick raw or base-64 payload framing through the
//! [`Encoding`] enum rather than boolean flags, so every decode step is
//! explicit and validated at the edge.

use data_encoding::{BASE32_NOPAD, BASE64};

use crate::error::CryptoError;

/// Payload framing for ciphertext inputs and outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Raw bytes, no text encoding.
    Raw,
    /// Standard base-64 text, carried as ASCII bytes.
    Base64,
}

/// Encode key bytes as unpadded base-32 text.
pub fn encode_key(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}

/// Decode unpadded base-32 key text to bytes.
pub fn decode_key(encoded: &str) -> Result<Vec<u8>, CryptoError> {
    BASE32_NOPAD
        .decode(encoded.as_bytes())
        .map_err(|e| CryptoError::Decoding(format!("base32: {}", e)))
}

/// Apply the chosen output framing to a finished payload.
pub(crate) fn encode_payload(payload: Vec<u8>, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Raw => payload,
        Encoding::Base64 => BASE64.encode(&payload).into_bytes(),
    }
}

/// Undo the framing of an incoming payload.
pub(crate) fn decode_payload(payload: &[u8], encoding: Encoding) -> Result<Vec<u8>, CryptoError> {
    match encoding {
        Encoding::Raw => Ok(payload.to_vec()),
        Encoding::Base64 => BASE64
            .decode(payload)
            .map_err(|e| CryptoError::Decoding(format!("base64: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_encoding_roundtrip() {
        let bytes = [7u8; 32];
        let encoded = encode_key(&bytes);

        // Unpadded: no '=' anywhere
        assert!(!encoded.contains('='));
        assert_eq!(decode_key(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_decode_key_rejects_garbage() {
        let result = decode_key("not!valid!base32!");
        assert!(matches!(result, Err(CryptoError::Decoding(_))));
    }

    #[test]
    fn test_payload_raw_is_identity() {
        let payload = vec![1, 2, 3];
        let encoded = encode_payload(payload.clone(), Encoding::Raw);
        assert_eq!(encoded, payload);
        assert_eq!(decode_payload(&encoded, Encoding::Raw).unwrap(), payload);
    }

    #[test]
    fn test_payload_base64_roundtrip() {
        let payload = vec![0u8, 255, 128, 64];
        let encoded = encode_payload(payload.clone(), Encoding::Base64);

        // Output is ASCII text
        assert!(encoded.iter().all(u8::is_ascii));
        assert_eq!(decode_payload(&encoded, Encoding::Base64).unwrap(), payload);
    }

    #[test]
    fn test_payload_base64_rejects_garbage() {
        let result = decode_payload(b"@@not base64@@", Encoding::Base64);
        assert!(matches!(result, Err(CryptoError::Decoding(_))));
    }
}
