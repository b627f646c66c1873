//! Byte-level decoding of file content.
//!
//! Valid UTF-8 is taken as is. Anything else is read as Latin-1, one char per
//! byte, so every byte sequence decodes and encodes back to the same bytes.
//! A Latin-1 document can only be saved while every char stays below U+0100.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

pub fn decode(bytes: Vec<u8>) -> (String, TextEncoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, TextEncoding::Utf8),
        Err(err) => {
            let text = err.into_bytes().into_iter().map(char::from).collect();
            (text, TextEncoding::Latin1)
        }
    }
}

/// Encode `text`; `Err` carries the first char the encoding cannot hold.
pub fn encode(text: &str, encoding: TextEncoding) -> Result<Vec<u8>, char> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Latin1 => text
            .chars()
            .map(|c| u8::try_from(c).map_err(|_| c))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        let (text, enc) = decode("héllo".as_bytes().to_vec());
        assert_eq!(text, "héllo");
        assert_eq!(enc, TextEncoding::Utf8);
    }

    #[test]
    fn invalid_utf8_reads_as_latin1() {
        let (text, enc) = decode(b"caf\xe9".to_vec());
        assert_eq!(text, "café");
        assert_eq!(enc, TextEncoding::Latin1);
        assert_eq!(encode(&text, enc).unwrap(), b"caf\xe9");
    }

    #[test]
    fn latin1_rejects_wide_chars() {
        assert_eq!(encode("a€", TextEncoding::Latin1), Err('€'));
        assert!(encode("a€", TextEncoding::Utf8).is_ok());
    }
}
