use std::io::{BufRead, BufReader};

use brotli::Decompressor;

const DECODE_BUF_SIZE: usize = 4096;

/// Wrap a raw response body in a streaming brotli decoder exposed as lines
/// of text via `BufRead`.
///
/// An empty body is valid and yields zero lines. A body that is not valid
/// brotli data surfaces as an `io::Error` when the caller reads from it.
pub(crate) fn decoder(body: &[u8]) -> Box<dyn BufRead + '_> {
    if body.is_empty() {
        Box::new(std::io::empty())
    } else {
        Box::new(BufReader::new(Decompressor::new(body, DECODE_BUF_SIZE)))
    }
}

#[cfg(test)]
pub(crate) fn compress(data: &[u8]) -> Vec<u8> {
    use std::io::Write;

    let mut out = Vec::new();
    {
        let mut writer = brotli::CompressorWriter::new(&mut out, DECODE_BUF_SIZE, 5, 22);
        writer.write_all(data).unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_compressed_lines() {
        let body = compress(b"0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n011053FD0102E94D6AE2F8B83D76FAF94F6:1\r\n");
        let lines: Vec<String> = decoder(&body).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "0018A45C4D1DEF81644B54AB7F969B88D65:3\r");
    }

    #[test]
    fn empty_body_yields_no_lines() {
        assert_eq!(decoder(&[]).lines().count(), 0);
    }

    #[test]
    fn garbage_fails_to_decode() {
        use std::io::Read;

        let mut reader = decoder(b"this is not a brotli stream");
        let mut buf = String::new();
        assert!(reader.read_to_string(&mut buf).is_err());
    }
}
