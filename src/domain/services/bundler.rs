//! Concatenation of source files into a bundle buffer

use crate::domain::entities::SourceFile;

/// Join file contents in order.
///
/// Contents are copied byte for byte; `separator` is placed only between
/// files, never after the last one.
pub fn concatenate(sources: &[SourceFile], separator: &[u8]) -> Vec<u8> {
    let total = sources.iter().map(SourceFile::len).sum::<usize>()
        + separator.len() * sources.len().saturating_sub(1);
    let mut body = Vec::with_capacity(total);

    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            body.extend_from_slice(separator);
        }
        body.extend_from_slice(source.content());
    }

    body
}

/// Prepend the rendered header to the body
pub fn assemble(header: &str, body: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(header.len() + body.len());
    buffer.extend_from_slice(header.as_bytes());
    buffer.extend_from_slice(body);
    buffer
}
