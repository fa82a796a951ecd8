//! Delivery of the rendered document to its sink.
//!
//! The whole document is rendered into memory before anything is written,
//! so a fault never leaves a partial artefact behind.

use std::io::Write;

use codegen_support::write_atomically;
use tracing::info;

use crate::config::BoxBuilderConfig;
use crate::document::render;
use crate::error::BoxBuilderError;

/// Renders the document for `config` and writes it to `sink` in one call.
///
/// # Errors
///
/// Returns [`BoxBuilderError::Write`] when the sink rejects the text.
pub fn emit<W: Write>(config: &BoxBuilderConfig, sink: &mut W) -> Result<(), BoxBuilderError> {
    let text = render(config);
    sink.write_all(text.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(BoxBuilderError::Write)
}

/// Writes the document to the configured output file, or to stdout when no
/// file is configured.
///
/// # Errors
///
/// Returns an error when the output file or stdout cannot be written.
pub fn run(config: &BoxBuilderConfig) -> Result<(), BoxBuilderError> {
    match &config.output {
        Some(path) => {
            write_atomically(path, &render(config))?;
            info!(
                path = %path,
                overloads = config.arity_bound.overload_count(),
                "wrote builder overloads"
            );
            Ok(())
        }
        None => emit(config, &mut std::io::stdout().lock()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::emit;
    use crate::config::BoxBuilderConfig;
    use crate::document::render;
    use crate::error::BoxBuilderError;

    /// Sink that records how many write calls it received.
    #[derive(Default)]
    struct CountingSink {
        bytes: Vec<u8>,
        writes: usize,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn emits_whole_document_in_one_write() -> Result<(), BoxBuilderError> {
        let config = BoxBuilderConfig::default();
        let mut sink = CountingSink::default();
        emit(&config, &mut sink)?;
        assert_eq!(sink.writes, 1);
        assert_eq!(String::from_utf8_lossy(&sink.bytes), render(&config));
        Ok(())
    }

    #[test]
    fn sink_failures_surface_as_write_errors() {
        let result = emit(&BoxBuilderConfig::default(), &mut BrokenSink);
        assert!(
            matches!(result, Err(BoxBuilderError::Write(ref err)) if err.kind() == io::ErrorKind::BrokenPipe),
            "unexpected result: {result:?}"
        );
    }
}
