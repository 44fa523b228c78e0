//! CSV format expected by the platform for table data.

use std::io;

/// A named CSV dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDialect {
    pub name: &'static str,
    pub delimiter: u8,
    pub quote: u8,
    pub line_terminator: u8,
}

/// The `kbc` dialect: comma separated, double-quote quoted, `\n` terminated.
pub const KBC_CSV_DIALECT: CsvDialect =
    CsvDialect { name: "kbc", delimiter: b',', quote: b'"', line_terminator: b'\n' };

impl CsvDialect {
    pub fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .terminator(csv::Terminator::Any(self.line_terminator));
        builder
    }

    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.delimiter(self.delimiter).quote(self.quote);
        builder
    }

    /// CSV writer configured with this dialect.
    pub fn writer<W: io::Write>(&self, inner: W) -> csv::Writer<W> {
        self.writer_builder().from_writer(inner)
    }

    /// CSV reader configured with this dialect. The first row is a header.
    pub fn reader<R: io::Read>(&self, inner: R) -> csv::Reader<R> {
        self.reader_builder().from_reader(inner)
    }
}
