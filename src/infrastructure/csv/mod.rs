// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV decoding and parsing into sample tables

mod csv_parser;

pub use csv_parser::CsvParser;
