//! CSV loading with encoding auto-detection.
//!
//! Converts CSV rows into JSON objects keyed by the header row. Quoting and
//! record lexing are delegated to the `csv` crate (in flexible mode); header
//! bookkeeping, cell trimming and column-width checks happen here.

use serde_json::{json, Map, Value};

use crate::error::{CsvError, CsvResult};

/// Result of loading with metadata.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Loaded records as JSON objects, in row order.
    pub records: Vec<Value>,
    /// Detected or used encoding.
    pub encoding: String,
    /// Delimiter used.
    pub delimiter: char,
    /// Column headers.
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.to_string(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Trim leading and trailing spaces and tabs.
///
/// Deliberately narrower than `str::trim`: only `' '` and `'\t'`, so other
/// whitespace inside values survives untouched.
fn trim_cell(cell: &str) -> &str {
    cell.trim_matches(|c| c == ' ' || c == '\t')
}

/// Load CSV bytes with encoding auto-detection.
pub fn load_bytes(bytes: &[u8], delimiter: char) -> CsvResult<LoadResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    load_str(&content, delimiter, encoding)
}

/// Load CSV text with an explicit delimiter.
///
/// The first row is consumed as the header and never emitted as a record.
/// Each later row becomes a JSON object keyed by the header cell at the same
/// column index. A row with more cells than the header is a fatal error; a
/// row with fewer cells simply leaves the trailing fields absent.
pub fn load_str(content: &str, delimiter: char, encoding: String) -> CsvResult<LoadResult> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut headers: Vec<String> = Vec::new();
    let mut records = Vec::new();
    // 1-based row counter, header included, as reported in errors.
    let mut row = 0;

    for result in reader.records() {
        let line = result?;
        row += 1;

        if row == 1 {
            headers = line.iter().map(|cell| trim_cell(cell).to_string()).collect();
            continue;
        }

        let mut obj = Map::new();
        for (column, cell) in line.iter().enumerate() {
            if column >= headers.len() {
                return Err(CsvError::UnexpectedColumn { row, column });
            }
            obj.insert(headers[column].clone(), json!(trim_cell(cell)));
        }
        records.push(Value::Object(obj));
    }

    Ok(LoadResult {
        records,
        encoding,
        delimiter,
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> LoadResult {
        load_str(csv, ',', "utf-8".to_string()).unwrap()
    }

    #[test]
    fn test_simple_csv() {
        let result = load("id,title\n1,Hello\n2,World");

        assert_eq!(result.headers, vec!["id", "title"]);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0]["id"], "1");
        assert_eq!(result.records[0]["title"], "Hello");
        assert_eq!(result.records[1]["title"], "World");
    }

    #[test]
    fn test_header_not_emitted_as_record() {
        let result = load("id,title\n1,Hello");
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_cells_trimmed_of_spaces_and_tabs() {
        let result = load("id , \ttitle\t\n 1\t,  Hello world ");

        assert_eq!(result.headers, vec!["id", "title"]);
        assert_eq!(result.records[0]["id"], "1");
        assert_eq!(result.records[0]["title"], "Hello world");
    }

    #[test]
    fn test_inner_whitespace_survives() {
        let result = load("id,text\n1, a \t b ");
        assert_eq!(result.records[0]["text"], "a \t b");
    }

    #[test]
    fn test_quoted_values() {
        let result = load("id,title\n1,\"Hello, World\"");
        assert_eq!(result.records[0]["title"], "Hello, World");
    }

    #[test]
    fn test_row_wider_than_header_is_fatal() {
        let err = load_str("a,b\n1,2\n1,2,3", ',', "utf-8".into()).unwrap_err();
        match err {
            CsvError::UnexpectedColumn { row, column } => {
                assert_eq!(row, 3);
                assert_eq!(column, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_narrower_than_header_leaves_fields_absent() {
        let result = load("a,b,c\n1,2");

        let record = result.records[0].as_object().unwrap();
        assert_eq!(record["a"], "1");
        assert_eq!(record["b"], "2");
        assert!(!record.contains_key("c"));
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let result = load("");
        assert!(result.records.is_empty());
        assert!(result.headers.is_empty());
    }

    #[test]
    fn test_unterminated_quote_consumes_rest_of_input() {
        // The csv lexer is RFC 4180-lenient: an unterminated quote swallows
        // the remaining input into one cell instead of erroring.
        let result = load("a,b\n\"oops,2\n3,4");
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0]["a"], "oops,2\n3,4");
    }

    #[test]
    fn test_semicolon_delimiter() {
        let result = load_str("a;b\n1;2", ';', "utf-8".into()).unwrap();
        assert_eq!(result.records[0]["a"], "1");
        assert_eq!(result.records[0]["b"], "2");
    }

    #[test]
    fn test_detect_encoding_utf8() {
        assert_eq!(detect_encoding("id,title\n1,Hello".as_bytes()), "utf-8");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_load_bytes_full() {
        let result = load_bytes("id,title\n1,Hello".as_bytes(), ',').unwrap();
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.records.len(), 1);
    }
}
