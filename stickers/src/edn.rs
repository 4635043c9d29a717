//! Decoding of sticker pack metadata, published on IPFS as [EDN].
//!
//! Pack metadata looks like:
//!
//! ```text
//! {:meta {:name "Tozemoon"
//!         :author "cryptoworld1373"
//!         :thumbnail "e30101701220..."
//!         :preview "e30101701220..."
//!         :stickers [{:hash "e30101701220..."} ...]}}
//! ```
//!
//! [EDN]: https://github.com/edn-format/edn
use edn_format::Value;

/// Deepest collection nesting accepted in a metadata document.
pub const MAX_DEPTH: usize = 512;

/// An error raised while decoding pack metadata.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is rejected before parsing.
    #[error("{message} at line {line}, column {column}")]
    Syntax {
        /// What went wrong.
        message: String,
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
    },
    /// The input is not valid EDN.
    #[error("invalid EDN: {0}")]
    Invalid(String),
    /// The input is valid EDN but not of the expected shape.
    #[error("unexpected shape: {0}")]
    Shape(String),
}

/// Reads exactly one EDN value from `source`.
///
/// Documents nested deeper than [`MAX_DEPTH`] are rejected up front.
pub fn parse(source: &str) -> Result<Value, ParseError> {
    check_depth(source)?;
    edn_format::parse_str(source).map_err(|err| ParseError::Invalid(format!("{err:?}")))
}

/// Scans `source` for collection nesting beyond [`MAX_DEPTH`].
///
/// Delimiters inside strings, comments and character literals do not count.
fn check_depth(source: &str) -> Result<(), ParseError> {
    let mut depth = 0usize;
    let (mut line, mut column) = (1, 0);
    let mut in_string = false;
    let mut in_comment = false;
    let mut chars = source.chars();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }

        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        if in_string {
            match c {
                '\\' => {
                    chars.next();
                    column += 1;
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            ';' => in_comment = true,
            '\\' => {
                chars.next();
                column += 1;
            }
            '(' | '[' | '{' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(ParseError::Syntax {
                        message: format!("nesting deeper than {MAX_DEPTH}"),
                        line,
                        column,
                    });
                }
            }
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Metadata of a sticker pack, as published on IPFS.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackMetadata {
    /// Display name.
    pub name: String,
    /// Author name.
    pub author: String,
    /// Contenthash of the thumbnail, hex without `0x`.
    pub thumbnail: String,
    /// Contenthash of the preview image, hex without `0x`.
    pub preview: String,
    /// Contenthashes of the stickers, hex without `0x`.
    pub stickers: Vec<String>,
}

impl PackMetadata {
    /// Reads pack metadata from EDN source.
    ///
    /// Missing fields are left empty.
    pub fn from_edn(source: &str) -> Result<Self, ParseError> {
        let root = parse(source)?;
        if !matches!(root, Value::Map(_)) {
            return Err(ParseError::Shape("pack metadata is not a map".to_owned()));
        }
        let meta = match get(&root, "meta") {
            None | Some(Value::Nil) => return Ok(Self::default()),
            Some(meta) => meta,
        };

        let stickers = match get(meta, "stickers") {
            None | Some(Value::Nil) => Vec::new(),
            Some(stickers) => elements(stickers)
                .ok_or_else(|| ParseError::Shape(":stickers is not a sequence".to_owned()))?
                .into_iter()
                .map(|sticker| string_field(sticker, "hash"))
                .collect::<Result<_, _>>()?,
        };

        Ok(Self {
            name: string_field(meta, "name")?,
            author: string_field(meta, "author")?,
            thumbnail: string_field(meta, "thumbnail")?,
            preview: string_field(meta, "preview")?,
            stickers,
        })
    }
}

/// Value stored under the plain keyword `:key`, if `value` is a map.
fn get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let Value::Map(entries) = value else {
        return None;
    };
    entries.iter().find_map(|(k, v)| match k {
        Value::Keyword(k) if k.namespace().is_none() && k.name() == key => Some(v),
        _ => None,
    })
}

/// Elements of a vector, list or set.
fn elements(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Vector(items) => Some(items.iter().collect()),
        Value::List(items) => Some(items.iter().collect()),
        Value::Set(items) => Some(items.iter().collect()),
        _ => None,
    }
}

fn string_field(map: &Value, key: &str) -> Result<String, ParseError> {
    if !matches!(map, Value::Map(_)) {
        return Err(ParseError::Shape(format!("expected a map holding :{key}")));
    }
    match get(map, key) {
        None | Some(Value::Nil) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ParseError::Shape(format!(":{key} is not a string: {other:?}"))),
    }
}
