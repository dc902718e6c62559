//! Line formatter.
//!
//! Templates use `{field}` placeholders; `{{` and `}}` are literal braces.
//! Known fields: `asctime`, `process`, `levelname`, `name`, `message`.

use core::fmt::Write as _;

use ctxlog_core::{LogError, LogResult};

use crate::record::Record;

/// Template every logger gets unless configured otherwise.
pub const DEFAULT_FORMAT: &str = "{asctime} (PID:{process}) {levelname} {name}: {message}";

/// `asctime` layout: local time with milliseconds after a comma.
const ASCTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Field {
    AscTime,
    Process,
    LevelName,
    Name,
    Message,
}

impl Field {
    fn parse(name: &str) -> LogResult<Self> {
        match name {
            "asctime" => Ok(Field::AscTime),
            "process" => Ok(Field::Process),
            "levelname" => Ok(Field::LevelName),
            "name" => Ok(Field::Name),
            "message" => Ok(Field::Message),
            other => Err(LogError::invalid_format(format!("unknown field {{{other}}}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Field(Field),
}

/// Compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    template: String,
    pieces: Vec<Piece>,
}

impl Formatter {
    pub fn new(template: &str) -> LogResult<Self> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => name.push(ch),
                            None => {
                                return Err(LogError::invalid_format(format!(
                                    "unterminated placeholder {{{name}"
                                )));
                            }
                        }
                    }
                    let field = Field::parse(&name)?;
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(core::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Field(field));
                }
                '}' => {
                    return Err(LogError::invalid_format("unmatched '}' in template"));
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self {
            template: template.to_string(),
            pieces,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render one record as a single line (no trailing newline).
    pub fn format(&self, record: &Record) -> String {
        let mut line = String::with_capacity(self.template.len() + record.message.len() + 48);
        for piece in &self.pieces {
            // Writing into a String cannot fail.
            let _ = match piece {
                Piece::Literal(text) => line.write_str(text),
                Piece::Field(Field::AscTime) => {
                    write!(line, "{}", record.created.format(ASCTIME_FORMAT))
                }
                Piece::Field(Field::Process) => write!(line, "{}", record.process),
                Piece::Field(Field::LevelName) => line.write_str(record.level.as_str()),
                Piece::Field(Field::Name) => line.write_str(record.name.as_str()),
                Piece::Field(Field::Message) => line.write_str(&record.message),
            };
        }
        line
    }
}

impl Default for Formatter {
    /// [`DEFAULT_FORMAT`], pre-compiled.
    fn default() -> Self {
        let text = |s: &str| Piece::Literal(s.to_string());
        Self {
            template: DEFAULT_FORMAT.to_string(),
            pieces: vec![
                Piece::Field(Field::AscTime),
                text(" (PID:"),
                Piece::Field(Field::Process),
                text(") "),
                Piece::Field(Field::LevelName),
                text(" "),
                Piece::Field(Field::Name),
                text(": "),
                Piece::Field(Field::Message),
            ],
        }
    }
}
