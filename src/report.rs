//! Text rendering of inspection results

use std::fmt::Debug;
use std::str::FromStr;

use serde::Serialize;

/// How each section body is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single-line `Debug` representation
    #[default]
    Debug,
    /// Multi-line `{:#?}` representation
    Pretty,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "unknown format '{}', expected one of: debug, pretty, json",
                s
            )),
        }
    }
}

/// A sequence of titled sections separated by blank lines
///
/// ```text
/// Input Details:
/// <body>
///
/// Output Details:
/// <body>
/// ```
pub struct Report {
    format: OutputFormat,
    out: String,
}

impl Report {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            out: String::new(),
        }
    }

    /// Append a section titled `title` whose body is `value`
    pub fn section<T>(&mut self, title: &str, value: &T) -> Result<&mut Self, serde_json::Error>
    where
        T: Debug + Serialize + ?Sized,
    {
        let body = match self.format {
            OutputFormat::Debug => format!("{:?}", value),
            OutputFormat::Pretty => format!("{:#?}", value),
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
        };

        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(title);
        self.out.push_str(":\n");
        self.out.push_str(&body);
        self.out.push('\n');
        Ok(self)
    }

    pub fn finish(self) -> String {
        self.out
    }
}
