use std::fmt;

/// Line terminator convention of a text file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the convention from the first terminated line, `Lf` when there is none
    pub fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(idx) if content[..idx].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "LF"),
            LineEnding::CrLf => write!(f, "CRLF"),
        }
    }
}

/// Split text into lines, keeping each line's terminator.
///
/// Concatenating the result reproduces `content` exactly.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(String::from).collect()
}

/// Turn a payload into the lines it will occupy in a file using `ending`.
///
/// Embedded line breaks are rewritten to `ending`, and a terminator is appended
/// when missing so the following line is not glued onto the payload's last line.
pub fn payload_lines(payload: &str, ending: LineEnding) -> Vec<String> {
    if payload.is_empty() {
        return Vec::new();
    }

    let mut text = payload.replace("\r\n", "\n");
    if ending == LineEnding::CrLf {
        text = text.replace('\n', "\r\n");
    }
    if !text.ends_with('\n') {
        text.push_str(ending.as_str());
    }

    split_lines(&text)
}
