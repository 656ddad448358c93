use std::fmt;

#[derive(Debug)]
pub enum SvgError {
    /// Raster targets need a non-zero width and height.
    InvalidSize { width: u32, height: u32 },
    /// usvg rejected the markup.
    Parse(String),
    /// PNG encoding failed.
    Encode(String),
    Io(std::io::Error),
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgError::InvalidSize { width, height } => {
                write!(f, "invalid raster size {width}x{height}: both sides must be > 0")
            }
            SvgError::Parse(msg) => write!(f, "svg parse error: {msg}"),
            SvgError::Encode(msg) => write!(f, "png encode error: {msg}"),
            SvgError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for SvgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SvgError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SvgError {
    fn from(err: std::io::Error) -> Self {
        SvgError::Io(err)
    }
}
