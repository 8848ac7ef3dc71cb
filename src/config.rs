use std::ffi::OsString;
use std::fmt;
use std::num::{NonZeroUsize, ParseIntError};

/// largest accepted frame, 16M samples (32 MiB of output per frame)
pub const MAX_FRAME_SIZE: usize = 1 << 24;

/// number of samples per frame, in 1..=MAX_FRAME_SIZE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize(NonZeroUsize);

impl FrameSize {
    pub fn new(samples: usize) -> Result<Self, ConfigError> {
        if samples > MAX_FRAME_SIZE {
            return Err(ConfigError::FrameSizeTooLarge(samples));
        }
        NonZeroUsize::new(samples)
            .map(FrameSize)
            .ok_or(ConfigError::ZeroFrameSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl std::str::FromStr for FrameSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(ConfigError::NegativeFrameSize(s.to_string()));
        }
        let samples = s.parse::<usize>().map_err(|source| ConfigError::InvalidFrameSize {
            value: s.to_string(),
            source,
        })?;
        FrameSize::new(samples)
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingFrameSize,
    UnexpectedArgument(String),
    InvalidFrameSize { value: String, source: ParseIntError },
    NegativeFrameSize(String),
    ZeroFrameSize,
    FrameSizeTooLarge(usize),
    NotUnicode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingFrameSize => write!(f, "missing frame size argument"),
            ConfigError::UnexpectedArgument(arg) => write!(f, "unexpected argument `{arg}`"),
            ConfigError::InvalidFrameSize { value, .. } => {
                write!(f, "frame size `{value}` is not a number")
            }
            ConfigError::NegativeFrameSize(value) => {
                write!(f, "frame size `{value}` is negative")
            }
            ConfigError::ZeroFrameSize => write!(f, "frame size must be at least 1"),
            ConfigError::FrameSizeTooLarge(samples) => {
                write!(f, "frame size {samples} is larger than {MAX_FRAME_SIZE}")
            }
            ConfigError::NotUnicode(arg) => write!(f, "argument `{arg}` is not valid unicode"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidFrameSize { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// startup configuration, taken from argv only
///
/// usage: gamma_conv <frame_size>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub frame_size: FrameSize,
}

impl Config {
    /// `args` must not include the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        let frame_size = match args.next() {
            Some(arg) => arg.as_ref().parse::<FrameSize>()?,
            None => return Err(ConfigError::MissingFrameSize),
        };

        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra.as_ref().to_string()));
        }

        Ok(Config { frame_size })
    }

    /// same as `from_args`, for raw argv entries (`std::env::args_os`)
    pub fn from_args_os<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| ConfigError::NotUnicode(arg.to_string_lossy().into_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Config::from_args(args)
    }
}
