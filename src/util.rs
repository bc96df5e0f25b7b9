//! Misc utility stuff

use flate2::read::MultiGzDecoder;
use fs_err as fs;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Read, Write};
use std::ops::{Deref, DerefMut};

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err(Error::Error($e.to_string()))};
    ($e:expr) => {Err(Error::Error($e))};
    ($($e:expr),+) => {Err(Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom agram error
    Error(String),
    /// pass through io::Error
    IoError(std::io::Error),
    /// be an error, but don't report anything
    Silent,
}
/// Result type for agram
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Self::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
    /// return true if this error should be treated as an error, but silently
    pub const fn silent(&self) -> bool {
        matches!(self, Self::Silent)
    }
    /// process exit status for this error.
    /// Failures reading input are 1, bad command lines are 2.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::IoError(_) => 1,
            _ => 2,
        }
    }
}

err_type!(std::io::Error, Error::IoError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(s) => write!(f, "{}", s)?,
            Self::IoError(s) => write!(f, "IoError : {}", s)?,
            Self::Silent => write!(f, "Silent")?,
        }
        Ok(())
    }
}

/// Input file. Wrapped in a type so I can 'impl Debug'
pub struct Infile(
    /// The file being read
    pub io::BufReader<Box<dyn Read>>,
);

impl Infile {
    /// create a new input file
    pub fn new(f: io::BufReader<Box<dyn Read>>) -> Self {
        Self(f)
    }
}

impl Default for Infile {
    fn default() -> Self {
        Self::new(io::BufReader::new(Box::new(io::empty())))
    }
}

impl fmt::Debug for Infile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Infile")
    }
}

impl Deref for Infile {
    type Target = io::BufReader<Box<dyn Read>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Infile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name
pub fn get_writer(name: &str) -> Result<Outfile> {
    let inner: Box<dyn Write> = {
        if name == "-" {
            Box::new(io::stdout())
        } else if name == "--" {
            Box::new(io::stderr())
        } else {
            Box::new(fs::OpenOptions::new().write(true).create(true).open(name)?)
        }
    };
    Ok(io::BufWriter::new(inner))
}

// should return Cow<>
fn unescape_vec(data: &[u8]) -> Vec<u8> {
    let mut ret: Vec<u8> = Vec::with_capacity(data.len());
    let mut last_was_slash = false;
    for x in data {
        if last_was_slash {
            ret.push(match x {
                b'n' => b'\n',
                b't' => b'\t',
                b's' => b' ',
                ch => *ch,
            });
            last_was_slash = false;
        } else if x == &b'\\' {
            last_was_slash = true;
        } else {
            ret.push(*x);
        }
    }
    if last_was_slash {
        ret.push(b'\\');
    }
    ret
}

/// Make an Infile from a file name
pub fn get_reader(name: &str) -> Result<Infile> {
    let inner: Box<dyn Read> = {
        if name == "-" {
            Box::new(io::stdin())
        } else if let Some(stripped) = name.strip_prefix("<<") {
            Box::new(io::Cursor::new(unescape_vec(stripped.as_bytes())))
        } else {
            Box::new(fs::File::open(name)?)
        }
    };
    let mut outer = io::BufReader::new(inner);
    let start = outer.fill_buf()?;
    if start.starts_with(&[0x1fu8, 0x8bu8, 0x08u8]) {
        outer = io::BufReader::new(Box::new(MultiGzDecoder::new(outer)));
    }
    Ok(Infile::new(outer))
}

/// File reader for newline delimited words, one word available at a time.
/// The first word is read at open, `getline` advances.
/// Words are UTF-8; a line that is not valid UTF-8 is a read failure.
#[derive(Debug, Default)]
pub struct WordReader {
    file: Infile,
    line: String,
    is_done: bool,
    is_empty: bool,
    line_count: usize,
}

impl WordReader {
    /// make a new WordReader, opened and with the first line read
    pub fn new_open(name: &str) -> Result<Self> {
        let mut tmp = Self {
            file: get_reader(name)?,
            line: String::new(),
            is_done: false,
            is_empty: false,
            line_count: 0,
        };
        if tmp.read()? {
            tmp.is_done = true;
            tmp.is_empty = true;
        }
        Ok(tmp)
    }
    /// was file zero bytes?
    pub const fn is_empty(&self) -> bool {
        self.is_empty
    }
    /// have we hit EOF?
    pub const fn is_done(&self) -> bool {
        self.is_done
    }
    /// line number of `curr_word`
    pub const fn line_number(&self) -> usize {
        self.line_count
    }
    /// get current word, without the trailing line terminator
    pub fn curr_word(&self) -> &str {
        let mut ret = self.line.as_str();
        if let Some(s) = ret.strip_suffix('\n') {
            ret = s;
        }
        if let Some(s) = ret.strip_suffix('\r') {
            ret = s;
        }
        ret
    }
    /// get next word. Return true at EOF, after which `curr_word` is stale.
    pub fn getline(&mut self) -> Result<bool> {
        if self.read()? {
            self.is_done = true;
        }
        Ok(self.is_done)
    }
    fn read(&mut self) -> Result<bool> {
        self.line.clear();
        let sz = self.file.read_line(&mut self.line)?;
        if sz == 0 {
            Ok(true)
        } else {
            self.line_count += 1;
            Ok(false)
        }
    }
}
