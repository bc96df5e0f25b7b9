//! The prelude

#[doc(inline)]
pub use crate::anagram::{AnagramMap, Anagrams, SortMethod};
#[doc(inline)]
pub use crate::util::{err, get_reader, get_writer, Error, Infile, Outfile, Result, WordReader};

#[doc(inline)]
pub use std::cmp::Ordering;
#[doc(inline)]
pub use std::fmt;
#[doc(inline)]
pub use std::io::{BufRead, Read, Write};
#[doc(inline)]
pub use std::str::FromStr;
