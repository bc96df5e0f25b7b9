//! Group words that are anagrams of each other.
//!
//! Words come in one per line. Each word is keyed by its signature, the
//! characters of the word sorted by code point, so two words are anagrams
//! exactly when their signatures are equal. Groups with fewer than two
//! words are suppressed from output.
//!
//! ```
//! use agram::prelude::*;
//! let mut f = WordReader::new_open("<<listen\\nsilent\\nenlist\\nhello")?;
//! let map = agram::anagram::group(&mut f)?;
//! let groups = agram::anagram::rank(map, SortMethod::Count);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].to_string(), "listen silent enlist");
//! # Ok::<(), agram::util::Error>(())
//! ```

use crate::prelude::*;
use fnv::FnvHashMap;

/// Canonical form of a word : its characters sorted ascending by code point.
pub fn signature(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// One signature and the words sharing it, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Anagrams {
    signature: String,
    words: Vec<String>,
}

impl Anagrams {
    fn new(signature: String) -> Self {
        Self { signature, words: Vec::new() }
    }
    /// the shared signature
    pub fn signature(&self) -> &str {
        &self.signature
    }
    /// the words, in order of first appearance
    pub fn words(&self) -> &[String] {
        &self.words
    }
    /// how many words share this signature
    pub fn count(&self) -> usize {
        self.words.len()
    }
    /// the earliest seen word, if any
    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
    fn push(&mut self, word: String) {
        self.words.push(word);
    }
}

impl fmt::Display for Anagrams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

/// Map from signature to [Anagrams], preserving first-seen group order.
/// Built in one pass over the input, read-only afterward.
#[derive(Debug, Default)]
pub struct AnagramMap {
    groups: Vec<Anagrams>,
    index: FnvHashMap<String, usize>,
}

impl AnagramMap {
    /// make a new empty AnagramMap
    pub fn new() -> Self {
        Self::default()
    }
    /// file the word under its signature, creating the group if needed
    pub fn add(&mut self, word: String) {
        let sig = signature(&word);
        match self.index.get(&sig) {
            Some(&slot) => self.groups[slot].push(word),
            None => {
                self.index.insert(sig.clone(), self.groups.len());
                let mut group = Anagrams::new(sig);
                group.push(word);
                self.groups.push(group);
            }
        }
    }
    /// number of distinct signatures
    pub fn len(&self) -> usize {
        self.groups.len()
    }
    /// any groups at all?
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
    /// the group for this signature, if present
    pub fn get(&self, sig: &str) -> Option<&Anagrams> {
        self.index.get(sig).map(|&slot| &self.groups[slot])
    }
    /// iterate groups in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, Anagrams> {
        self.groups.iter()
    }
}

impl IntoIterator for AnagramMap {
    type Item = Anagrams;
    type IntoIter = std::vec::IntoIter<Anagrams>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnagramMap {
    type Item = &'a Anagrams;
    type IntoIter = std::slice::Iter<'a, Anagrams>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// How to order the anagram groups for output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMethod {
    /// descending by group size, ties lexicographic
    Count,
    /// ascending by each group's earliest word
    Lexicographic,
    /// ascending by signature
    WordSignature,
}

impl Default for SortMethod {
    fn default() -> Self {
        Self::Count
    }
}

impl SortMethod {
    /// new from string
    pub fn new(x: &str) -> Result<Self> {
        match x {
            "count" => Ok(Self::Count),
            "lex" => Ok(Self::Lexicographic),
            "wordsig" => Ok(Self::WordSignature),
            _ => err!("Sort method must be count, lex or wordsig : '{}'", x),
        }
    }
    /// compare two groups under this method
    pub fn comp(self, left: &Anagrams, right: &Anagrams) -> Ordering {
        match self {
            Self::Count => comp_count(left, right),
            Self::Lexicographic => comp_lex(left, right),
            Self::WordSignature => comp_signature(left, right),
        }
    }
}

/// descending by count, ties broken lexicographically
fn comp_count(left: &Anagrams, right: &Anagrams) -> Ordering {
    match right.count().cmp(&left.count()) {
        Ordering::Equal => comp_lex(left, right),
        ord => ord,
    }
}

/// ascending by earliest word. A group with no words compares equal.
fn comp_lex(left: &Anagrams, right: &Anagrams) -> Ordering {
    match (left.first(), right.first()) {
        (Some(a), Some(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// ascending by signature
fn comp_signature(left: &Anagrams, right: &Anagrams) -> Ordering {
    left.signature.cmp(&right.signature)
}

/// Consume the whole input stream, filing every word under its signature.
/// Empty lines are ordinary words with the empty signature.
pub fn group(f: &mut WordReader) -> Result<AnagramMap> {
    let mut map = AnagramMap::new();
    if f.is_done() {
        return Ok(map);
    }
    loop {
        map.add(f.curr_word().to_string());
        if f.getline()? {
            break;
        }
    }
    Ok(map)
}

/// Drop groups with fewer than two words, then order the rest.
/// The sort is stable, so residual ties keep first-seen order.
pub fn rank(map: AnagramMap, method: SortMethod) -> Vec<Anagrams> {
    let mut groups: Vec<Anagrams> = map.into_iter().filter(|g| g.count() >= 2).collect();
    groups.sort_by(|a, b| method.comp(a, b));
    groups
}

/// Whole pipeline : open the named file, group, rank, write one line
/// per qualifying group with its words joined by single spaces.
pub fn find(name: &str, method: SortMethod, w: &mut impl Write) -> Result<()> {
    let mut f = WordReader::new_open(name)?;
    let map = group(&mut f)?;
    for ag in rank(map, method) {
        writeln!(w, "{}", ag)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_str(input: &str, method: SortMethod) -> String {
        let mut out = Vec::new();
        find(input, method, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    /// Verifies signatures sort by code point, not byte or alphabet order.
    fn signature_is_sorted_code_points() {
        assert_eq!(signature("listen"), "eilnst");
        assert_eq!(signature("silent"), "eilnst");
        assert_eq!(signature(""), "");
        assert_eq!(signature("år"), "rå");
        assert_eq!(signature("rå"), "rå");
    }

    #[test]
    /// Verifies every word lands in exactly one group, in insertion order.
    fn group_partitions_input() -> Result<()> {
        let mut f = WordReader::new_open("<<eat\\ntea\\nbat\\nate\\ntab")?;
        let map = group(&mut f)?;
        assert_eq!(map.len(), 2);

        let aet = map.get("aet").unwrap();
        assert_eq!(aet.words(), ["eat", "tea", "ate"]);
        let abt = map.get("abt").unwrap();
        assert_eq!(abt.words(), ["bat", "tab"]);
        assert!(map.get("xyz").is_none());

        let total: usize = map.iter().map(Anagrams::count).sum();
        assert_eq!(total, 5);
        Ok(())
    }

    #[test]
    /// Verifies map iteration is first-seen group order.
    fn map_iterates_in_first_seen_order() -> Result<()> {
        let mut f = WordReader::new_open("<<zzz\\naaa\\nzzz")?;
        let map = group(&mut f)?;
        let sigs: Vec<&str> = map.iter().map(Anagrams::signature).collect();
        assert_eq!(sigs, ["zzz", "aaa"]);
        Ok(())
    }

    #[test]
    /// Verifies singleton groups never reach the output.
    fn rank_drops_singletons() -> Result<()> {
        let mut f = WordReader::new_open("<<listen\\nsilent\\nenlist\\nhello")?;
        let groups = rank(group(&mut f)?, SortMethod::Count);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].to_string(), "listen silent enlist");
        Ok(())
    }

    #[test]
    /// Verifies count order is descending, with lexicographic tie-break.
    fn count_sorts_big_groups_first() {
        let out = find_str("<<bat\\neat\\ntea\\nate\\ntab", SortMethod::Count);
        assert_eq!(out, "eat tea ate\nbat tab\n");

        // equal counts fall back to earliest-word order
        let out = find_str("<<mor\\nrom\\nat\\nta", SortMethod::Count);
        assert_eq!(out, "at ta\nmor rom\n");
    }

    #[test]
    /// Verifies lex order compares each group's earliest word.
    fn lex_sorts_by_first_word() {
        let out = find_str("<<eat\\ntea\\nate\\nbat\\ntab", SortMethod::Lexicographic);
        assert_eq!(out, "bat tab\neat tea ate\n");
    }

    #[test]
    /// Verifies wordsig order compares signatures.
    fn wordsig_sorts_by_signature() {
        let out = find_str("<<ab\\nba", SortMethod::WordSignature);
        assert_eq!(out, "ab ba\n");

        // signatures here are abr, dor and rå, in that order
        let out = find_str(
            "<<dro\\nbar\\nord\\nrod\\nbra\\nrå\\når",
            SortMethod::WordSignature,
        );
        assert_eq!(out, "bar bra\ndro ord rod\nrå år\n");
    }

    #[test]
    /// Verifies empty lines group together under the empty signature.
    fn empty_lines_group_together() {
        let out = find_str("<<one\\n\\n\\ntwo", SortMethod::Count);
        assert_eq!(out, " \n");
    }

    #[test]
    /// Verifies empty input completes with empty output.
    fn empty_input_empty_output() {
        assert_eq!(find_str("<<", SortMethod::Count), "");
    }

    #[test]
    /// Verifies the pipeline is deterministic run to run.
    fn find_is_idempotent() {
        let input = "<<truet\\nturte\\nkrok\\nrokk\\nlovt\\ntolv";
        for method in [SortMethod::Count, SortMethod::Lexicographic, SortMethod::WordSignature] {
            assert_eq!(find_str(input, method), find_str(input, method));
        }
    }

    #[test]
    /// Verifies a missing input file surfaces as an I/O failure.
    fn find_propagates_open_failure() {
        let mut out = Vec::new();
        let e = find("/no/such/file/anywhere", SortMethod::Count, &mut out).unwrap_err();
        assert_eq!(e.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    /// Verifies all method names parse, and nothing else does.
    fn sort_method_parses_exactly_three_names() {
        assert_eq!(SortMethod::new("count").unwrap(), SortMethod::Count);
        assert_eq!(SortMethod::new("lex").unwrap(), SortMethod::Lexicographic);
        assert_eq!(SortMethod::new("wordsig").unwrap(), SortMethod::WordSignature);
        let e = SortMethod::new("size").unwrap_err();
        assert_eq!(e.exit_code(), 2);
        SortMethod::new("COUNT").unwrap_err();
        SortMethod::new("").unwrap_err();
    }

    #[test]
    /// Verifies groups of zero words compare equal rather than panic.
    fn empty_groups_compare_equal() {
        let empty = Anagrams::default();
        let mut one = Anagrams::new("aet".to_string());
        one.push("eat".to_string());
        assert_eq!(comp_lex(&empty, &one), Ordering::Equal);
        assert_eq!(comp_lex(&one, &empty), Ordering::Equal);
        assert_eq!(comp_lex(&empty, &empty), Ordering::Equal);
    }

    #[test]
    /// Verifies output over a mixed corpus against known-good text, per method.
    fn golden_corpus() {
        let input = "<<dro\\nat\\nbar\\nbry\\nta\\nord\\nbra\\nbyr\\nrod\\nmor\\nrom\\nalene";

        // count : "dro ord rod" is biggest, then pairs by earliest word
        assert_eq!(
            find_str(input, SortMethod::Count),
            "dro ord rod\nat ta\nbar bra\nbry byr\nmor rom\n"
        );
        // lex : ascending by earliest word
        assert_eq!(
            find_str(input, SortMethod::Lexicographic),
            "at ta\nbar bra\nbry byr\ndro ord rod\nmor rom\n"
        );
        // wordsig : ascending by signature (abr, at, bry, dor, mor)
        assert_eq!(
            find_str(input, SortMethod::WordSignature),
            "bar bra\nat ta\nbry byr\ndro ord rod\nmor rom\n"
        );
    }
}
