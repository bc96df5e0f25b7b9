use agram::prelude::*;
use clap::ArgAction;

#[macro_export]
macro_rules! arg_enum {
    ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: $e }
    };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileCount {
    Zero,
    One,
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub files: FileCount,
    pub version: &'static str,
}

impl ProgSpec {
    pub const fn new(help: &'static str, files: FileCount) -> Self {
        Self { help, files, version: env!("CARGO_PKG_VERSION") }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
    pub values: &'static [&'static str],
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

fn add_arg(a: clap::Command<'static>, x: &ArgSpec) -> clap::Command<'static> {
    let mut b = clap::Arg::new(x.name);
    if let Some(short) = x.short.chars().next() {
        b = b.short(short);
    }
    b = b.long(x.name).help(x.help).value_name(x.value).action(ArgAction::Append);
    if !x.values.is_empty() {
        b = b.value_parser(clap::builder::PossibleValuesParser::new(x.values));
    }
    a.arg(b)
}

fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    if let Some(arg) = m.get_many::<String>(x.name) {
        let ind = m.indices_of(x.name).unwrap().collect::<Vec<_>>();
        assert_eq!(ind.len(), arg.len());
        for (i, val) in arg.enumerate() {
            v.push(ArgValue::new(x.name, val, ind[i]));
        }
    }
}

/// parse the command line. Unknown options, bad option values and excess
/// files are configuration errors, reported by clap with usage and status 2.
pub fn parse(
    prog: &ProgSpec,
    spec: &[ArgSpec],
    argv: &[String],
) -> Result<(Vec<ArgValue>, Vec<String>)> {
    let mut a = clap::Command::new("agram").version(prog.version).about(prog.help);

    for x in spec {
        a = add_arg(a, x);
    }
    match prog.files {
        FileCount::Zero => {}
        FileCount::One => {
            a = a.arg(clap::Arg::new("input_files"));
        }
    }
    a.clone().debug_assert();
    let m = a.get_matches_from(argv);
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    let mut files: Vec<String> = Vec::new();
    if prog.files != FileCount::Zero {
        if let Some(arg) = m.get_many::<String>("input_files") {
            for f in arg {
                files.push(f.to_string());
            }
        }
        if files.is_empty() {
            files.push("-".to_string());
        }
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok((v, files))
}
