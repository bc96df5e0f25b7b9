use agram::prelude::*;
use std::env;

pub mod args;

use crate::args::ArgSpec;

fn main() {
    match inner_main(&env::args().collect::<Vec<String>>()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(e.exit_code());
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(e.exit_code());
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

fn inner_main(argv: &[String]) -> Result<()> {
    let prog = args::ProgSpec::new("Group words that are anagrams of each other.", args::FileCount::One);
    const A: [ArgSpec; 1] = [
        arg_enum! {"sort", "s", "Method", "How to order the anagram groups.", &["count", "lex", "wordsig"]},
    ];
    let (args, files) = args::parse(&prog, &A, argv)?;

    let mut method = SortMethod::default();
    for x in args {
        if x.name == "sort" {
            method = SortMethod::new(&x.value)?;
        } else {
            unreachable!();
        }
    }

    assert_eq!(files.len(), 1);

    let mut w = get_writer("-")?;
    agram::anagram::find(&files[0], method, &mut w)?;
    w.flush()?;
    Ok(())
}
