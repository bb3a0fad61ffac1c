use std::{env, fs::read_to_string, time::Instant};

use idlc::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let lexed = match tokenize(&source) {
        Ok(lexed) => lexed,
        Err(error) => {
            display_error(&error, &source);
            panic!()
        }
    };

    for error in &lexed.errors {
        display_error(error, &source);
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();

    let program = match parse(lexed.tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source);
            panic!()
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    println!("{:#?}", program);
}
