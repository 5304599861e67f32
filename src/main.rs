use std::{env, fs::read_to_string, time::Instant};

use alang::{
    display_error, lexer::lexer::tokenize, parser::parser::parse, resolver::resolver::resolve,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let full_path = env::current_dir().unwrap().join(file_path);
    let file_contents = read_to_string(&full_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), full_path);
        panic!()
    }

    let tokens = tokens.unwrap();
    for token in tokens.iter() {
        token.debug();
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (_, parsed) = parse(tokens);

    println!("Parsed in {:?}", parse_start.elapsed());

    if parsed.is_err() {
        display_error(parsed.err().unwrap(), full_path);
        panic!()
    }

    let program = parsed.unwrap();

    let resolve_start = Instant::now();
    let resolved = resolve(&program);

    println!("Resolved in {:?}", resolve_start.elapsed());

    match resolved {
        Ok(resolver) => {
            println!(
                "Accepted {} top-level declarations ({} global symbols)",
                program.declarations.len(),
                resolver.globals.len()
            );
            println!("Total time: {:?}", start.elapsed());
        }
        Err(error) => {
            display_error(error, full_path);
            panic!()
        }
    }
}
