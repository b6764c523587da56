use huffman_text::Huffman;
use std::env;
use std::fs;
use std::process;

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");

    let text = fs::read_to_string(fp).expect("First argument was not a readable UTF-8 file.");

    let mut h = Huffman::new();
    let encoded = h.encode_str(&text);
    println!("{}", h.report());

    match h.decode_to_string(&encoded) {
        Ok(decoded) if decoded == text => println!("Round trip OK ({} bits)", encoded.len()),
        Ok(_) => {
            eprintln!("Round trip produced different text");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Decoding failed: {}", e);
            process::exit(1);
        }
    }
}
