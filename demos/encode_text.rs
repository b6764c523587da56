use huffman_text::Huffman;

fn main() {
    let s = String::from("Hello my name is Sam!");
    let mut h = Huffman::new();

    let out = h.encode_str(&s);
    println!("{}", h.report());
    println!("Encoded Bitstring:\n{}", out);

    let dec = h.decode_to_string(&out);
    println!("{:?}", dec);
}
