use honggfuzz::fuzz;
use wordsum::Cipher;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(key) = std::str::from_utf8(data) {
                if let Ok(c) = Cipher::from_key(key, data.len() % 2 == 0) {
                    for l in key.chars() {
                        let enc = c.encode(&l.to_string()).unwrap();
                        assert_eq!(c.decode(&enc).unwrap(), l.to_string());
                    }
                    let w = c.word_for(data.len() as u64 * 7919);
                    assert_eq!(c.decode(&w.numbers).unwrap(), w.letters);
                }
            }
        });
    }
}
