use honggfuzz::fuzz;
use wordsum::numeral::{format_signed, parse};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.is_empty() {
                return;
            }
            let base = 2 + (data[0] as u32 % 35);
            if let Ok(text) = std::str::from_utf8(&data[1..]) {
                if let Ok(v) = parse(text, base) {
                    let back = format_signed(v, base).unwrap();
                    assert_eq!(parse(&back, base).unwrap(), v);
                }
            }
        });
    }
}
