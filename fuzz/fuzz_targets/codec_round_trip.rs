use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(config) = framelink::codec::decode(data) {
                let encoded = framelink::codec::encode(&config).unwrap();
                // only the reserved flag bits may differ
                assert_eq!(encoded[..27], data[..27]);
                assert_eq!(encoded[27], data[27] & 0b11);
                let token = framelink::token::encode(&config).unwrap();
                assert_eq!(framelink::token::decode(&token).unwrap(), config);
            }
        });
    }
}
