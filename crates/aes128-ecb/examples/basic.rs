//! Demonstrates one session encrypting and decrypting a two-block message.

use aes128_ecb::Aes128Ecb;

fn main() {
    // Fixed key for reproducibility in the example.
    let key = [0u8; 16];
    let cipher = Aes128Ecb::new(&key).expect("16-byte key");

    let mut message = [0u8; 32];
    message[..16].copy_from_slice(b"first block here");
    message[16..].copy_from_slice(b"second blockhere");

    let ciphertext = cipher.encrypt(&message).expect("encrypt message");
    let decrypted = cipher.decrypt(&ciphertext).expect("decrypt message");
    assert_eq!(decrypted, message);

    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("example succeeded; round trip matches the input");
}
