use divi_keyaddress::prelude::*;
use divi_keyaddress::{address, message, script::opcodes};

//BIP39 seed of "abandon abandon ... about" with an empty passphrase
const SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

fn derive(path: &str) -> Xprv {
    let root = Xprv::from_seed(&hex::decode(SEED).unwrap()).unwrap();
    root.derive_path(&path.parse().unwrap()).unwrap()
}

#[test]
fn divi_receive_address() {
    let params = "divi".parse::<Network>().unwrap().params();
    let key = derive("m/44'/301'/0'/0/0");

    let payment = address::p2pkh(&key.get_pub().as_bytes(), params).unwrap();
    assert_eq!(payment.address, "DHnrKW52thFXkbftiAFNnmCjP176vkWnRK");
    assert_eq!(payment.hash, key.identifier());

    let testnet = address::p2pkh(&key.get_pub().as_bytes(), &DIVI_TESTNET).unwrap();
    assert_eq!(testnet.address, "y9dbeLZSHMm2tqsLNtZ7eRsUyzBvTZp6ts");
}

#[test]
fn wif_export_and_import() {
    let key = derive("m/44'/301'/0'/0/0");
    let wif = key.to_wif(&DIVI);
    assert_eq!(wif, "QRKJErUtx2fWPGoemaqpQwjzHnFaJGUPjYKhbVdtSPSY4TVgTFTB");

    let (imported, compressed) = PrivKey::from_wif(&wif, &DIVI).unwrap();
    assert!(compressed);
    assert_eq!(imported, key.key());
    assert!(PrivKey::from_wif(&wif, &BITCOIN).is_err());
}

#[test]
fn bitcoin_receive_address() {
    let key = derive("m/44'/0'/0'/0/0");
    let payment = address::p2pkh(&key.get_pub().as_bytes(), &BITCOIN).unwrap();
    assert_eq!(payment.address, "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
    assert_eq!(address::to_output_script(&payment.address, &BITCOIN).unwrap(), payment.script);
}

#[test]
fn watch_only_account() {
    let account = derive("m/44'/301'/0'");
    let xpub = account.get_xpub().serialize(&DIVI);
    let watch_only = Xpub::from_str(&xpub, &DIVI).unwrap();

    let path: Path = "0/0".parse().unwrap();
    let key = watch_only.derive_path(&path).unwrap();
    assert_eq!(
        address::p2pkh(&key.get_pub().as_bytes(), &DIVI).unwrap().address,
        "DHnrKW52thFXkbftiAFNnmCjP176vkWnRK"
    );
    assert_eq!(
        watch_only.derive_path(&"0'".parse().unwrap()),
        Err(HDWError::HardenedWithoutPrivate(0x8000_0000))
    );
}

#[test]
fn vault_payment() {
    let owner = derive("m/44'/301'/0'/0/0").identifier();
    let manager = derive("m/44'/301'/1'/0/0").identifier();

    let vault = Script::vault(&owner, &manager).unwrap();
    let chunks = vault.decompile().unwrap();
    assert_eq!(chunks[0], Chunk::Op(opcodes::OP_IF));
    assert_eq!(chunks[1], Chunk::Push(owner.to_vec()));
    assert_eq!(chunks[3], Chunk::Op(opcodes::OP_REQUIRE_COINSTAKE));
    assert_eq!(chunks[4], Chunk::Push(manager.to_vec()));

    let asm = vault.to_asm(&DIVI_TABLE).unwrap();
    assert!(asm.contains("OP_ELSE OP_REQUIRE_COINSTAKE"));
    assert_eq!(Script::from_asm(&asm, &DIVI_TABLE).unwrap(), vault);
    assert!(vault.to_asm(&STANDARD_TABLE).unwrap().contains("OP_ELSE OP_NOP10"));

    let payment = address::p2sh(&vault, &DIVI).unwrap();
    assert!(payment.address.starts_with('6'));
    assert_eq!(address::from_output_script(&payment.script, &DIVI).unwrap(), payment.address);
}

#[test]
fn divi_opcode_names() {
    assert_eq!(DIVI_TABLE.name(Opcode::from(185)), "OP_REQUIRE_COINSTAKE");
    assert_eq!(DIVI_TABLE.name(Opcode::from(209)), "OP_CHECKCOLDSTAKEVERIFY_LOF");
    assert_eq!(DIVI_TABLE.name(Opcode::from(210)), "OP_CHECKCOLDSTAKEVERIFY");
    assert_eq!(DIVI_TABLE.name(Opcode::from(224)), "OP_EXCHANGEADDR");
    assert_eq!(DIVI_TABLE.code("OP_NOP10"), Some(Opcode::from(185)));
}

#[test]
fn signed_message_digest() {
    assert_ne!(message::magic_hash("hello world", &DIVI), message::magic_hash("hello world", &BITCOIN));
    assert_eq!(
        hex::encode(message::magic_hash("hello world", &DIVI)),
        "424133ff99f1333143533980576533756723e9270cdac98eba91d0742d55900e"
    );
}
